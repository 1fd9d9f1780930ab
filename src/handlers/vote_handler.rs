use actix_web::{web, HttpResponse, ResponseError, Result};
use sqlx::PgPool;

use crate::db::VoteQueries;
use crate::middleware::session::SessionClaims;
use crate::models::common::ApiResponse;
use crate::models::error::AppError;
use crate::models::vote::{MatchupVotes, VoteRequest};

/// Record the caller's pick for a matchup
#[tracing::instrument(
    name = "Submit vote",
    skip(vote_request, pool, claims),
    fields(
        user_id = %claims.sub,
        matchup_id = ?vote_request.matchup_id
    )
)]
pub async fn submit_vote(
    vote_request: web::Json<VoteRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(AppError::Unauthorized("Invalid session token".to_string()).error_response());
        }
    };

    let (matchup_id, vote) = match vote_request.into_inner().validate() {
        Ok(fields) => fields,
        Err(e) => {
            tracing::warn!("Rejected vote: {}", e);
            return Ok(e.error_response());
        }
    };

    let queries = VoteQueries::new(pool.get_ref().clone());

    match queries.submit_vote(&matchup_id, user_id, &vote).await {
        Ok(stored) => {
            tracing::info!("Vote {} recorded for matchup {}", stored.id, matchup_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success("Vote submitted", stored)))
        }
        Err(e) => {
            tracing::error!("Error submitting vote: {}", e);
            Ok(e.error_response())
        }
    }
}

/// Votes and per-choice tally of one matchup
#[tracing::instrument(
    name = "Get matchup votes",
    skip(pool)
)]
pub async fn get_matchup_votes(
    matchup_id: String,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let queries = VoteQueries::new(pool.get_ref().clone());

    let votes = match queries.get_votes_for_matchup(&matchup_id).await {
        Ok(votes) => votes,
        Err(e) => {
            tracing::error!("Error fetching votes: {}", e);
            return Ok(e.error_response());
        }
    };

    let tally = match queries.get_vote_tally(&matchup_id).await {
        Ok(tally) => tally,
        Err(e) => {
            tracing::error!("Error fetching vote tally: {}", e);
            return Ok(e.error_response());
        }
    };

    Ok(HttpResponse::Ok().json(MatchupVotes {
        matchup_id,
        votes,
        tally,
    }))
}
