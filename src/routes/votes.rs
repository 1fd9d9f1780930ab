use actix_web::{get, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::vote_handler;
use crate::middleware::session::SessionClaims;
use crate::models::vote::VoteRequest;

/// Submit a vote (requires a session)
pub async fn submit_vote(
    vote_request: web::Json<VoteRequest>,
    pool: web::Data<PgPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    vote_handler::submit_vote(vote_request, pool, claims).await
}

/// Votes cast for a matchup
#[get("/votes/{matchup_id}")]
async fn get_matchup_votes(
    path: web::Path<String>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let matchup_id = path.into_inner();
    vote_handler::get_matchup_votes(matchup_id, pool).await
}
