use actix_web::{web, HttpResponse, ResponseError, Result};
use sqlx::PgPool;

use crate::db::GameResultQueries;
use crate::models::common::ApiResponse;
use crate::models::game_result::GameResultRequest;

/// Get all game results, most recent first
#[tracing::instrument(
    name = "Get game results",
    skip(pool)
)]
pub async fn get_game_results(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let queries = GameResultQueries::new(pool.get_ref().clone());

    match queries.get_game_results().await {
        Ok(results) => {
            tracing::info!("Successfully retrieved {} game results", results.len());
            Ok(HttpResponse::Ok().json(results))
        }
        Err(e) => {
            tracing::error!("Error fetching game results: {}", e);
            Ok(e.error_response())
        }
    }
}

/// Create or replace the result of a matchup
#[tracing::instrument(
    name = "Store game result",
    skip(result_request, pool),
    fields(
        matchup_id = ?result_request.matchup_id
    )
)]
pub async fn store_game_result(
    result_request: web::Json<GameResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let new_result = match result_request.into_inner().validate() {
        Ok(result) => result,
        Err(e) => {
            tracing::warn!("Rejected game result: {}", e);
            return Ok(e.error_response());
        }
    };

    let queries = GameResultQueries::new(pool.get_ref().clone());

    match queries.upsert_game_result(&new_result).await {
        Ok(rows) => {
            tracing::info!("Successfully stored result for matchup {}", new_result.matchup_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success("Game result stored", rows)))
        }
        Err(e) => {
            tracing::error!("Error storing game result: {}", e);
            Ok(e.error_response())
        }
    }
}
