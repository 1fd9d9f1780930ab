use actix_web::{get, post, web, HttpResponse, Result};
use sqlx::PgPool;

use crate::handlers::game_result_handler;
use crate::models::game_result::GameResultRequest;

/// Get all game results
#[get("/game-results")]
async fn get_game_results(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_result_handler::get_game_results(pool).await
}

/// Create or replace a game result
#[post("/game-results")]
async fn store_game_result(
    result_request: web::Json<GameResultRequest>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    game_result_handler::store_game_result(result_request, pool).await
}
