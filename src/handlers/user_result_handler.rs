use actix_web::{web, HttpResponse, ResponseError, Result};
use sqlx::PgPool;

use crate::db::UserResultQueries;
use crate::middleware::session::SessionClaims;
use crate::models::error::AppError;

/// Results of the caller's votes on finished matchups
#[tracing::instrument(
    name = "Get user results",
    skip(pool, claims),
    fields(
        user_id = %claims.sub
    )
)]
pub async fn get_user_results(
    pool: web::Data<PgPool>,
    claims: web::ReqData<SessionClaims>,
) -> Result<HttpResponse> {
    let user_id = match claims.user_id() {
        Some(id) => id,
        None => {
            return Ok(AppError::Unauthorized("Invalid session token".to_string()).error_response());
        }
    };

    let queries = UserResultQueries::new(pool.get_ref().clone());

    match queries.get_user_results(user_id).await {
        Ok(results) => Ok(HttpResponse::Ok().json(results)),
        Err(e) => {
            tracing::error!("Error fetching user results: {}", e);
            Ok(e.error_response())
        }
    }
}

#[tracing::instrument(
    name = "Get all user results",
    skip(pool)
)]
pub async fn get_all_user_results(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse> {
    let queries = UserResultQueries::new(pool.get_ref().clone());

    match queries.get_all_user_results().await {
        Ok(results) => {
            tracing::info!("Successfully retrieved {} vote results", results.len());
            Ok(HttpResponse::Ok().json(results))
        }
        Err(e) => {
            tracing::error!("Error fetching all user results: {}", e);
            Ok(e.error_response())
        }
    }
}
