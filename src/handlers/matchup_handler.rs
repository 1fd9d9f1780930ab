use actix_web::{web, HttpResponse, ResponseError, Result};

use crate::services::OddsClient;

/// List upcoming NFL matchups with odds
#[tracing::instrument(
    name = "Get NFL matchups",
    skip(odds_client)
)]
pub async fn get_nfl_matchups(
    odds_client: web::Data<OddsClient>,
) -> Result<HttpResponse> {
    match odds_client.get_matchups().await {
        Ok(matchups) => {
            tracing::info!("Returning {} matchups", matchups.len());
            Ok(HttpResponse::Ok().json(matchups))
        }
        Err(e) => {
            tracing::error!("Failed to fetch NFL matchups: {}", e);
            Ok(e.error_response())
        }
    }
}
