use actix_web::{get, web, HttpResponse, Result};

use crate::handlers::matchup_handler;
use crate::services::OddsClient;

/// Upcoming NFL matchups with odds
#[get("/nfl-matchups")]
async fn get_nfl_matchups(
    odds_client: web::Data<OddsClient>,
) -> Result<HttpResponse> {
    matchup_handler::get_nfl_matchups(odds_client).await
}
