use reqwest::{Client, Response};
use secrecy::ExposeSecret;

use crate::config::odds_api::OddsApiSettings;
use crate::models::error::AppError;
use crate::models::matchup::Matchup;

const MATCHUPS_ERROR: &str = "Failed to fetch NFL matchups";

/// Client for the third-party odds provider
#[derive(Debug, Clone)]
pub struct OddsClient {
    settings: OddsApiSettings,
    client: Client,
}

impl OddsClient {
    pub fn new(settings: OddsApiSettings) -> Result<Self, reqwest::Error> {
        let client = Client::builder().timeout(settings.timeout()).build()?;
        Ok(Self { settings, client })
    }

    /// Fetch upcoming matchups with odds for the configured regions and markets
    pub async fn get_matchups(&self) -> Result<Vec<Matchup>, AppError> {
        let url = self.settings.odds_url();

        tracing::debug!("📡 Fetching matchups from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("apiKey", self.settings.api_key.expose_secret()),
                ("regions", self.settings.regions.as_str()),
                ("markets", self.settings.markets.as_str()),
            ])
            .send()
            .await
            .map_err(|e| {
                tracing::error!("❌ Odds provider request failed: {}", e);
                AppError::Upstream(MATCHUPS_ERROR.to_string())
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let error_text = response.text().await.unwrap_or_else(|_| "Unknown error".to_string());
            tracing::error!("❌ Odds provider returned error {}: {}", status, error_text);
            return Err(AppError::Upstream(MATCHUPS_ERROR.to_string()));
        }

        log_quota(&response);

        let matchups = response.json::<Vec<Matchup>>().await.map_err(|e| {
            tracing::error!("❌ Failed to parse odds provider response: {}", e);
            AppError::Upstream(MATCHUPS_ERROR.to_string())
        })?;

        tracing::info!("✅ Fetched {} matchups", matchups.len());
        Ok(matchups)
    }
}

fn log_quota(response: &Response) {
    let header = |name: &str| {
        response
            .headers()
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned)
    };

    if let (Some(remaining), Some(used)) = (header("x-requests-remaining"), header("x-requests-used")) {
        tracing::debug!("Odds API quota: {} remaining, {} used", remaining, used);
    }
}
