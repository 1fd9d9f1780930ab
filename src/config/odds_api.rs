use std::time::Duration;

use secrecy::SecretString;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct OddsApiSettings {
    pub base_url: String,
    pub api_key: SecretString,
    pub sport: String,
    pub regions: String,
    pub markets: String,
    pub timeout_secs: u64,
}

impl OddsApiSettings {
    /// Endpoint listing upcoming events with odds for the configured sport
    pub fn odds_url(&self) -> String {
        format!(
            "{}/sports/{}/odds/",
            self.base_url.trim_end_matches('/'),
            self.sport
        )
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
