use serde::{Deserialize, Serialize};

/// A scheduled game with bookmaker odds, as listed by the odds provider
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Matchup {
    pub id: String,
    #[serde(default)]
    pub sport_key: String,
    #[serde(default)]
    pub sport_title: String,
    #[serde(default)]
    pub commence_time: String,
    pub home_team: String,
    pub away_team: String,
    #[serde(default)]
    pub bookmakers: Vec<Bookmaker>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Bookmaker {
    #[serde(default)]
    pub key: String,
    pub title: String,
    #[serde(default)]
    pub last_update: String,
    #[serde(default)]
    pub markets: Vec<OddsMarket>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OddsMarket {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_update: Option<String>,
    #[serde(default)]
    pub outcomes: Vec<Outcome>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Outcome {
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub point: Option<f64>,
}
