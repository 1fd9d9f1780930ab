use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::models::error::AppError;

/// Final score of a matchup, keyed by the provider's matchup id
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct GameResult {
    pub matchup_id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub winner: Option<String>,
    pub game_date: Option<NaiveDate>,
    pub updated_at: DateTime<Utc>,
}

/// Body of `POST /api/game-results`. Every field is optional at the wire level
/// so that missing fields surface as a validation error instead of a parse error.
///
/// `winner` and `game_date` distinguish an absent key (`None`, keep the stored
/// value) from an explicit `null` (`Some(None)`, clear it).
#[derive(Debug, Deserialize, Default, Clone)]
pub struct GameResultRequest {
    pub matchup_id: Option<String>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub winner: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub game_date: Option<Option<NaiveDate>>,
}

/// Only called when the key is present, so `null` becomes `Some(None)`.
fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// A validated game result ready to be upserted
#[derive(Debug, Clone, PartialEq)]
pub struct NewGameResult {
    pub matchup_id: String,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    /// `None` when omitted from the request
    pub winner: Option<Option<String>>,
    /// `None` when omitted from the request
    pub game_date: Option<Option<NaiveDate>>,
}

impl GameResultRequest {
    /// Scores are checked for presence only, a score of zero is valid.
    pub fn validate(self) -> Result<NewGameResult, AppError> {
        let mut missing = Vec::new();

        let matchup_id = non_empty(self.matchup_id);
        if matchup_id.is_none() {
            missing.push("matchup_id");
        }
        let home_team = non_empty(self.home_team);
        if home_team.is_none() {
            missing.push("home_team");
        }
        let away_team = non_empty(self.away_team);
        if away_team.is_none() {
            missing.push("away_team");
        }
        if self.home_score.is_none() {
            missing.push("home_score");
        }
        if self.away_score.is_none() {
            missing.push("away_score");
        }

        match (matchup_id, home_team, away_team, self.home_score, self.away_score) {
            (Some(matchup_id), Some(home_team), Some(away_team), Some(home_score), Some(away_score)) => {
                Ok(NewGameResult {
                    matchup_id,
                    home_team,
                    away_team,
                    home_score,
                    away_score,
                    winner: self.winner.map(non_empty),
                    game_date: self.game_date,
                })
            }
            _ => Err(missing_fields(&missing)),
        }
    }
}

pub(crate) fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

pub(crate) fn missing_fields(fields: &[&str]) -> AppError {
    AppError::Validation(format!("Missing required fields: {}", fields.join(", ")))
}
