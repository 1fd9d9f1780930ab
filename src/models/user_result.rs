use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One user's vote on a matchup that already has a recorded result
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct UserResult {
    pub vote_id: Uuid,
    pub matchup_id: String,
    pub user_id: Uuid,
    pub vote: String,
    pub voted_at: DateTime<Utc>,
    pub home_team: String,
    pub away_team: String,
    pub home_score: i32,
    pub away_score: i32,
    pub winner: Option<String>,
    pub game_date: Option<NaiveDate>,
    /// `None` until a winner is recorded
    pub correct: Option<bool>,
}

/// Any user's vote with their username and, once recorded, the game result
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct UserVoteResult {
    pub vote_id: Uuid,
    pub matchup_id: String,
    pub user_id: Uuid,
    pub username: String,
    pub vote: String,
    pub voted_at: DateTime<Utc>,
    pub home_team: Option<String>,
    pub away_team: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub winner: Option<String>,
    pub game_date: Option<NaiveDate>,
    pub correct: Option<bool>,
}
