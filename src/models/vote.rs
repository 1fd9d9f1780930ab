use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::error::AppError;
use crate::models::game_result::{missing_fields, non_empty};

/// A user's pick for one matchup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct Vote {
    pub id: Uuid,
    pub matchup_id: String,
    pub user_id: Uuid,
    pub vote: String,
    pub created_at: DateTime<Utc>,
}

/// Number of votes cast for one choice of a matchup
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, sqlx::FromRow)]
pub struct VoteTally {
    pub vote: String,
    pub count: i64,
}

/// Body of `POST /api/votes`. The voter comes from the session, never from the body.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct VoteRequest {
    pub matchup_id: Option<String>,
    pub vote: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MatchupVotes {
    pub matchup_id: String,
    pub votes: Vec<Vote>,
    pub tally: Vec<VoteTally>,
}

impl VoteRequest {
    /// Returns the `(matchup_id, vote)` pair
    pub fn validate(self) -> Result<(String, String), AppError> {
        match (non_empty(self.matchup_id), non_empty(self.vote)) {
            (Some(matchup_id), Some(vote)) => Ok((matchup_id, vote)),
            (matchup_id, vote) => {
                let mut missing = Vec::new();
                if matchup_id.is_none() {
                    missing.push("matchup_id");
                }
                if vote.is_none() {
                    missing.push("vote");
                }
                Err(missing_fields(&missing))
            }
        }
    }
}
