use sqlx::PgPool;
use tracing::{debug, info};
use uuid::Uuid;

use crate::models::error::AppError;
use crate::models::vote::{Vote, VoteTally};

#[derive(Debug, Clone)]
pub struct VoteQueries {
    pool: PgPool,
}

impl VoteQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Record a vote. Repeated votes by the same user for the same matchup are all kept.
    pub async fn submit_vote(
        &self,
        matchup_id: &str,
        user_id: Uuid,
        vote: &str,
    ) -> Result<Vote, AppError> {
        info!("Submitting vote for matchup {} by user {}", matchup_id, user_id);

        let stored = sqlx::query_as::<_, Vote>(
            r#"
            INSERT INTO votes (id, matchup_id, user_id, vote)
            VALUES ($1, $2, $3, $4)
            RETURNING id, matchup_id, user_id, vote, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(matchup_id)
        .bind(user_id)
        .bind(vote)
        .fetch_one(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to submit vote"))?;

        Ok(stored)
    }

    /// All votes cast for a matchup, oldest first
    pub async fn get_votes_for_matchup(&self, matchup_id: &str) -> Result<Vec<Vote>, AppError> {
        let votes = sqlx::query_as::<_, Vote>(
            r#"
            SELECT id, matchup_id, user_id, vote, created_at
            FROM votes
            WHERE matchup_id = $1
            ORDER BY created_at ASC, id ASC
            "#,
        )
        .bind(matchup_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to fetch votes"))?;

        debug!("Found {} votes for matchup {}", votes.len(), matchup_id);
        Ok(votes)
    }

    /// Vote counts per choice for a matchup, most popular first
    pub async fn get_vote_tally(&self, matchup_id: &str) -> Result<Vec<VoteTally>, AppError> {
        let tally = sqlx::query_as::<_, VoteTally>(
            r#"
            SELECT vote, COUNT(*) AS count
            FROM votes
            WHERE matchup_id = $1
            GROUP BY vote
            ORDER BY count DESC, vote ASC
            "#,
        )
        .bind(matchup_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to fetch votes"))?;

        Ok(tally)
    }
}
