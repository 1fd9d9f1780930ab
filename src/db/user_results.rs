use sqlx::PgPool;
use tracing::debug;
use uuid::Uuid;

use crate::models::error::AppError;
use crate::models::user_result::{UserResult, UserVoteResult};

/// Joined reads over votes, users and game results
#[derive(Debug, Clone)]
pub struct UserResultQueries {
    pool: PgPool,
}

impl UserResultQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Votes of one user on matchups that already have a result.
    /// Votes on matchups without a result are left out.
    pub async fn get_user_results(&self, user_id: Uuid) -> Result<Vec<UserResult>, AppError> {
        let results = sqlx::query_as::<_, UserResult>(
            r#"
            SELECT
                v.id AS vote_id,
                v.matchup_id,
                v.user_id,
                v.vote,
                v.created_at AS voted_at,
                gr.home_team,
                gr.away_team,
                gr.home_score,
                gr.away_score,
                gr.winner,
                gr.game_date,
                (v.vote = gr.winner) AS correct
            FROM votes v
            INNER JOIN game_results gr ON gr.matchup_id = v.matchup_id
            WHERE v.user_id = $1
            ORDER BY gr.game_date DESC, v.created_at DESC
            "#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to fetch user results"))?;

        debug!("Found {} results for user {}", results.len(), user_id);
        Ok(results)
    }

    /// Every vote with the voter's username and the game result where one exists
    pub async fn get_all_user_results(&self) -> Result<Vec<UserVoteResult>, AppError> {
        let results = sqlx::query_as::<_, UserVoteResult>(
            r#"
            SELECT
                v.id AS vote_id,
                v.matchup_id,
                v.user_id,
                u.username,
                v.vote,
                v.created_at AS voted_at,
                gr.home_team,
                gr.away_team,
                gr.home_score,
                gr.away_score,
                gr.winner,
                gr.game_date,
                (v.vote = gr.winner) AS correct
            FROM votes v
            INNER JOIN users u ON u.id = v.user_id
            LEFT JOIN game_results gr ON gr.matchup_id = v.matchup_id
            ORDER BY u.username ASC, v.created_at DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to fetch user results"))?;

        debug!("Found {} vote results across all users", results.len());
        Ok(results)
    }
}
