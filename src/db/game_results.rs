use sqlx::PgPool;
use tracing::{debug, info};

use crate::models::error::AppError;
use crate::models::game_result::{GameResult, NewGameResult};

#[derive(Debug, Clone)]
pub struct GameResultQueries {
    pool: PgPool,
}

impl GameResultQueries {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All recorded results, most recent game first
    pub async fn get_game_results(&self) -> Result<Vec<GameResult>, AppError> {
        let results = sqlx::query_as::<_, GameResult>(
            r#"
            SELECT matchup_id, home_team, away_team, home_score, away_score,
                   winner, game_date, updated_at
            FROM game_results
            ORDER BY game_date DESC, matchup_id ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to fetch game results"))?;

        debug!("Fetched {} game results", results.len());
        Ok(results)
    }

    /// Insert or replace the result for `matchup_id`.
    ///
    /// `winner` and `game_date` are only overwritten when present in the request,
    /// so a score correction without them keeps the previously stored values.
    /// An explicit null clears them.
    pub async fn upsert_game_result(&self, result: &NewGameResult) -> Result<Vec<GameResult>, AppError> {
        info!(
            "Storing result for matchup {}: {} {} - {} {}",
            result.matchup_id, result.home_team, result.home_score, result.away_score, result.away_team
        );

        let rows = sqlx::query_as::<_, GameResult>(
            r#"
            INSERT INTO game_results
                (matchup_id, home_team, away_team, home_score, away_score, winner, game_date, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, NOW())
            ON CONFLICT (matchup_id) DO UPDATE SET
                home_team = EXCLUDED.home_team,
                away_team = EXCLUDED.away_team,
                home_score = EXCLUDED.home_score,
                away_score = EXCLUDED.away_score,
                winner = CASE WHEN $8 THEN EXCLUDED.winner ELSE game_results.winner END,
                game_date = CASE WHEN $9 THEN EXCLUDED.game_date ELSE game_results.game_date END,
                updated_at = NOW()
            RETURNING matchup_id, home_team, away_team, home_score, away_score,
                      winner, game_date, updated_at
            "#,
        )
        .bind(&result.matchup_id)
        .bind(&result.home_team)
        .bind(&result.away_team)
        .bind(result.home_score)
        .bind(result.away_score)
        .bind(result.winner.clone().flatten())
        .bind(result.game_date.flatten())
        .bind(result.winner.is_some())
        .bind(result.game_date.is_some())
        .fetch_all(&self.pool)
        .await
        .map_err(AppError::persistence("Failed to store game result"))?;

        Ok(rows)
    }
}
