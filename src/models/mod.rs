pub mod common;
pub mod error;
pub mod game_result;
pub mod matchup;
pub mod user_result;
pub mod vote;
