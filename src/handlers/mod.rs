pub mod backend_health_handler;
pub mod game_result_handler;
pub mod matchup_handler;
pub mod user_result_handler;
pub mod vote_handler;
