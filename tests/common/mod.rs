pub mod odds_mock;
pub mod utils;
