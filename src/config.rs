pub mod odds_api;
pub mod session;
pub mod settings;
