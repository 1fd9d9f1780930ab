pub mod odds_client;

pub use odds_client::OddsClient;
