pub mod game_results;
pub mod user_results;
pub mod votes;

pub use game_results::GameResultQueries;
pub use user_results::UserResultQueries;
pub use votes::VoteQueries;
