//! Game-independent negamax search with alpha-beta pruning.

pub mod config;
pub mod error;
pub mod game;
pub mod search;
mod side;

pub use config::{ClosureGame, GameConfig};
pub use error::ConfigError;
pub use game::Game;
pub use search::{ScoreOrigin, SearchResult, Searcher};
pub use side::Side;
