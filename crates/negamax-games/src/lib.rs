//! Reference games for the negamax engine: tic-tac-toe, Kalah and perft.

mod error;
mod kalah;
mod perft;
mod tictactoe;

pub use error::PositionError;
pub use kalah::{HOUSES, Kalah, KalahBoard, MAX_SEEDS, Player};
pub use perft::{divide, perft};
pub use tictactoe::{Board, Mark, TicTacToe, WIN_SCORE};
