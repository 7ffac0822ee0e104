//! Tic-tac-toe, a game in which every move passes the turn.
//!
//! Squares are numbered 0..9 row by row from the top-left corner. Positions
//! are written as nine cells (`x`, `o` or `.`) followed by the side to move:
//! `"xx.oo.... x"`.

use std::fmt;
use std::ops::Not;
use std::str::FromStr;

use negamax_engine::Game;

use crate::error::PositionError;

/// Base score of a won game; faster wins score higher.
pub const WIN_SCORE: f64 = 10.0;

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// Return the opposite mark.
    #[inline]
    pub const fn flip(self) -> Mark {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    fn to_char(self) -> char {
        match self {
            Mark::X => 'x',
            Mark::O => 'o',
        }
    }
}

impl Not for Mark {
    type Output = Mark;

    #[inline]
    fn not(self) -> Mark {
        self.flip()
    }
}

/// A tic-tac-toe position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [Option<Mark>; 9],
    to_move: Mark,
}

impl Board {
    /// The empty board with X to move.
    pub const fn new() -> Board {
        Board {
            cells: [None; 9],
            to_move: Mark::X,
        }
    }

    /// The mark on `square`, if any.
    pub fn cell(&self, square: usize) -> Option<Mark> {
        self.cells[square]
    }

    /// Which side moves next.
    pub fn side_to_move(&self) -> Mark {
        self.to_move
    }

    /// The side holding a complete line, if any.
    pub fn winner(&self) -> Option<Mark> {
        LINES.iter().find_map(|&[a, b, c]| match self.cells[a] {
            Some(mark) if self.cells[b] == Some(mark) && self.cells[c] == Some(mark) => Some(mark),
            _ => None,
        })
    }

    /// Number of empty squares.
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_none()).count()
    }

    /// `true` if no empty squares remain.
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for cell in &self.cells {
            write!(f, "{}", cell.map_or('.', Mark::to_char))?;
        }
        write!(f, " {}", self.to_move.to_char())
    }
}

impl FromStr for Board {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<Board, PositionError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != 2 {
            return Err(PositionError::WrongFieldCount {
                expected: 2,
                found: fields.len(),
            });
        }

        let count = fields[0].chars().count();
        if count != 9 {
            return Err(PositionError::WrongCellCount { found: count });
        }

        let mut cells = [None; 9];
        for (cell, c) in cells.iter_mut().zip(fields[0].chars()) {
            *cell = match c {
                'x' | 'X' => Some(Mark::X),
                'o' | 'O' => Some(Mark::O),
                '.' => None,
                _ => return Err(PositionError::InvalidCell { character: c }),
            };
        }

        let to_move = match fields[1] {
            "x" | "X" => Mark::X,
            "o" | "O" => Mark::O,
            other => {
                return Err(PositionError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };

        Ok(Board { cells, to_move })
    }
}

/// Tic-tac-toe rules. Moves are square indices.
#[derive(Debug, Clone, Copy, Default)]
pub struct TicTacToe;

impl Game for TicTacToe {
    type State = Board;
    type Move = usize;

    fn generate_moves(&self, board: &Board) -> Vec<usize> {
        if board.winner().is_some() {
            return Vec::new();
        }
        (0..9).filter(|&sq| board.cells[sq].is_none()).collect()
    }

    fn make_move(&self, board: &mut Board, square: &usize) -> bool {
        debug_assert!(board.cells[*square].is_none(), "square {square} occupied");
        board.cells[*square] = Some(board.to_move);
        board.to_move = !board.to_move;
        true
    }

    fn unmake_move(&self, board: &mut Board, square: &usize) {
        board.cells[*square] = None;
        board.to_move = !board.to_move;
    }

    fn evaluate_terminal(&self, board: &Board) -> Option<f64> {
        let margin = WIN_SCORE + board.empty_count() as f64;
        match board.winner() {
            Some(mark) if mark == board.to_move => Some(margin),
            Some(_) => Some(-margin),
            None if board.is_full() => Some(0.0),
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_display_roundtrip() {
        let text = "xx.oo.... x";
        let board: Board = text.parse().unwrap();
        assert_eq!(board.to_string(), text);
        assert_eq!(board.cell(0), Some(Mark::X));
        assert_eq!(board.cell(3), Some(Mark::O));
        assert_eq!(board.cell(2), None);
        assert_eq!(board.side_to_move(), Mark::X);
    }

    #[test]
    fn new_board_is_empty() {
        let board = Board::new();
        assert_eq!(board.to_string(), "......... x");
        assert_eq!(board.empty_count(), 9);
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn parse_errors() {
        assert_eq!(
            "xx.oo....".parse::<Board>(),
            Err(PositionError::WrongFieldCount {
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            "xx.oo... x".parse::<Board>(),
            Err(PositionError::WrongCellCount { found: 8 })
        );
        assert_eq!(
            "xx.oo...q x".parse::<Board>(),
            Err(PositionError::InvalidCell { character: 'q' })
        );
        assert!(matches!(
            "xx.oo.... z".parse::<Board>(),
            Err(PositionError::InvalidSide { .. })
        ));
    }

    #[test]
    fn winner_on_every_line() {
        for line in LINES {
            let mut board = Board::new();
            for sq in line {
                board.cells[sq] = Some(Mark::O);
            }
            assert_eq!(board.winner(), Some(Mark::O), "line {line:?}");
        }
    }

    #[test]
    fn make_unmake_restores_board() {
        let game = TicTacToe;
        let mut board: Board = "x...o.... x".parse().unwrap();
        let before = board;
        assert!(game.make_move(&mut board, &8));
        assert_eq!(board.cell(8), Some(Mark::X));
        assert_eq!(board.side_to_move(), Mark::O);
        game.unmake_move(&mut board, &8);
        assert_eq!(board, before);
    }

    #[test]
    fn terminal_scores_from_side_to_move() {
        let game = TicTacToe;
        let lost: Board = "xxxoo.... o".parse().unwrap();
        assert_eq!(game.evaluate_terminal(&lost), Some(-14.0));
        assert!(game.generate_moves(&lost).is_empty());

        let drawn: Board = "xoxxoooxx o".parse().unwrap();
        assert_eq!(drawn.winner(), None);
        assert_eq!(game.evaluate_terminal(&drawn), Some(0.0));

        assert_eq!(game.evaluate_terminal(&Board::new()), None);
        assert_eq!(game.evaluate(&Board::new()), 0.0);
    }
}
