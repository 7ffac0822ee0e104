//! Errors from parsing position strings.

/// Errors that occur when parsing a tic-tac-toe or Kalah position.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PositionError {
    /// The position does not have the expected number of space-separated fields.
    #[error("expected {expected} fields, found {found}")]
    WrongFieldCount {
        /// Number of fields the format requires.
        expected: usize,
        /// Number of fields found.
        found: usize,
    },
    /// The tic-tac-toe cell field does not describe exactly 9 cells.
    #[error("expected 9 cells, found {found}")]
    WrongCellCount {
        /// Number of cells found.
        found: usize,
    },
    /// An unrecognized character appeared in the cell field.
    #[error("invalid cell character: '{character}'")]
    InvalidCell {
        /// The invalid character.
        character: char,
    },
    /// A Kalah pit or store holds something other than a seed count.
    #[error("invalid seed count at field {index}: \"{found}\"")]
    InvalidSeedCount {
        /// Zero-based field index.
        index: usize,
        /// The invalid string.
        found: String,
    },
    /// A Kalah position holds more seeds than a board can count.
    #[error("position holds {total} seeds, at most {max} allowed")]
    TooManySeeds {
        /// Seeds across all pits and stores.
        total: u32,
        /// The largest accepted total.
        max: u32,
    },
    /// The side-to-move field is not recognized.
    #[error("invalid side to move: \"{found}\"")]
    InvalidSide {
        /// The invalid side string.
        found: String,
    },
}
