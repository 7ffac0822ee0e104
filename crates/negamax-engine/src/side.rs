//! Perspective sign threaded through the search.

use std::fmt;

/// Which perspective a score is expressed in relative to the root caller.
///
/// The searcher threads a side through every recursive call and flips it
/// across moves that pass the turn. It never reads the side to flip a score:
/// negation is driven by the side-change signal of each move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Side {
    /// The root caller's perspective (`+1`).
    #[default]
    Positive,
    /// The opponent's perspective (`-1`).
    Negative,
}

impl Side {
    /// Return the numeric sign, `1` or `-1`.
    #[inline]
    pub const fn sign(self) -> i8 {
        match self {
            Side::Positive => 1,
            Side::Negative => -1,
        }
    }

    /// Return the opposite side.
    #[inline]
    pub const fn flip(self) -> Side {
        match self {
            Side::Positive => Side::Negative,
            Side::Negative => Side::Positive,
        }
    }

    /// The side after a move, flipped only if the move passed the turn.
    #[inline]
    pub const fn across(self, side_changed: bool) -> Side {
        if side_changed { self.flip() } else { self }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Positive => write!(f, "+1"),
            Side::Negative => write!(f, "-1"),
        }
    }
}
