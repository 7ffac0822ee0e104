//! Kalah (six-pit mancala), a game with an extra-turn rule.
//!
//! The board has 14 slots sown counter-clockwise: South's pits 0..6, South's
//! store at 6, North's pits 7..13 and North's store at 13. A move names one
//! of the mover's houses, `0..6`, counted from the mover's left.
//!
//! Positions are written as the 14 seed counts followed by the side to move:
//! `"3 3 3 3 3 3 0 3 3 3 3 3 3 0 s"`.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Not;
use std::str::FromStr;

use negamax_engine::Game;

use crate::error::PositionError;

/// Houses per side.
pub const HOUSES: usize = 6;

/// Most seeds a position may hold in total.
pub const MAX_SEEDS: u32 = u16::MAX as u32;

const SLOTS: usize = 2 * HOUSES + 2;

/// A Kalah player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    South,
    North,
}

impl Player {
    /// Return the opponent.
    #[inline]
    pub const fn flip(self) -> Player {
        match self {
            Player::South => Player::North,
            Player::North => Player::South,
        }
    }

    /// Slot index of this player's store.
    #[inline]
    pub const fn store(self) -> usize {
        match self {
            Player::South => HOUSES,
            Player::North => SLOTS - 1,
        }
    }

    /// Slot index of this player's `house`.
    #[inline]
    pub const fn pit(self, house: usize) -> usize {
        match self {
            Player::South => house,
            Player::North => HOUSES + 1 + house,
        }
    }

    fn owns_pit(self, slot: usize) -> bool {
        let first = self.pit(0);
        (first..first + HOUSES).contains(&slot)
    }
}

impl Not for Player {
    type Output = Player;

    #[inline]
    fn not(self) -> Player {
        self.flip()
    }
}

/// A Kalah position.
///
/// Moves applied through [`Kalah`] push an undo record so they can be
/// reversed exactly. Equality and hashing look at the seeds and the side to
/// move only, so the same position reached by different move orders compares
/// equal.
///
/// Seeds are never created or destroyed, so no slot can exceed the total the
/// board started with, which is at most [`MAX_SEEDS`].
#[derive(Debug, Clone)]
pub struct KalahBoard {
    slots: [u16; SLOTS],
    to_move: Player,
    history: Vec<([u16; SLOTS], Player)>,
}

impl PartialEq for KalahBoard {
    fn eq(&self, other: &KalahBoard) -> bool {
        self.slots == other.slots && self.to_move == other.to_move
    }
}

impl Eq for KalahBoard {}

impl Hash for KalahBoard {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slots.hash(state);
        self.to_move.hash(state);
    }
}

impl KalahBoard {
    /// The opening position with `seeds` in every house and South to move.
    pub fn new(seeds: u8) -> KalahBoard {
        let mut slots = [u16::from(seeds); SLOTS];
        slots[Player::South.store()] = 0;
        slots[Player::North.store()] = 0;
        KalahBoard {
            slots,
            to_move: Player::South,
            history: Vec::new(),
        }
    }

    /// Seeds in slot `index`.
    pub fn seeds(&self, index: usize) -> u16 {
        self.slots[index]
    }

    /// Seeds in `player`'s store.
    pub fn store(&self, player: Player) -> u16 {
        self.slots[player.store()]
    }

    /// Which side moves next.
    pub fn side_to_move(&self) -> Player {
        self.to_move
    }

    /// Seeds left in `player`'s houses.
    pub fn house_total(&self, player: Player) -> u32 {
        (0..HOUSES).map(|h| u32::from(self.slots[player.pit(h)])).sum()
    }

    /// `true` once either side's houses are empty.
    pub fn is_over(&self) -> bool {
        self.house_total(Player::South) == 0 || self.house_total(Player::North) == 0
    }

    /// Final seed count for `player`: store plus whatever remains in their
    /// houses.
    pub fn final_count(&self, player: Player) -> u32 {
        u32::from(self.store(player)) + self.house_total(player)
    }

    /// Sow `house` for the side to move.
    ///
    /// Returns `true` if the turn passes to the opponent, `false` if the last
    /// seed landed in the mover's store.
    fn sow(&mut self, house: usize) -> bool {
        let me = self.to_move;
        let skip = me.flip().store();

        let mut slot = me.pit(house);
        let mut seeds = std::mem::take(&mut self.slots[slot]);
        debug_assert!(seeds > 0, "sowing empty house {house}");
        while seeds > 0 {
            slot = (slot + 1) % SLOTS;
            if slot == skip {
                continue;
            }
            self.slots[slot] += 1;
            seeds -= 1;
        }

        if slot == me.store() {
            return false;
        }

        let opposite = 2 * HOUSES - slot;
        if me.owns_pit(slot) && self.slots[slot] == 1 && self.slots[opposite] > 0 {
            let captured = self.slots[slot] + self.slots[opposite];
            self.slots[slot] = 0;
            self.slots[opposite] = 0;
            self.slots[me.store()] += captured;
        }

        self.to_move = !me;
        true
    }
}

impl fmt::Display for KalahBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for seeds in &self.slots {
            write!(f, "{seeds} ")?;
        }
        match self.to_move {
            Player::South => write!(f, "s"),
            Player::North => write!(f, "n"),
        }
    }
}

impl FromStr for KalahBoard {
    type Err = PositionError;

    fn from_str(s: &str) -> Result<KalahBoard, PositionError> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        if fields.len() != SLOTS + 1 {
            return Err(PositionError::WrongFieldCount {
                expected: SLOTS + 1,
                found: fields.len(),
            });
        }

        let mut slots = [0u16; SLOTS];
        for (index, (slot, field)) in slots.iter_mut().zip(&fields).enumerate() {
            *slot = field.parse().map_err(|_| PositionError::InvalidSeedCount {
                index,
                found: field.to_string(),
            })?;
        }

        let total: u32 = slots.iter().map(|&s| u32::from(s)).sum();
        if total > MAX_SEEDS {
            return Err(PositionError::TooManySeeds {
                total,
                max: MAX_SEEDS,
            });
        }

        let to_move = match fields[SLOTS] {
            "s" | "S" => Player::South,
            "n" | "N" => Player::North,
            other => {
                return Err(PositionError::InvalidSide {
                    found: other.to_string(),
                });
            }
        };

        Ok(KalahBoard {
            slots,
            to_move,
            history: Vec::new(),
        })
    }
}

/// Kalah rules. Moves are house numbers of the side to move.
#[derive(Debug, Clone, Copy, Default)]
pub struct Kalah;

impl Game for Kalah {
    type State = KalahBoard;
    type Move = usize;

    fn generate_moves(&self, board: &KalahBoard) -> Vec<usize> {
        if board.is_over() {
            return Vec::new();
        }
        let me = board.to_move;
        (0..HOUSES).filter(|&h| board.slots[me.pit(h)] > 0).collect()
    }

    fn make_move(&self, board: &mut KalahBoard, house: &usize) -> bool {
        board.history.push((board.slots, board.to_move));
        board.sow(*house)
    }

    fn unmake_move(&self, board: &mut KalahBoard, _house: &usize) {
        if let Some((slots, to_move)) = board.history.pop() {
            board.slots = slots;
            board.to_move = to_move;
        }
    }

    fn evaluate(&self, board: &KalahBoard) -> f64 {
        let me = board.to_move;
        f64::from(board.store(me)) - f64::from(board.store(!me))
    }

    fn evaluate_terminal(&self, board: &KalahBoard) -> Option<f64> {
        if !board.is_over() {
            return None;
        }
        let me = board.to_move;
        Some(f64::from(board.final_count(me)) - f64::from(board.final_count(!me)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_position() {
        let board = KalahBoard::new(3);
        assert_eq!(board.to_string(), "3 3 3 3 3 3 0 3 3 3 3 3 3 0 s");
        assert_eq!(board.house_total(Player::South), 18);
        assert_eq!(Kalah.generate_moves(&board), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(Kalah.evaluate(&board), 0.0);
    }

    #[test]
    fn last_seed_in_store_grants_extra_turn() {
        let mut board = KalahBoard::new(3);
        assert!(!Kalah.make_move(&mut board, &3));
        assert_eq!(board.side_to_move(), Player::South);
        assert_eq!(board.store(Player::South), 1);
        assert_eq!(board.seeds(3), 0);
    }

    #[test]
    fn ordinary_move_passes_turn() {
        let mut board = KalahBoard::new(3);
        assert!(Kalah.make_move(&mut board, &0));
        assert_eq!(board.side_to_move(), Player::North);
        assert_eq!(board.to_string(), "0 4 4 4 3 3 0 3 3 3 3 3 3 0 n");
    }

    #[test]
    fn sowing_skips_opponent_store_and_captures() {
        let mut board: KalahBoard = "0 0 0 0 0 9 0 1 1 1 1 1 1 0 s".parse().unwrap();
        assert!(Kalah.make_move(&mut board, &5));
        // Last seed lands in the empty house 1, capturing the 2 seeds opposite.
        assert_eq!(board.to_string(), "1 0 0 0 0 0 4 2 2 2 2 0 2 0 n");
    }

    #[test]
    fn north_sows_into_own_store() {
        let mut board: KalahBoard = "1 1 1 1 1 1 0 0 0 0 0 0 1 0 n".parse().unwrap();
        assert!(!Kalah.make_move(&mut board, &5));
        assert_eq!(board.store(Player::North), 1);
        assert_eq!(board.side_to_move(), Player::North);
    }

    #[test]
    fn capture_ends_game() {
        let mut board: KalahBoard = "0 0 1 0 0 0 0 1 1 4 1 1 1 0 s".parse().unwrap();
        assert!(Kalah.make_move(&mut board, &2));
        assert_eq!(board.store(Player::South), 5);
        assert_eq!(board.seeds(9), 0);
        assert!(board.is_over());
        assert_eq!(Kalah.evaluate_terminal(&board), Some(0.0));
        assert!(Kalah.generate_moves(&board).is_empty());
    }

    #[test]
    fn terminal_counts_remaining_houses() {
        let board: KalahBoard = "0 0 0 0 0 0 10 1 2 0 0 0 0 5 n".parse().unwrap();
        assert_eq!(Kalah.evaluate_terminal(&board), Some(-2.0));
    }

    #[test]
    fn unmake_restores_exactly() {
        let mut board = KalahBoard::new(4);
        let before = board.clone();
        assert!(Kalah.make_move(&mut board, &0));
        assert!(Kalah.make_move(&mut board, &0));
        Kalah.unmake_move(&mut board, &0);
        Kalah.unmake_move(&mut board, &0);
        assert_eq!(board, before);
    }

    #[test]
    fn large_counts_sow_past_u8() {
        let mut board: KalahBoard = "0 0 0 0 0 1 255 1 1 1 1 1 1 0 s".parse().unwrap();
        assert!(!Kalah.make_move(&mut board, &5));
        assert_eq!(board.store(Player::South), 256);

        let mut board: KalahBoard = "1 0 0 0 0 0 0 0 0 0 0 300 0 0 s".parse().unwrap();
        assert!(Kalah.make_move(&mut board, &0));
        // Last seed lands in empty house 1 and captures the 300 opposite.
        assert_eq!(board.store(Player::South), 301);
        assert!(board.is_over());
    }

    #[test]
    fn total_seed_limit() {
        let full = format!("{MAX_SEEDS} 0 0 0 0 0 0 0 0 0 0 0 0 0 s");
        assert!(full.parse::<KalahBoard>().is_ok());

        let over = format!("{MAX_SEEDS} 1 0 0 0 0 0 0 0 0 0 0 0 0 s");
        assert_eq!(
            over.parse::<KalahBoard>(),
            Err(PositionError::TooManySeeds {
                total: MAX_SEEDS + 1,
                max: MAX_SEEDS
            })
        );
    }

    #[test]
    fn equality_ignores_move_history() {
        let mut played = KalahBoard::new(3);
        Kalah.make_move(&mut played, &0);
        let parsed: KalahBoard = "0 4 4 4 3 3 0 3 3 3 3 3 3 0 n".parse().unwrap();
        assert_eq!(played, parsed);

        let mut hasher = std::hash::DefaultHasher::new();
        played.hash(&mut hasher);
        let played_hash = hasher.finish();
        let mut hasher = std::hash::DefaultHasher::new();
        parsed.hash(&mut hasher);
        assert_eq!(played_hash, hasher.finish());
    }

    #[test]
    fn parse_errors() {
        assert!(matches!(
            "3 3 3 s".parse::<KalahBoard>(),
            Err(PositionError::WrongFieldCount { expected: 15, found: 4 })
        ));
        assert_eq!(
            "3 3 3 3 3 3 0 3 3 x 3 3 3 0 s".parse::<KalahBoard>(),
            Err(PositionError::InvalidSeedCount {
                index: 9,
                found: "x".to_string()
            })
        );
        assert!(matches!(
            "3 3 3 3 3 3 0 3 3 3 3 3 3 0 e".parse::<KalahBoard>(),
            Err(PositionError::InvalidSide { .. })
        ));
    }
}
