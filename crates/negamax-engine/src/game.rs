//! The capability contract a game supplies to the searcher.

/// A two-player game the searcher can walk.
///
/// The searcher owns no game knowledge: it generates moves, applies them in
/// place, recurses, and reverses them through this trait. Every method except
/// [`unmake_move`](Game::unmake_move) has a default that describes a game with
/// no moves, a neutral evaluation and no terminal positions.
pub trait Game {
    /// The mutable position the search walks.
    type State;
    /// A move produced by [`generate_moves`](Game::generate_moves).
    type Move;

    /// All moves for the side to move, in the order they should be tried.
    fn generate_moves(&self, _state: &Self::State) -> Vec<Self::Move> {
        Vec::new()
    }

    /// Apply `mv` to `state` in place.
    ///
    /// Returns `true` if the side to move changed, `false` if the same side
    /// moves again (an extra-turn rule).
    fn make_move(&self, _state: &mut Self::State, _mv: &Self::Move) -> bool {
        true
    }

    /// Reverse a move previously applied with [`make_move`](Game::make_move),
    /// restoring `state` exactly.
    fn unmake_move(&self, state: &mut Self::State, mv: &Self::Move);

    /// Static score of `state` from the perspective of the side to move.
    fn evaluate(&self, _state: &Self::State) -> f64 {
        0.0
    }

    /// Score of a finished game from the perspective of the side to move, or
    /// `None` while the game is still in progress.
    fn evaluate_terminal(&self, _state: &Self::State) -> Option<f64> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::Game;

    /// Counts down to zero; only `unmake_move` is implemented.
    struct Countdown;

    impl Game for Countdown {
        type State = u32;
        type Move = ();

        fn unmake_move(&self, state: &mut u32, _mv: &()) {
            *state += 1;
        }
    }

    #[test]
    fn defaults_describe_an_empty_game() {
        let game = Countdown;
        let mut state = 3;
        assert!(game.generate_moves(&state).is_empty());
        assert!(game.make_move(&mut state, &()));
        assert_eq!(game.evaluate(&state), 0.0);
        assert_eq!(game.evaluate_terminal(&state), None);
        assert_eq!(state, 3, "default make_move must not touch the state");
    }
}
