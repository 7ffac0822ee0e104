//! Scoped move application.

use crate::game::Game;

/// A move applied to a state, reversed when the guard drops.
///
/// The guard holds the only mutable borrow of the state, so the recursive
/// step cannot leave a move applied: the reversal runs on every scope exit,
/// unwinding included.
pub(super) struct AppliedMove<'a, G: Game> {
    game: &'a G,
    state: &'a mut G::State,
    mv: &'a G::Move,
    side_changed: bool,
}

impl<'a, G: Game> AppliedMove<'a, G> {
    /// Apply `mv` to `state` and take custody of its reversal.
    pub(super) fn apply(game: &'a G, state: &'a mut G::State, mv: &'a G::Move) -> Self {
        let side_changed = game.make_move(state, mv);
        Self {
            game,
            state,
            mv,
            side_changed,
        }
    }

    /// Whether the move passed the turn to the other side.
    #[inline]
    pub(super) fn side_changed(&self) -> bool {
        self.side_changed
    }

    /// The state with the move applied.
    #[inline]
    pub(super) fn state(&mut self) -> &mut G::State {
        self.state
    }
}

impl<G: Game> Drop for AppliedMove<'_, G> {
    fn drop(&mut self) {
        self.game.unmake_move(self.state, self.mv);
    }
}
