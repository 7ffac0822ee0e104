//! The searcher and its result types.

mod guard;
mod negamax;

use tracing::debug;

use crate::config::{ClosureGame, GameConfig};
use crate::error::ConfigError;
use crate::game::Game;
use crate::side::Side;

use negamax::{SearchContext, negamax};

/// How the root score of a search was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreOrigin {
    /// The root position was already finished.
    Terminal,
    /// The search was started at depth 0 and the root was evaluated statically.
    Static,
    /// Moves were generated and searched.
    Searched,
}

/// Result of a root search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult<M> {
    /// Best score for the side to move at the root.
    pub score: f64,
    /// The first move whose score raised alpha, if any.
    pub best_move: Option<M>,
    /// Nodes visited, the root included.
    pub nodes: u64,
    /// Where the root score came from.
    pub origin: ScoreOrigin,
}

impl<M> SearchResult<M> {
    /// `true` if the root returned a bare score without trying any move.
    pub fn is_bare(&self) -> bool {
        self.origin != ScoreOrigin::Searched
    }
}

/// Negamax alpha-beta searcher over any [`Game`].
#[derive(Debug)]
pub struct Searcher<G: Game> {
    game: G,
    nodes: u64,
}

impl<G: Game> Searcher<G> {
    /// Create a searcher over `game`.
    pub fn new(game: G) -> Self {
        Self { game, nodes: 0 }
    }

    /// The game collaborator.
    pub fn game(&self) -> &G {
        &self.game
    }

    /// Nodes visited by the most recent search, counted since its root call.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Search `state` to `depth` plies with a full window.
    ///
    /// `state` is left exactly as it was passed in.
    pub fn search(&mut self, state: &mut G::State, depth: u32) -> SearchResult<G::Move> {
        self.search_window(
            state,
            depth,
            f64::NEG_INFINITY,
            f64::INFINITY,
            Side::Positive,
        )
    }

    /// Root search with explicit initial bounds and side.
    ///
    /// The best move is only recorded when a score strictly exceeds `alpha`,
    /// so a window that no move can beat yields `best_move == None`.
    pub fn search_window(
        &mut self,
        state: &mut G::State,
        depth: u32,
        alpha: f64,
        beta: f64,
        side: Side,
    ) -> SearchResult<G::Move> {
        let mut ctx = SearchContext {
            game: &self.game,
            nodes: &mut self.nodes,
        };
        let node = negamax(&mut ctx, state, depth, alpha, beta, side, true);

        let result = SearchResult {
            score: node.score,
            best_move: node.best_move,
            nodes: self.nodes,
            origin: node.origin,
        };
        debug!(
            depth,
            side = side.sign(),
            nodes = result.nodes,
            score = result.score,
            origin = ?result.origin,
            found_move = result.best_move.is_some(),
            "search complete"
        );
        result
    }

    /// A non-root search call: adds to the node counter instead of resetting
    /// it and returns the bare score.
    pub fn search_inner(
        &mut self,
        state: &mut G::State,
        depth: u32,
        alpha: f64,
        beta: f64,
        side: Side,
    ) -> f64 {
        let mut ctx = SearchContext {
            game: &self.game,
            nodes: &mut self.nodes,
        };
        negamax(&mut ctx, state, depth, alpha, beta, side, false).score
    }
}

impl<S: 'static, M: 'static> Searcher<ClosureGame<S, M>> {
    /// Validate `config` and create a searcher over it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUnmakeMove`] if the configuration
    /// generates moves it cannot reverse.
    pub fn from_config(config: GameConfig<S, M>) -> Result<Self, ConfigError> {
        Ok(Self::new(config.build()?))
    }
}

impl<G: Game + Default> Default for Searcher<G> {
    fn default() -> Self {
        Self::new(G::default())
    }
}
