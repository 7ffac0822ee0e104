//! Closure-based game configuration with construction-time defaults.
//!
//! [`GameConfig`] lets a host plug a game into the searcher without writing a
//! [`Game`] impl. Each capability is set independently; anything left unset
//! falls back to the trait's default behaviour when [`GameConfig::build`]
//! produces a [`ClosureGame`].

use std::fmt;

use crate::error::ConfigError;
use crate::game::Game;

type GenerateFn<S, M> = Box<dyn Fn(&S) -> Vec<M>>;
type MakeFn<S, M> = Box<dyn Fn(&mut S, &M) -> bool>;
type UnmakeFn<S, M> = Box<dyn Fn(&mut S, &M)>;
type EvaluateFn<S> = Box<dyn Fn(&S) -> f64>;
type TerminalFn<S> = Box<dyn Fn(&S) -> Option<f64>>;

/// Builder for a [`ClosureGame`].
pub struct GameConfig<S, M> {
    generate_moves: Option<GenerateFn<S, M>>,
    make_move: Option<MakeFn<S, M>>,
    unmake_move: Option<UnmakeFn<S, M>>,
    evaluate: Option<EvaluateFn<S>>,
    evaluate_terminal: Option<TerminalFn<S>>,
}

impl<S: 'static, M: 'static> GameConfig<S, M> {
    /// An empty configuration: no moves, zero evaluation, never terminal.
    pub fn new() -> Self {
        Self {
            generate_moves: None,
            make_move: None,
            unmake_move: None,
            evaluate: None,
            evaluate_terminal: None,
        }
    }

    /// Set the move generator.
    pub fn generate_moves(mut self, f: impl Fn(&S) -> Vec<M> + 'static) -> Self {
        self.generate_moves = Some(Box::new(f));
        self
    }

    /// Set move application. The closure returns `true` if the side to move
    /// changed.
    pub fn make_move(mut self, f: impl Fn(&mut S, &M) -> bool + 'static) -> Self {
        self.make_move = Some(Box::new(f));
        self
    }

    /// Set move reversal.
    pub fn unmake_move(mut self, f: impl Fn(&mut S, &M) + 'static) -> Self {
        self.unmake_move = Some(Box::new(f));
        self
    }

    /// Set the static evaluation.
    pub fn evaluate(mut self, f: impl Fn(&S) -> f64 + 'static) -> Self {
        self.evaluate = Some(Box::new(f));
        self
    }

    /// Set the terminal evaluation.
    pub fn evaluate_terminal(mut self, f: impl Fn(&S) -> Option<f64> + 'static) -> Self {
        self.evaluate_terminal = Some(Box::new(f));
        self
    }

    /// Fill in defaults and validate.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingUnmakeMove`] if a move generator was
    /// supplied without a matching `unmake_move`.
    pub fn build(self) -> Result<ClosureGame<S, M>, ConfigError> {
        let unmake_move: UnmakeFn<S, M> = match (self.unmake_move, self.generate_moves.is_some()) {
            (Some(f), _) => f,
            (None, true) => return Err(ConfigError::MissingUnmakeMove),
            // Never called: without a generator there are no moves to reverse.
            (None, false) => Box::new(|_: &mut S, _: &M| {}),
        };

        Ok(ClosureGame {
            generate_moves: self
                .generate_moves
                .unwrap_or_else(|| Box::new(|_: &S| Vec::new())),
            make_move: self
                .make_move
                .unwrap_or_else(|| Box::new(|_: &mut S, _: &M| true)),
            unmake_move,
            evaluate: self.evaluate.unwrap_or_else(|| Box::new(|_: &S| 0.0)),
            evaluate_terminal: self
                .evaluate_terminal
                .unwrap_or_else(|| Box::new(|_: &S| None)),
        })
    }
}

impl<S: 'static, M: 'static> Default for GameConfig<S, M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S, M> fmt::Debug for GameConfig<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameConfig")
            .field("generate_moves", &self.generate_moves.is_some())
            .field("make_move", &self.make_move.is_some())
            .field("unmake_move", &self.unmake_move.is_some())
            .field("evaluate", &self.evaluate.is_some())
            .field("evaluate_terminal", &self.evaluate_terminal.is_some())
            .finish()
    }
}

/// A [`Game`] whose capabilities are boxed closures.
pub struct ClosureGame<S, M> {
    generate_moves: GenerateFn<S, M>,
    make_move: MakeFn<S, M>,
    unmake_move: UnmakeFn<S, M>,
    evaluate: EvaluateFn<S>,
    evaluate_terminal: TerminalFn<S>,
}

impl<S, M> Game for ClosureGame<S, M> {
    type State = S;
    type Move = M;

    fn generate_moves(&self, state: &S) -> Vec<M> {
        (self.generate_moves)(state)
    }

    fn make_move(&self, state: &mut S, mv: &M) -> bool {
        (self.make_move)(state, mv)
    }

    fn unmake_move(&self, state: &mut S, mv: &M) {
        (self.unmake_move)(state, mv)
    }

    fn evaluate(&self, state: &S) -> f64 {
        (self.evaluate)(state)
    }

    fn evaluate_terminal(&self, state: &S) -> Option<f64> {
        (self.evaluate_terminal)(state)
    }
}

impl<S, M> fmt::Debug for ClosureGame<S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClosureGame").finish_non_exhaustive()
    }
}
