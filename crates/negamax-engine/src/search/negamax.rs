//! Negamax alpha-beta search.

use tracing::trace;

use crate::game::Game;
use crate::search::ScoreOrigin;
use crate::search::guard::AppliedMove;
use crate::side::Side;

/// Score of a node and, when moves were tried, the move that raised alpha.
pub(super) struct Node<M> {
    pub score: f64,
    pub best_move: Option<M>,
    pub origin: ScoreOrigin,
}

impl<M> Node<M> {
    fn bare(score: f64, origin: ScoreOrigin) -> Self {
        Self {
            score,
            best_move: None,
            origin,
        }
    }
}

/// Search state threaded through negamax calls.
pub(super) struct SearchContext<'a, G: Game> {
    /// The game collaborator.
    pub game: &'a G,
    /// Node counter owned by the searcher.
    pub nodes: &'a mut u64,
}

/// Negamax alpha-beta search.
///
/// Returns the best score for the side to move in `state`. `root` resets the
/// node counter; every other call adds one node. `side` is carried for
/// callers but never changes the returned score: sign flips follow the
/// side-change signal of each applied move.
///
/// A move that passes the turn hands the child `(-beta, -alpha)`, not the
/// parent bounds multiplied by `-1`: the multiplied pair is inverted
/// (`alpha > beta`) and would cut the child off after its first move. A move
/// that keeps the turn hands down `(alpha, beta)` unchanged.
pub(super) fn negamax<G: Game>(
    ctx: &mut SearchContext<'_, G>,
    state: &mut G::State,
    depth: u32,
    mut alpha: f64,
    beta: f64,
    side: Side,
    root: bool,
) -> Node<G::Move> {
    if root {
        *ctx.nodes = 1;
    } else {
        *ctx.nodes += 1;
    }

    let game = ctx.game;

    if let Some(score) = game.evaluate_terminal(state) {
        return Node::bare(score, ScoreOrigin::Terminal);
    }

    if depth == 0 {
        return Node::bare(game.evaluate(state), ScoreOrigin::Static);
    }

    let mut best_score = f64::NEG_INFINITY;
    let mut best_move = None;

    for mv in game.generate_moves(state) {
        let score = {
            let mut applied = AppliedMove::apply(game, state, &mv);
            let changed = applied.side_changed();

            // Across a turn change the child sees the window negated and
            // swapped; an extra turn keeps the window as is.
            let (flip, child_alpha, child_beta) = if changed {
                (-1.0, -beta, -alpha)
            } else {
                (1.0, alpha, beta)
            };

            let child = negamax(
                ctx,
                applied.state(),
                depth - 1,
                child_alpha,
                child_beta,
                side.across(changed),
                false,
            );
            flip * child.score
        };

        if score > best_score {
            best_score = score;
        }

        if best_score > alpha {
            alpha = best_score;
            best_move = Some(mv);
        }

        if alpha >= beta {
            trace!(depth, side = side.sign(), alpha, beta, "cutoff");
            break;
        }
    }

    Node {
        score: best_score,
        best_move,
        origin: ScoreOrigin::Searched,
    }
}
