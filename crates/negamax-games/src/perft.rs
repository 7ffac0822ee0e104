//! Perft (performance test) for move generation correctness verification.

use negamax_engine::Game;

/// Count the leaf nodes reachable from `state` in exactly `depth` moves.
///
/// Depth 0 returns 1 (the current position). Positions with no moves before
/// the horizon contribute nothing. Moves are applied and reversed in place,
/// so `state` is unchanged on return.
pub fn perft<G: Game>(game: &G, state: &mut G::State, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = game.generate_moves(state);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for mv in &moves {
        game.make_move(state, mv);
        nodes += perft(game, state, depth - 1);
        game.unmake_move(state, mv);
    }
    nodes
}

/// Run perft with a per-move breakdown (useful for debugging).
///
/// Returns `(move, node_count)` pairs in generation order.
pub fn divide<G: Game>(game: &G, state: &mut G::State, depth: u32) -> Vec<(G::Move, u64)> {
    let moves = game.generate_moves(state);
    let mut results = Vec::with_capacity(moves.len());
    for mv in moves {
        game.make_move(state, &mv);
        let count = if depth <= 1 { 1 } else { perft(game, state, depth - 1) };
        game.unmake_move(state, &mv);
        results.push((mv, count));
    }
    results
}
