use std::fmt::{Debug, Display};

use anyhow::{Context, Result, bail};
use tracing::info;

use negamax_engine::{Game, Searcher};
use negamax_games::{Board, Kalah, KalahBoard, TicTacToe};

const USAGE: &str = "usage: negamax [tictactoe|kalah] [depth] [seeds]";

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let game = args.first().map_or("tictactoe", String::as_str);
    let depth: u32 = match args.get(1) {
        Some(arg) => arg.parse().with_context(|| format!("invalid depth: {arg}"))?,
        None => 9,
    };
    if depth == 0 {
        bail!("depth must be at least 1\n{USAGE}");
    }

    info!(game, depth, "negamax starting");
    match game {
        "tictactoe" => self_play(TicTacToe, Board::new(), depth),
        "kalah" => {
            let seeds: u8 = match args.get(2) {
                Some(arg) => arg.parse().with_context(|| format!("invalid seed count: {arg}"))?,
                None => 4,
            };
            self_play(Kalah, KalahBoard::new(seeds), depth)
        }
        other => bail!("unknown game: {other}\n{USAGE}"),
    }
}

/// Play `game` against itself from `state`, one root search per move.
fn self_play<G>(game: G, mut state: G::State, depth: u32) -> Result<()>
where
    G: Game,
    G::State: Display,
    G::Move: Debug,
{
    let mut searcher = Searcher::new(game);
    let mut ply = 0u32;

    loop {
        let result = searcher.search(&mut state, depth);
        let Some(mv) = result.best_move else {
            info!(ply, score = result.score, origin = ?result.origin, "game over");
            break;
        };
        info!(ply, mv = ?mv, score = result.score, nodes = result.nodes, "move");
        let side_changed = searcher.game().make_move(&mut state, &mv);
        if !side_changed {
            info!(ply, "extra turn");
        }
        println!("{state}");
        ply += 1;
    }

    println!("final: {state}");
    Ok(())
}
