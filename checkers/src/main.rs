mod display;
mod play;
mod worker;

use anyhow::{Context, Result};
use checkers_agents::{Agent, Difficulty, Engine, MinimaxAgent};
use checkers_core::{perft_detailed, perft_divide, Color, GameState, Outcome, Variant};
use clap::{Parser, Subcommand, ValueEnum};
use display::{render_board, status_line};
use std::io;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "checkers", version, about = "Draughts rules engine and computer opponent")]
struct Cli {
    /// Log filter used when RUST_LOG is not set
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Play against the engine
    Play {
        #[arg(long, default_value_t = Variant::Russian)]
        variant: Variant,
        #[arg(long, default_value_t = Difficulty::Easy)]
        difficulty: Difficulty,
        /// Side played by the human
        #[arg(long, value_enum, default_value_t = Side::White)]
        color: Side,
    },
    /// Let two engines play each other
    Selfplay {
        #[arg(long, default_value_t = Variant::Russian)]
        variant: Variant,
        #[arg(long, default_value_t = Difficulty::Easy)]
        white: Difficulty,
        #[arg(long, default_value_t = Difficulty::Novice)]
        black: Difficulty,
        #[arg(long, default_value_t = 200)]
        max_plies: u32,
    },
    /// Count the leaves of the legal move tree
    Perft {
        depth: u8,
        #[arg(long, default_value_t = Variant::Russian)]
        variant: Variant,
    },
    /// Search the starting position
    Search {
        #[arg(long, default_value_t = Variant::Russian)]
        variant: Variant,
        #[arg(long, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Side {
    White,
    Black,
}

impl From<Side> for Color {
    fn from(side: Side) -> Self {
        match side {
            Side::White => Color::White,
            Side::Black => Color::Black,
        }
    }
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run_perft(variant: Variant, depth: u8) {
    let state = GameState::new(variant);
    println!("Running perft({depth}) on {variant}...");

    let start = Instant::now();
    let mut total = 0;
    for (mv, count) in perft_divide(&state, depth) {
        println!("{mv}: {count}");
        total += count;
    }
    let elapsed = start.elapsed();

    println!("\nTotal: {total}");
    println!("Time: {:.2}s", elapsed.as_secs_f64());
    if elapsed.as_secs_f64() > 0.0 {
        println!("NPS: {:.0}", total as f64 / elapsed.as_secs_f64());
    }
    if depth <= 4 {
        let detail = perft_detailed(&state, depth);
        println!(
            "Captures: {}  Pieces taken: {}  Promotions: {}  Wins: {}",
            detail.captures, detail.pieces_taken, detail.promotions, detail.wins
        );
    }
}

fn run_search(variant: Variant, difficulty: Difficulty) -> Result<()> {
    let state = GameState::new(variant);
    let mut agent = MinimaxAgent::from_difficulty(difficulty)?;

    let start = Instant::now();
    let result = agent.search(&state)?;
    let elapsed = start.elapsed();

    println!("{}", render_board(state.board()));
    println!("Best move: {}", result.best_move);
    match result.score {
        Some(score) => println!("Score: {score:+.2} (+ = White, - = Black)"),
        None => println!("Score: forced move"),
    }
    println!("Depth: {}", result.depth);
    println!("Nodes: {}", result.nodes);
    println!("Time: {}ms", elapsed.as_millis());
    Ok(())
}

fn run_selfplay(
    variant: Variant,
    white: Difficulty,
    black: Difficulty,
    max_plies: u32,
) -> Result<()> {
    let mut white_engine = Engine::new(white);
    let mut black_engine = Engine::new(black);
    let mut state = GameState::new(variant);
    println!(
        "{variant}: {} (White) vs {} (Black)",
        white_engine.name(),
        black_engine.name()
    );

    for ply in 0..max_plies {
        if state.result().is_over() {
            break;
        }
        let color = state.current_color();
        let engine = match color {
            Color::White => &mut white_engine,
            Color::Black => &mut black_engine,
        };
        let mv = engine
            .best_move(&state)
            .with_context(|| format!("{color} engine failed at ply {ply}"))?;
        println!("{:>4}. {color}: {mv}", ply + 1);
        state.apply_move(&mv);
    }

    println!("\n{}", render_board(state.board()));
    match state.result() {
        Outcome::Win(winner) => {
            info!(%variant, %winner, "selfplay finished");
            println!("{}", status_line(&state));
        }
        Outcome::Ongoing => {
            info!(%variant, max_plies, "selfplay reached the ply limit");
            println!("No result after {max_plies} plies");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    match cli.command {
        Command::Play {
            variant,
            difficulty,
            color,
        } => {
            let mut session = play::Session::with_difficulty(variant, color.into(), difficulty);
            let stdin = io::stdin();
            play::run(&mut session, stdin.lock(), &mut io::stdout())
        }
        Command::Selfplay {
            variant,
            white,
            black,
            max_plies,
        } => run_selfplay(variant, white, black, max_plies),
        Command::Perft { depth, variant } => {
            run_perft(variant, depth);
            Ok(())
        }
        Command::Search {
            variant,
            difficulty,
        } => run_search(variant, difficulty),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_play() {
        let cli = Cli::try_parse_from([
            "checkers",
            "play",
            "--variant",
            "international",
            "--difficulty",
            "hard",
            "--color",
            "black",
        ])
        .unwrap();
        match cli.command {
            Command::Play {
                variant,
                difficulty,
                color,
            } => {
                assert_eq!(variant, Variant::International);
                assert_eq!(difficulty, Difficulty::Hard);
                assert_eq!(Color::from(color), Color::Black);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_rejects_unknown_variant() {
        assert!(Cli::try_parse_from(["checkers", "perft", "3", "--variant", "english"]).is_err());
    }

    #[test]
    fn test_search_rejects_novice() {
        assert!(run_search(Variant::Russian, Difficulty::Novice).is_err());
    }
}
