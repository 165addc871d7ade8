use crate::error::EngineError;
use crate::evaluation::Evaluator;
use checkers_core::{Color, GameState, Move, Outcome};
use rand::Rng;
use tracing::debug;

/// Score of a position where one side has no legal move left.
pub const WIN_SCORE: f32 = 10_000.0;

/// Root moves scoring within this distance of the best are treated as equal.
pub const NEAR_EQUAL_MARGIN: f32 = 0.1;

/// Largest random offset added to a near-equal root move.
pub const JITTER: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct SearchResult {
    pub best_move: Move,
    /// `None` when the move was forced and nothing was searched.
    pub score: Option<f32>,
    pub depth: u8,
    pub nodes: u64,
}

struct SearchInfo<'a, E: ?Sized> {
    evaluator: &'a E,
    nodes: u64,
}

/// Alpha-beta search of `state` to `depth` plies. White maximizes.
///
/// A position with a single legal move returns it without searching.
/// Near-equal root moves are separated by a random jitter drawn from `rng`.
pub fn search<E, R>(
    state: &GameState,
    depth: u8,
    evaluator: &E,
    rng: &mut R,
) -> Result<SearchResult, EngineError>
where
    E: Evaluator + ?Sized,
    R: Rng,
{
    let color = state.current_color();
    let mut moves = state.iter_legal_moves();
    let first = moves.next().ok_or(EngineError::NoLegalMoves(color))?;
    if moves.next().is_none() {
        debug!(%color, mv = %first, "forced move");
        return Ok(SearchResult {
            best_move: first.clone(),
            score: None,
            depth,
            nodes: 0,
        });
    }

    let mut info = SearchInfo { evaluator, nodes: 0 };
    let (best_move, score) = alpha_beta_root(state, depth.max(1), &mut info, rng);
    debug!(
        %color,
        depth,
        nodes = info.nodes,
        score,
        best = %best_move,
        "search finished"
    );

    Ok(SearchResult {
        best_move,
        score: Some(score),
        depth,
        nodes: info.nodes,
    })
}

fn alpha_beta_root<E, R>(
    state: &GameState,
    depth: u8,
    info: &mut SearchInfo<'_, E>,
    rng: &mut R,
) -> (Move, f32)
where
    E: Evaluator + ?Sized,
    R: Rng,
{
    let maximizing = state.current_color() == Color::White;
    let mut best: Option<(&Move, f32)> = None;

    for mv in state.iter_legal_moves() {
        // Keep the window open by the margin so near-equal scores come back exact.
        let (alpha, beta) = match best {
            None => (f32::NEG_INFINITY, f32::INFINITY),
            Some((_, best_score)) if maximizing => (best_score - NEAR_EQUAL_MARGIN, f32::INFINITY),
            Some((_, best_score)) => (f32::NEG_INFINITY, best_score + NEAR_EQUAL_MARGIN),
        };
        let score = alpha_beta(&state.with_move(mv), depth - 1, alpha, beta, !maximizing, info);

        let Some((_, best_score)) = best else {
            best = Some((mv, score));
            continue;
        };
        let mut compared = score;
        if (score - best_score).abs() < NEAR_EQUAL_MARGIN {
            compared += rng.gen_range(-JITTER..=JITTER);
        }
        let better = if maximizing {
            compared > best_score
        } else {
            compared < best_score
        };
        if better {
            best = Some((mv, score));
        }
    }

    match best {
        Some((mv, score)) => (mv.clone(), score),
        None => unreachable!("root search called without legal moves"),
    }
}

fn alpha_beta<E: Evaluator + ?Sized>(
    state: &GameState,
    depth: u8,
    mut alpha: f32,
    mut beta: f32,
    maximizing: bool,
    info: &mut SearchInfo<'_, E>,
) -> f32 {
    info.nodes += 1;

    if let Outcome::Win(winner) = state.result() {
        return match winner {
            Color::White => WIN_SCORE,
            Color::Black => -WIN_SCORE,
        };
    }
    if depth == 0 {
        return info.evaluator.evaluate(state.board());
    }

    if maximizing {
        let mut best = f32::NEG_INFINITY;
        for mv in state.iter_legal_moves() {
            let score = alpha_beta(&state.with_move(mv), depth - 1, alpha, beta, false, info);
            best = best.max(score);
            alpha = alpha.max(best);
            if beta <= alpha {
                break;
            }
        }
        best
    } else {
        let mut best = f32::INFINITY;
        for mv in state.iter_legal_moves() {
            let score = alpha_beta(&state.with_move(mv), depth - 1, alpha, beta, true, info);
            best = best.min(score);
            beta = beta.min(best);
            if beta <= alpha {
                break;
            }
        }
        best
    }
}
