use crate::game_state::GameState;
use crate::types::Move;

/// Perft (performance test) results at a given depth.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PerftResults {
    pub nodes: u64,
    pub captures: u64,
    pub pieces_taken: u64,
    pub promotions: u64,
    pub wins: u64,
}

impl PerftResults {
    /// Combines results from child nodes.
    pub fn add(&mut self, other: &Self) {
        self.nodes += other.nodes;
        self.captures += other.captures;
        self.pieces_taken += other.pieces_taken;
        self.promotions += other.promotions;
        self.wins += other.wins;
    }
}

/// Counts the leaf nodes of the legal move tree to the given depth.
pub fn perft(state: &GameState, depth: u8) -> u64 {
    if depth == 0 {
        return 1;
    }

    if depth == 1 {
        return state.legal_move_count() as u64;
    }

    state
        .iter_legal_moves()
        .map(|mv| perft(&state.with_move(mv), depth - 1))
        .sum()
}

/// Performs perft with a per-move breakdown of the root.
pub fn perft_divide(state: &GameState, depth: u8) -> Vec<(Move, u64)> {
    state
        .iter_legal_moves()
        .map(|mv| {
            let nodes = if depth <= 1 {
                1
            } else {
                perft(&state.with_move(mv), depth - 1)
            };
            (mv.clone(), nodes)
        })
        .collect()
}

/// Performs perft with move statistics at the leaves.
pub fn perft_detailed(state: &GameState, depth: u8) -> PerftResults {
    let mut results = PerftResults::default();

    if depth == 0 {
        results.nodes = 1;
        return results;
    }

    for mv in state.iter_legal_moves() {
        let next = state.with_move(mv);

        if depth == 1 {
            results.nodes += 1;

            if mv.is_capture() {
                results.captures += 1;
                results.pieces_taken += mv.len() as u64;
            }

            let before = state.board().piece_at(mv.from());
            let after = next.board().piece_at(mv.to());
            if before.is_regular() && after.is_queen() {
                results.promotions += 1;
            }

            if next.result().is_over() {
                results.wins += 1;
            }
        } else {
            results.add(&perft_detailed(&next, depth - 1));
        }
    }

    results
}
