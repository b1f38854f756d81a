//! Reachable-position enumeration
//!
//! Breadth-first exploration of the X-first game tree, used by the coverage
//! analysis to measure how much of the opponent's decision space the learned
//! book actually covers.

use std::collections::{HashSet, VecDeque};

use super::{BoardState, Player};

/// Enumerate every board state reachable from the standard opening.
///
/// States are keyed by their string encoding, so each distinct position is
/// returned exactly once. Terminal states are included.
pub fn reachable_states() -> Vec<BoardState> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut queue: VecDeque<BoardState> = VecDeque::new();
    let mut states = Vec::new();

    let root = BoardState::new();
    seen.insert(root.encode());
    queue.push_back(root);

    while let Some(state) = queue.pop_front() {
        states.push(state);

        for pos in state.legal_moves() {
            let next = state
                .make_move(pos)
                .expect("legal moves are playable during exploration");
            if seen.insert(next.encode()) {
                queue.push_back(next);
            }
        }
    }

    states
}

/// Enumerate the positions where the apprentice (playing O) must choose a move.
///
/// These are the non-terminal O-to-move states; they are exactly the keys the
/// book can ever be asked about during play.
pub fn opponent_decision_states() -> Vec<BoardState> {
    reachable_states()
        .into_iter()
        .filter(|state| state.to_move == Player::O && !state.is_terminal())
        .collect()
}
