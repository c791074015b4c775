//! Exhaustive minimax search

use crate::board::{Action, Board, Player};

/// Optimal move for the player to move, `None` once the game is over
///
/// X maximizes utility and O minimizes it. A scan over moves stops as soon
/// as the mover's best possible value is reached.
pub fn minimax(board: &Board) -> Option<Action> {
    if board.is_terminal() {
        return None;
    }

    let (value, action) = match board.player() {
        Player::X => max_value(board),
        Player::O => min_value(board),
    };
    tracing::trace!("minimax chose {:?} with value {}", action, value);
    action
}

/// Game-theoretic value of a board under optimal play
pub fn value(board: &Board) -> i8 {
    match board.player() {
        Player::X => max_value(board).0,
        Player::O => min_value(board).0,
    }
}

fn max_value(board: &Board) -> (i8, Option<Action>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best = (i8::MIN, None);
    for action in board.actions() {
        // Moves come from `actions`, so `result` cannot reject them
        let Ok(next) = board.result(action) else {
            continue;
        };
        let (v, _) = min_value(&next);
        if v > best.0 {
            best = (v, Some(action));
        }
        if best.0 == 1 {
            break;
        }
    }
    best
}

fn min_value(board: &Board) -> (i8, Option<Action>) {
    if board.is_terminal() {
        return (board.utility(), None);
    }

    let mut best = (i8::MAX, None);
    for action in board.actions() {
        let Ok(next) = board.result(action) else {
            continue;
        };
        let (v, _) = max_value(&next);
        if v < best.0 {
            best = (v, Some(action));
        }
        if best.0 == -1 {
            break;
        }
    }
    best
}
