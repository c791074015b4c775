//! Costar Game - Tic-tac-toe engine and minimax player

pub mod board;
pub mod error;
pub mod minimax;

pub use board::{Action, Board, Player, SIZE};
pub use error::{GameError, Result};
pub use minimax::{minimax, value};
