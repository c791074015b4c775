//! Costar CLI - shared pieces of the `degrees` and `tictactoe` binaries

pub mod config;
pub mod logging;
pub mod output;
pub mod prompt;
