//! tictactoe - Play against the minimax AI in the terminal

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use costar_cli::logging;
use costar_cli::prompt::Console;
use costar_game::{minimax, Action, Board, Player};

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    X,
    O,
}

impl From<Side> for Player {
    fn from(side: Side) -> Self {
        match side {
            Side::X => Player::X,
            Side::O => Player::O,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(author, version, about = "Tic-tac-toe against an unbeatable opponent")]
struct Cli {
    /// Side to play; X moves first
    #[arg(long, value_enum, default_value = "x")]
    play: Side,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress output except errors
    #[arg(short, long)]
    quiet: bool,
}

/// Ask until the human names an empty cell; `None` at end of input
fn read_move<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    board: &Board,
) -> anyhow::Result<Option<Action>> {
    let prompt = format!("Your move as {} (row col): ", board.player());
    loop {
        let Some(line) = console.ask(&prompt)? else {
            return Ok(None);
        };

        match line.parse::<Action>() {
            Ok(action) if board.actions().contains(&action) => return Ok(Some(action)),
            Ok(action) => console.say(&format!("Cell {} is not available.", action))?,
            Err(e) => console.say(&e.to_string())?,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose, cli.quiet);

    let human = Player::from(cli.play);
    let mut console = Console::new(io::stdin().lock(), io::stdout());
    let mut board = Board::initial();

    tracing::debug!("Human plays {}", human);

    while !board.is_terminal() {
        console.say(&board.to_string())?;

        let action = if board.player() == human {
            match read_move(&mut console, &board)? {
                Some(action) => action,
                None => {
                    console.say("Goodbye.")?;
                    return Ok(());
                }
            }
        } else {
            let action = minimax(&board).context("No move available on an unfinished board")?;
            console.say(&format!("AI plays {}", action))?;
            action
        };

        board = board.result(action)?;
    }

    console.say(&board.to_string())?;
    match board.winner() {
        Some(player) => console.say(&format!("Game Over: {} wins.", player))?,
        None => console.say("Game Over: Tie.")?,
    }

    Ok(())
}
