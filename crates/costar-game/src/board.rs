//! Board state and move rules

use crate::error::{GameError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Board side length
pub const SIZE: usize = 3;

/// The eight winning lines: rows, columns, diagonals
const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => write!(f, "X"),
            Self::O => write!(f, "O"),
        }
    }
}

/// A cell to mark, 0-based
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

impl FromStr for Action {
    type Err = GameError;

    /// Parses `"row col"` or `"row,col"`
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [row, col] => {
                let row = row.parse().map_err(|_| GameError::Parse(s.to_string()))?;
                let col = col.parse().map_err(|_| GameError::Parse(s.to_string()))?;
                Ok(Self { row, col })
            }
            _ => Err(GameError::Parse(s.to_string())),
        }
    }
}

/// 3x3 tic-tac-toe board
///
/// Whose turn it is is derived from the marks, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Player>; SIZE]; SIZE],
}

impl Board {
    /// Empty board
    pub fn initial() -> Self {
        Self::default()
    }

    pub fn from_cells(cells: [[Option<Player>; SIZE]; SIZE]) -> Self {
        Self { cells }
    }

    /// Mark at a cell; `None` for empty or off-board cells
    pub fn get(&self, row: usize, col: usize) -> Option<Player> {
        self.cells
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .flatten()
    }

    fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| **cell == Some(player))
            .count()
    }

    /// Player to move: X moves first, so X is up whenever the counts are equal
    pub fn player(&self) -> Player {
        if self.count(Player::X) > self.count(Player::O) {
            Player::O
        } else {
            Player::X
        }
    }

    /// Empty cells in row-major order
    pub fn actions(&self) -> Vec<Action> {
        (0..SIZE)
            .flat_map(|row| (0..SIZE).map(move |col| Action::new(row, col)))
            .filter(|a| self.cells[a.row][a.col].is_none())
            .collect()
    }

    /// Board after the current player marks `action`
    pub fn result(&self, action: Action) -> Result<Board> {
        let Action { row, col } = action;
        if row >= SIZE || col >= SIZE {
            return Err(GameError::OutOfBounds { row, col });
        }
        if self.cells[row][col].is_some() {
            return Err(GameError::CellOccupied { row, col });
        }

        let mut next = *self;
        next.cells[row][col] = Some(self.player());
        Ok(next)
    }

    /// Owner of a completed line, if any
    pub fn winner(&self) -> Option<Player> {
        LINES.iter().find_map(|line| {
            let [a, b, c] = line.map(|(row, col)| self.cells[row][col]);
            match a {
                Some(player) if a == b && b == c => Some(player),
                _ => None,
            }
        })
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(Option::is_some)
    }

    /// Game over: someone won or no empty cell is left
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    /// 1 if X has won, -1 if O has won, 0 otherwise
    pub fn utility(&self) -> i8 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f, "---+---+---")?;
            }
            let marks: Vec<String> = row
                .iter()
                .map(|cell| match cell {
                    Some(player) => format!(" {} ", player),
                    None => "   ".to_string(),
                })
                .collect();
            writeln!(f, "{}", marks.join("|"))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Option<Player> = Some(Player::X);
    const O: Option<Player> = Some(Player::O);
    const E: Option<Player> = None;

    #[test]
    fn test_initial_board() {
        let board = Board::initial();

        assert_eq!(board.player(), Player::X);
        assert_eq!(board.actions().len(), 9);
        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.utility(), 0);
    }

    #[test]
    fn test_players_alternate() {
        let board = Board::initial();
        let after_x = board.result(Action::new(1, 1)).unwrap();
        assert_eq!(after_x.player(), Player::O);
        assert_eq!(after_x.get(1, 1), Some(Player::X));

        let after_o = after_x.result(Action::new(0, 0)).unwrap();
        assert_eq!(after_o.player(), Player::X);
        assert_eq!(after_o.get(0, 0), Some(Player::O));
        assert_eq!(after_o.actions().len(), 7);
    }

    #[test]
    fn test_result_leaves_original_untouched() {
        let board = Board::initial();
        let _ = board.result(Action::new(2, 2)).unwrap();

        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_invalid_moves() {
        let board = Board::initial().result(Action::new(0, 0)).unwrap();

        assert_eq!(
            board.result(Action::new(0, 0)),
            Err(GameError::CellOccupied { row: 0, col: 0 })
        );
        assert_eq!(
            board.result(Action::new(3, 0)),
            Err(GameError::OutOfBounds { row: 3, col: 0 })
        );
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            for player in [Player::X, Player::O] {
                let mut cells = [[E; SIZE]; SIZE];
                for (r, c) in line {
                    cells[r][c] = Some(player);
                }
                let board = Board::from_cells(cells);

                assert_eq!(board.winner(), Some(player), "line {:?}", line);
                assert!(board.is_terminal());
            }
        }
    }

    #[test]
    fn test_draw_has_no_winner() {
        let board = Board::from_cells([[X, O, X], [X, O, O], [O, X, X]]);

        assert_eq!(board.winner(), None);
        assert!(board.is_full());
        assert!(board.is_terminal());
        assert_eq!(board.utility(), 0);
        assert!(board.actions().is_empty());
    }

    #[test]
    fn test_non_terminal_board() {
        let board = Board::from_cells([[X, O, E], [E, X, E], [E, E, O]]);

        assert_eq!(board.winner(), None);
        assert!(!board.is_terminal());
        assert_eq!(board.player(), Player::X);
    }

    #[test]
    fn test_utility() {
        assert_eq!(Board::from_cells([[X, X, X], [O, O, E], [E, E, E]]).utility(), 1);
        assert_eq!(Board::from_cells([[O, X, X], [O, X, E], [O, E, E]]).utility(), -1);
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("1 2".parse::<Action>(), Ok(Action::new(1, 2)));
        assert_eq!(" 0,2 ".parse::<Action>(), Ok(Action::new(0, 2)));
        assert!("1".parse::<Action>().is_err());
        assert!("a b".parse::<Action>().is_err());
        assert!("1 2 3".parse::<Action>().is_err());
    }

    #[test]
    fn test_display() {
        let board = Board::from_cells([[X, E, E], [E, O, E], [E, E, E]]);
        let text = board.to_string();

        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.lines().next(), Some(" X |   |   "));
    }
}
