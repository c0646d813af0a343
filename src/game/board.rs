use std::fmt;

use super::player::Player;
use crate::error::MoveError;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Row index of the floor; gravity fills a column from here upward.
pub const BOTTOM_ROW: usize = ROWS - 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owned(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owned(player) => Some(player),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    /// Token used by the text rendering
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '_',
            Cell::Owned(player) => player.marker(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position
    /// Row 0 is the top, row 5 is the bottom
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Like `get`, but with signed coordinates; `None` off the board.
    pub fn get_signed(&self, row: isize, col: isize) -> Option<Cell> {
        if row < 0 || col < 0 || row >= ROWS as isize || col >= COLS as isize {
            return None;
        }
        Some(self.cells[row as usize][col as usize])
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Row a piece dropped into `col` would land on, if any.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        if col >= COLS {
            return None;
        }
        (0..ROWS).rev().find(|&row| self.cells[row][col] == Cell::Empty)
    }

    /// A cell is reachable this turn when it is empty and rests on the floor
    /// or on a filled cell.
    pub fn is_playable(&self, row: usize, col: usize) -> bool {
        self.landing_row(col) == Some(row)
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn drop(&mut self, col: usize, player: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::ColumnOutOfRange(col));
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull(col))?;
        debug_assert!(
            row == BOTTOM_ROW || !self.cells[row + 1][col].is_empty(),
            "landing row {row} in column {col} is not supported"
        );
        self.cells[row][col] = player.to_cell();
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that still accept a piece, in ascending order
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Number of pieces on the board
    pub fn piece_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Six lines of seven space-separated tokens, top row first.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.cells {
            let line: Vec<String> = row.iter().map(|cell| cell.symbol().to_string()).collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Gravity invariant: no empty cell sits below a filled one.
    fn assert_gravity(board: &Board) {
        for col in 0..COLS {
            for row in 0..BOTTOM_ROW {
                if !board.get(row, col).is_empty() {
                    assert!(
                        !board.get(row + 1, col).is_empty(),
                        "gap below ({row}, {col})"
                    );
                }
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert_eq!(board.piece_count(), 0);
    }

    #[test]
    fn test_drop_piece() {
        let mut board = Board::new();

        let row = board.drop(3, Player::X).unwrap();
        assert_eq!(row, 5);
        assert_eq!(board.get(5, 3), Cell::Owned(Player::X));

        let row = board.drop(3, Player::O).unwrap();
        assert_eq!(row, 4);
        assert_eq!(board.get(4, 3), Cell::Owned(Player::O));
    }

    #[test]
    fn test_column_full_leaves_board_unchanged() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.drop(0, Player::X).unwrap();
        }

        let before = board;
        assert!(board.is_column_full(0));
        assert_eq!(board.drop(0, Player::O), Err(MoveError::ColumnFull(0)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_column_out_of_range() {
        let mut board = Board::new();
        assert_eq!(
            board.drop(7, Player::X),
            Err(MoveError::ColumnOutOfRange(7))
        );
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                board.drop(col, Player::X).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.open_columns().is_empty());
    }

    #[test]
    fn test_landing_row_and_playable() {
        let mut board = Board::new();
        assert_eq!(board.landing_row(2), Some(5));
        assert!(board.is_playable(5, 2));
        assert!(!board.is_playable(4, 2));

        board.drop(2, Player::O).unwrap();
        assert_eq!(board.landing_row(2), Some(4));
        assert!(board.is_playable(4, 2));
        assert!(!board.is_playable(5, 2));
        assert_eq!(board.landing_row(9), None);
    }

    #[test]
    fn test_cells_are_written_once_and_gravity_holds() {
        let mut board = Board::new();
        let moves = [3, 3, 2, 4, 4, 4, 0, 6, 3, 3, 3, 3, 5, 1, 1];
        let mut history: Vec<(usize, usize, Player)> = Vec::new();
        let mut player = Player::X;

        for &col in &moves {
            match board.drop(col, player) {
                Ok(row) => history.push((row, col, player)),
                Err(err) => assert_eq!(err, MoveError::ColumnFull(col)),
            }
            for &(r, c, p) in &history {
                assert_eq!(board.get(r, c), Cell::Owned(p));
            }
            assert_gravity(&board);
            player = player.other();
        }
        assert_eq!(board.piece_count(), history.len());
    }

    #[test]
    fn test_display_rendering() {
        let mut board = Board::new();
        board.drop(0, Player::X).unwrap();
        board.drop(6, Player::O).unwrap();
        board.drop(0, Player::O).unwrap();

        let text = board.to_string();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), ROWS);
        assert_eq!(lines[0], "_ _ _ _ _ _ _");
        assert_eq!(lines[4], "O _ _ _ _ _ _");
        assert_eq!(lines[5], "X _ _ _ _ _ O");
    }
}
