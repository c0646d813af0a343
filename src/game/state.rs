use tracing::debug;

use super::win::{check_win, WinningLine, MIN_PLACEMENTS_FOR_WIN};
use super::{Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Win(Player),
    Draw,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Draw,
}

/// Result of a successful placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub player: Player,
    pub row: usize,
    pub column: usize,
    /// Set when this placement ended the game with four in a row
    pub winning_line: Option<WinningLine>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameState {
    board: Board,
    active_player: Player,
    turn_count: usize,
    status: GameStatus,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            active_player: Player::X, // X starts
            turn_count: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Player whose move is awaited (or who made the final move)
    pub fn active_player(&self) -> Player {
        self.active_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of successful placements so far
    pub fn turn_count(&self) -> usize {
        self.turn_count
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won(player) => Some(GameOutcome::Win(player)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.open_columns()
    }

    /// Drop a piece for the active player and advance the turn. A rejected
    /// move leaves the state untouched.
    pub(crate) fn apply_move_mut(&mut self, column: usize) -> Result<Placement, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.active_player;
        let row = self.board.drop(column, player)?;
        self.turn_count += 1;
        debug_assert_eq!(self.board.piece_count(), self.turn_count);
        debug!(%player, column, row, turn = self.turn_count, "piece placed");

        let winning_line = if self.turn_count >= MIN_PLACEMENTS_FOR_WIN {
            check_win(&self.board)
        } else {
            None
        };

        if let Some(line) = winning_line {
            debug_assert_eq!(line.owner, player, "only the mover can complete a line");
            self.status = GameStatus::Won(player);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.active_player = player.other();
        }

        Ok(Placement {
            player,
            row,
            column,
            winning_line,
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
