//! Core Connect Four game logic: board with gravity drops, player types,
//! line geometry, win detection, and the turn state.

mod board;
mod line;
mod player;
mod state;
pub mod win;

pub use board::{Board, Cell, BOTTOM_ROW, COLS, ROWS};
pub use line::Orientation;
pub use player::Player;
pub use state::{GameOutcome, GameState, GameStatus, Placement};
pub use win::{check_win, WinningLine};
