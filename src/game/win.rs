use super::board::Board;
use super::line::Orientation;
use super::player::Player;

/// Number of aligned pieces needed to win
pub const CONNECT: usize = 4;

/// Fewest placements after which a win is possible (4 by the first player,
/// 3 by the second in between).
pub const MIN_PLACEMENTS_FOR_WIN: usize = 2 * CONNECT - 1;

/// Four aligned cells owned by the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WinningLine {
    pub owner: Player,
    pub orientation: Orientation,
    /// (row, col) of each cell, starting at the anchor
    pub cells: [(usize, usize); CONNECT],
}

/// Owner of the `len` cells starting at `(row, col)` along `orientation`, if
/// they are all filled by the same player. The run must lie on the board.
pub fn run_owner(
    board: &Board,
    orientation: Orientation,
    row: usize,
    col: usize,
    len: usize,
) -> Option<Player> {
    let owner = board.get(row, col).owner()?;
    for i in 1..len as isize {
        let (r, c) = orientation.offset(row, col, i);
        if board.get_signed(r, c)?.owner() != Some(owner) {
            return None;
        }
    }
    Some(owner)
}

/// Scan the whole board for four in a row. Orientations are checked in
/// `Orientation::ALL` order and the first line found is returned.
pub fn check_win(board: &Board) -> Option<WinningLine> {
    for orientation in Orientation::ALL {
        for (row, col) in orientation.anchors(CONNECT) {
            if let Some(owner) = run_owner(board, orientation, row, col, CONNECT) {
                let mut cells = [(row, col); CONNECT];
                for (i, cell) in cells.iter_mut().enumerate() {
                    let (r, c) = orientation.offset(row, col, i as isize);
                    *cell = (r as usize, c as usize);
                }
                return Some(WinningLine {
                    owner,
                    orientation,
                    cells,
                });
            }
        }
    }
    None
}
