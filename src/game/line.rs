use super::board::{COLS, ROWS};

/// Direction a run of cells is read in, from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Orientation {
    Horizontal,
    Vertical,
    /// `\` read from the top-left end
    DiagDownRight,
    /// `/` read from the top-right end
    DiagDownLeft,
}

impl Orientation {
    /// Scan priority shared by win detection and threat scanning
    pub const ALL: [Orientation; 4] = [
        Orientation::Horizontal,
        Orientation::Vertical,
        Orientation::DiagDownRight,
        Orientation::DiagDownLeft,
    ];

    /// (row, col) step between consecutive cells of a run
    pub fn step(self) -> (isize, isize) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
            Orientation::DiagDownRight => (1, 1),
            Orientation::DiagDownLeft => (1, -1),
        }
    }

    /// Every anchor from which a run of `len` cells stays on the board, in
    /// scan order. Rows and columns are bounded explicitly per direction so
    /// nothing wraps across an edge.
    pub fn anchors(self, len: usize) -> Vec<(usize, usize)> {
        debug_assert!((1..=ROWS.min(COLS)).contains(&len));
        let mut anchors = Vec::new();
        match self {
            Orientation::Horizontal => {
                for row in 0..ROWS {
                    for col in 0..=COLS - len {
                        anchors.push((row, col));
                    }
                }
            }
            Orientation::Vertical => {
                for col in 0..COLS {
                    for row in 0..=ROWS - len {
                        anchors.push((row, col));
                    }
                }
            }
            Orientation::DiagDownRight => {
                for row in 0..=ROWS - len {
                    for col in 0..=COLS - len {
                        anchors.push((row, col));
                    }
                }
            }
            Orientation::DiagDownLeft => {
                for row in 0..=ROWS - len {
                    for col in len - 1..COLS {
                        anchors.push((row, col));
                    }
                }
            }
        }
        anchors
    }

    /// Cell `offset` steps away from `(row, col)`; may be off the board.
    pub fn offset(self, row: usize, col: usize, offset: isize) -> (isize, isize) {
        let (dr, dc) = self.step();
        (row as isize + dr * offset, col as isize + dc * offset)
    }
}
