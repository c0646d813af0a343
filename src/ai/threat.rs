//! Near-win recognition for the heuristic opponent.
//!
//! The scanner looks for three same-owner cells in a row that can still
//! become four, and scores the columns that would complete (own threat) or
//! block (opponent threat) it. Only the first threat in scan order is
//! considered, so a more urgent threat elsewhere on the board can be missed.

use rand::Rng;

use crate::game::win::{run_owner, CONNECT};
use crate::game::{Board, Orientation, Player, COLS};

/// Length of a run that counts as a threat
pub const THREAT_LEN: usize = CONNECT - 1;

/// Score of a column that completes the AI's own line
pub const WIN_SCORE: u8 = 2;
/// Score of a column that blocks the opponent's line
pub const BLOCK_SCORE: u8 = 1;

/// Three aligned cells of one owner, read from the anchor along the
/// orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Threat {
    pub anchor_row: usize,
    pub anchor_col: usize,
    pub orientation: Orientation,
    pub owner: Player,
}

impl Threat {
    /// The cells just before and just after the run. Either may be off the
    /// board.
    pub fn extension_cells(&self) -> [(isize, isize); 2] {
        [
            self.orientation.offset(self.anchor_row, self.anchor_col, -1),
            self.orientation
                .offset(self.anchor_row, self.anchor_col, THREAT_LEN as isize),
        ]
    }

    /// Extension cells a piece can be dropped into this turn, as (row, col).
    pub fn playable_extensions(&self, board: &Board) -> Vec<(usize, usize)> {
        self.extension_cells()
            .into_iter()
            .filter(|&(r, c)| board.get_signed(r, c).is_some_and(|cell| cell.is_empty()))
            .map(|(r, c)| (r as usize, c as usize))
            .filter(|&(r, c)| board.is_playable(r, c))
            .collect()
    }

    fn is_extendable(&self, board: &Board) -> bool {
        self.extension_cells()
            .into_iter()
            .any(|(r, c)| board.get_signed(r, c).is_some_and(|cell| cell.is_empty()))
    }
}

/// Find the first extendable three-in-a-row. Orientations are tried in
/// `Orientation::ALL` order, anchors in the same order the win check uses.
pub fn find_near_win(board: &Board) -> Option<Threat> {
    for orientation in Orientation::ALL {
        for (row, col) in orientation.anchors(THREAT_LEN) {
            let Some(owner) = run_owner(board, orientation, row, col, THREAT_LEN) else {
                continue;
            };
            let threat = Threat {
                anchor_row: row,
                anchor_col: col,
                orientation,
                owner,
            };
            if threat.is_extendable(board) {
                return Some(threat);
            }
        }
    }
    None
}

/// Per-column scores from `ai_player`'s point of view. Full columns are
/// `None`; every other column scores 0 unless it completes or blocks the
/// threat found by [`find_near_win`].
pub fn score_columns(board: &Board, ai_player: Player) -> [Option<u8>; COLS] {
    scan_and_score(board, ai_player).0
}

/// One threat scan, and the scores derived from it.
fn scan_and_score(board: &Board, ai_player: Player) -> ([Option<u8>; COLS], Option<Threat>) {
    let mut scores = [None; COLS];
    for (col, score) in scores.iter_mut().enumerate() {
        if !board.is_column_full(col) {
            *score = Some(0);
        }
    }

    let threat = find_near_win(board);
    if let Some(threat) = threat {
        let value = if threat.owner == ai_player {
            WIN_SCORE
        } else {
            BLOCK_SCORE
        };
        for (_, col) in threat.playable_extensions(board) {
            if let Some(score) = scores[col].as_mut() {
                *score = (*score).max(value);
            }
        }
    }

    (scores, threat)
}

/// A chosen column together with the reasoning behind it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Recommendation {
    pub column: usize,
    pub score: u8,
    pub threat: Option<Threat>,
}

/// Pick the highest scoring column, leftmost on ties. When nothing scores,
/// pick uniformly among the open columns. `None` only on a full board.
pub fn select_column<R: Rng>(
    board: &Board,
    ai_player: Player,
    rng: &mut R,
) -> Option<Recommendation> {
    let (scores, threat) = scan_and_score(board, ai_player);

    let best = scores
        .iter()
        .enumerate()
        .filter_map(|(col, score)| score.map(|s| (col, s)))
        .fold(None, |best: Option<(usize, u8)>, (col, s)| match best {
            Some((_, top)) if top >= s => best,
            _ => Some((col, s)),
        });

    match best {
        Some((column, score)) if score > 0 => Some(Recommendation {
            column,
            score,
            threat,
        }),
        Some(_) => {
            let open: Vec<usize> = (0..COLS).filter(|&col| scores[col].is_some()).collect();
            let column = open[rng.random_range(0..open.len())];
            Some(Recommendation {
                column,
                score: 0,
                threat,
            })
        }
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board_from_moves(moves: &[(usize, Player)]) -> Board {
        let mut board = Board::new();
        for &(col, player) in moves {
            board.drop(col, player).unwrap();
        }
        board
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    #[test]
    fn test_empty_board_has_no_threat() {
        let board = Board::new();
        assert_eq!(find_near_win(&board), None);
        assert_eq!(score_columns(&board, Player::O), [Some(0); COLS]);
    }

    #[test]
    fn test_vertical_self_threat_is_completed() {
        let board = board_from_moves(&[
            (0, Player::X),
            (3, Player::O),
            (1, Player::X),
            (3, Player::O),
            (6, Player::X),
            (3, Player::O),
        ]);

        let threat = find_near_win(&board).unwrap();
        assert_eq!(
            threat,
            Threat {
                anchor_row: 3,
                anchor_col: 3,
                orientation: Orientation::Vertical,
                owner: Player::O,
            }
        );
        assert_eq!(threat.playable_extensions(&board), vec![(2, 3)]);

        let scores = score_columns(&board, Player::O);
        assert_eq!(scores[3], Some(WIN_SCORE));

        let pick = select_column(&board, Player::O, &mut rng()).unwrap();
        assert_eq!(pick.column, 3);
        assert_eq!(pick.score, 2);
    }

    #[test]
    fn test_horizontal_opponent_threat_is_blocked_leftmost() {
        let board = board_from_moves(&[
            (2, Player::X),
            (2, Player::O),
            (3, Player::X),
            (3, Player::O),
            (4, Player::X),
        ]);

        let threat = find_near_win(&board).unwrap();
        assert_eq!(threat.orientation, Orientation::Horizontal);
        assert_eq!((threat.anchor_row, threat.anchor_col), (5, 2));
        assert_eq!(threat.owner, Player::X);

        let scores = score_columns(&board, Player::O);
        assert_eq!(scores[1], Some(BLOCK_SCORE));
        assert_eq!(scores[5], Some(BLOCK_SCORE));
        assert_eq!(scores[0], Some(0));

        // Both ends block; the leftmost wins the tie
        let pick = select_column(&board, Player::O, &mut rng()).unwrap();
        assert_eq!(pick.column, 1);
        assert_eq!(pick.score, 1);
    }

    #[test]
    fn test_block_on_the_only_open_side() {
        let board = board_from_moves(&[
            (2, Player::X),
            (1, Player::O),
            (3, Player::X),
            (3, Player::O),
            (4, Player::X),
        ]);

        let scores = score_columns(&board, Player::O);
        assert_eq!(scores[1], Some(0));
        assert_eq!(scores[5], Some(BLOCK_SCORE));
        assert_eq!(select_column(&board, Player::O, &mut rng()).unwrap().column, 5);
    }

    #[test]
    fn test_unsupported_extension_scores_zero() {
        // X holds (5,0) (4,1) (3,2); the completing cell (2,3) floats over an
        // empty column 3.
        let board = board_from_moves(&[
            (0, Player::X),
            (1, Player::O),
            (1, Player::X),
            (2, Player::O),
            (2, Player::O),
            (2, Player::X),
        ]);

        let threat = find_near_win(&board).unwrap();
        assert_eq!(threat.orientation, Orientation::DiagDownLeft);
        assert_eq!((threat.anchor_row, threat.anchor_col), (3, 2));
        assert!(threat.playable_extensions(&board).is_empty());
        assert_eq!(score_columns(&board, Player::O), [Some(0); COLS]);

        let pick = select_column(&board, Player::O, &mut rng()).unwrap();
        assert_eq!(pick.score, 0);
        assert!(board.open_columns().contains(&pick.column));
    }

    #[test]
    fn test_supported_diagonal_extension_scores() {
        let board = board_from_moves(&[
            (0, Player::X),
            (1, Player::O),
            (1, Player::X),
            (2, Player::O),
            (2, Player::O),
            (2, Player::X),
            (3, Player::X),
            (3, Player::O),
            (3, Player::X),
        ]);

        let threat = find_near_win(&board).unwrap();
        assert_eq!(threat.orientation, Orientation::DiagDownLeft);
        assert_eq!(threat.playable_extensions(&board), vec![(2, 3)]);

        let scores = score_columns(&board, Player::O);
        assert_eq!(scores[3], Some(BLOCK_SCORE));
        assert_eq!(select_column(&board, Player::O, &mut rng()).unwrap().column, 3);

        // Same board seen by X: completing its own line
        assert_eq!(score_columns(&board, Player::X)[3], Some(WIN_SCORE));
    }

    #[test]
    fn test_dead_three_is_not_a_threat() {
        // X X X on the bottom row capped by O on both sides
        let board = board_from_moves(&[
            (1, Player::X),
            (0, Player::O),
            (2, Player::X),
            (4, Player::O),
            (3, Player::X),
        ]);
        assert_eq!(find_near_win(&board), None);
    }

    #[test]
    fn test_first_threat_wins_over_more_urgent_one() {
        // O threatens horizontally on row 5 (found first), while X's vertical
        // three in column 6 is left alone.
        let board = board_from_moves(&[
            (6, Player::X),
            (0, Player::O),
            (6, Player::X),
            (1, Player::O),
            (6, Player::X),
            (2, Player::O),
        ]);

        let threat = find_near_win(&board).unwrap();
        assert_eq!(threat.owner, Player::O);
        assert_eq!(threat.orientation, Orientation::Horizontal);

        let scores = score_columns(&board, Player::X);
        assert_eq!(scores[3], Some(BLOCK_SCORE));
        assert_eq!(scores[6], Some(0));
    }

    #[test]
    fn test_full_columns_are_excluded() {
        let mut moves = Vec::new();
        for i in 0..6 {
            moves.push((0, if i % 2 == 0 { Player::X } else { Player::O }));
        }
        let board = board_from_moves(&moves);
        let scores = score_columns(&board, Player::O);
        assert_eq!(scores[0], None);

        let mut rng = rng();
        for _ in 0..50 {
            let pick = select_column(&board, Player::O, &mut rng).unwrap();
            assert_ne!(pick.column, 0);
        }
    }

    #[test]
    fn test_full_board_has_no_recommendation() {
        let mut board = Board::new();
        for col in 0..COLS {
            for row in 0..6 {
                let player = if (row / 2 + col) % 2 == 0 { Player::X } else { Player::O };
                board.drop(col, player).unwrap();
            }
        }
        assert_eq!(select_column(&board, Player::O, &mut rng()), None);
    }

    #[test]
    fn test_recommendation_reports_the_scored_threat() {
        let board = board_from_moves(&[
            (2, Player::X),
            (1, Player::O),
            (3, Player::X),
            (3, Player::O),
            (4, Player::X),
        ]);

        let (scores, threat) = scan_and_score(&board, Player::O);
        assert_eq!(threat, find_near_win(&board));
        assert_eq!(scores, score_columns(&board, Player::O));

        let pick = select_column(&board, Player::O, &mut rng()).unwrap();
        assert_eq!(pick.threat, threat);
        assert_eq!(Some(pick.score), scores[pick.column]);
    }

    #[test]
    fn test_selection_is_deterministic_for_a_seed() {
        let board = board_from_moves(&[(3, Player::X)]);
        let a = select_column(&board, Player::O, &mut StdRng::seed_from_u64(42));
        let b = select_column(&board, Player::O, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
