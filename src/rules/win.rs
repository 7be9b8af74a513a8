//! Win condition checking
//!
//! A player wins by holding `win_length` consecutive cells along a row, a
//! column or either diagonal. Lines are bounded by the grid: stepping off an
//! edge ends the line, so nothing wraps from one row into the next.

use crate::board::{Board, Mark, Move, DIRECTIONS};

/// Count consecutive `mark` cells starting one step away from `mv`.
#[inline]
fn run_length(board: &Board, mv: Move, dr: isize, dc: isize, mark: Mark) -> usize {
    let mut count = 0;
    let mut cur = board.step(mv, dr, dc);
    while let Some(next) = cur {
        if board.get(next) != Some(mark) {
            break;
        }
        count += 1;
        cur = board.step(next, dr, dc);
    }
    count
}

/// Check whether `mark` at `mv` completes a line of `win_length`.
///
/// Only the four lines passing through `mv` are examined, so this costs
/// O(win_length) rather than a whole-board scan. The cell at `mv` must
/// already hold `mark`.
#[must_use]
pub fn check_win(board: &Board, mv: Move, mark: Mark) -> bool {
    if board.get(mv) != Some(mark) {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, mv, dr, dc, mark) + run_length(board, mv, -dr, -dc, mark)
            >= board.win_length()
    })
}

/// Find the cells of the line through `mv` that wins for `mark`.
///
/// Returns the full consecutive run (at least `win_length` cells) in
/// ascending index order.
#[must_use]
pub fn winning_line(board: &Board, mv: Move, mark: Mark) -> Option<Vec<Move>> {
    if board.get(mv) != Some(mark) {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let mut line = vec![mv];

        let mut cur = board.step(mv, -dr, -dc);
        while let Some(prev) = cur.filter(|&p| board.get(p) == Some(mark)) {
            line.push(prev);
            cur = board.step(prev, -dr, -dc);
        }
        cur = board.step(mv, dr, dc);
        while let Some(next) = cur.filter(|&p| board.get(p) == Some(mark)) {
            line.push(next);
            cur = board.step(next, dr, dc);
        }

        if line.len() >= board.win_length() {
            line.sort_unstable();
            return Some(line);
        }
    }
    None
}

/// Scan every square for a completed line.
///
/// Squares are visited in index order and the human mark is tested before
/// the computer mark at each square.
#[must_use]
pub fn find_winner(board: &Board) -> Option<Mark> {
    (0..board.total_cells()).find_map(|mv| {
        [Mark::Human, Mark::Computer]
            .into_iter()
            .find(|&mark| check_win(board, mv, mark))
    })
}

/// Every contiguous window of exactly `win_length` cells, in all four
/// directions, that fits entirely on the board.
pub fn line_windows(board: &Board) -> impl Iterator<Item = Vec<Move>> + '_ {
    let len = board.win_length();
    (0..board.total_cells()).flat_map(move |start| {
        DIRECTIONS.into_iter().filter_map(move |(dr, dc)| {
            let mut window = Vec::with_capacity(len);
            let mut cur = Some(start);
            for _ in 0..len {
                let cell = cur?;
                window.push(cell);
                cur = board.step(cell, dr, dc);
            }
            Some(window)
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, win_length: usize, cells: &[(Move, Mark)]) -> Board {
        let mut board = Board::new(size, win_length);
        for &(mv, mark) in cells {
            assert!(board.place(mv, mark));
        }
        board
    }

    #[test]
    fn test_classic_row_win() {
        let board = board_with(3, 3, &[(3, Mark::Human), (4, Mark::Human), (5, Mark::Human)]);
        for mv in [3, 4, 5] {
            assert!(check_win(&board, mv, Mark::Human));
        }
        assert!(!check_win(&board, 0, Mark::Human));
    }

    #[test]
    fn test_classic_column_win() {
        let board = board_with(3, 3, &[(1, Mark::Computer), (4, Mark::Computer), (7, Mark::Computer)]);
        assert!(check_win(&board, 7, Mark::Computer));
        assert!(!check_win(&board, 7, Mark::Human));
    }

    #[test]
    fn test_classic_diagonals() {
        let main = board_with(3, 3, &[(0, Mark::Human), (4, Mark::Human), (8, Mark::Human)]);
        assert!(check_win(&main, 8, Mark::Human));

        let anti = board_with(3, 3, &[(2, Mark::Human), (4, Mark::Human), (6, Mark::Human)]);
        assert!(check_win(&anti, 6, Mark::Human));
        assert!(check_win(&anti, 4, Mark::Human));
    }

    #[test]
    fn test_odd_square_never_on_diagonal() {
        // 1, 3, 5, 7 lie on no diagonal; a diagonal line elsewhere is not
        // attributed to them.
        let board = board_with(
            3,
            3,
            &[(0, Mark::Human), (4, Mark::Human), (8, Mark::Human), (1, Mark::Human)],
        );
        let mut without_diag = board.clone();
        without_diag.clear(8);
        assert!(!check_win(&without_diag, 1, Mark::Human));
    }

    #[test]
    fn test_general_row_does_not_wrap() {
        // Cells 3, 4 end row 0 and 5, 6 start row 1: contiguous indices,
        // not a line.
        let board = board_with(
            5,
            4,
            &[(3, Mark::Human), (4, Mark::Human), (5, Mark::Human), (6, Mark::Human)],
        );
        for mv in [3, 4, 5, 6] {
            assert!(!check_win(&board, mv, Mark::Human));
        }
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_general_diagonal_does_not_wrap() {
        // 3, 9, 15 and 21 step by size + 1 but 9 -> 15 leaves the grid's
        // right edge.
        let board = board_with(
            5,
            4,
            &[(3, Mark::Computer), (9, Mark::Computer), (15, Mark::Computer), (21, Mark::Computer)],
        );
        assert!(!check_win(&board, 21, Mark::Computer));
    }

    #[test]
    fn test_general_four_in_row() {
        let board = board_with(
            5,
            4,
            &[(11, Mark::Human), (12, Mark::Human), (13, Mark::Human), (14, Mark::Human)],
        );
        assert!(check_win(&board, 14, Mark::Human));
        assert_eq!(board.winner(), Some(Mark::Human));
    }

    #[test]
    fn test_general_anti_diagonal_four() {
        let board = board_with(
            5,
            4,
            &[(9, Mark::Computer), (13, Mark::Computer), (17, Mark::Computer), (21, Mark::Computer)],
        );
        assert!(check_win(&board, 13, Mark::Computer));
        assert_eq!(winning_line(&board, 13, Mark::Computer), Some(vec![9, 13, 17, 21]));
    }

    #[test]
    fn test_three_is_not_four() {
        let board = board_with(5, 4, &[(0, Mark::Human), (6, Mark::Human), (12, Mark::Human)]);
        assert!(!check_win(&board, 12, Mark::Human));
        assert_eq!(find_winner(&board), None);
    }

    #[test]
    fn test_check_win_symmetric_under_relabeling() {
        let pattern = [0, 6, 12, 18];
        for mark in [Mark::Human, Mark::Computer] {
            let cells: Vec<_> = pattern.iter().map(|&mv| (mv, mark)).collect();
            let board = board_with(5, 4, &cells);
            assert!(check_win(&board, 18, mark));
            assert!(!check_win(&board, 18, mark.opponent()));
        }
    }

    #[test]
    fn test_find_winner_scans_all_squares() {
        let mut board = Board::classic();
        board.place(2, Mark::Computer);
        board.place(5, Mark::Computer);
        assert_eq!(find_winner(&board), None);
        board.place(8, Mark::Computer);
        assert_eq!(find_winner(&board), Some(Mark::Computer));
    }

    #[test]
    fn test_window_counts() {
        // 3 rows + 3 columns + 2 diagonals
        assert_eq!(line_windows(&Board::classic()).count(), 8);
        // 10 horizontal + 10 vertical + 4 + 4 diagonal
        assert_eq!(line_windows(&Board::new(5, 4)).count(), 28);
        for window in line_windows(&Board::new(5, 4)) {
            assert_eq!(window.len(), 4);
        }
    }
}
