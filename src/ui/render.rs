//! Plain-text board rendering

use crate::board::Board;

/// Render the board as rows of ` X | O |   ` separated by `---+---+---`.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let separator = vec!["---"; size].join("+");

    let rows: Vec<String> = board
        .cells()
        .chunks(size)
        .map(|row| {
            let cells: Vec<String> = row
                .iter()
                .map(|cell| cell.map_or(' ', |mark| mark.symbol()).to_string())
                .collect();
            format!(" {}", cells.join(" | "))
        })
        .collect();

    let mut out = rows.join(&format!("\n{separator}\n"));
    out.push('\n');
    out
}
