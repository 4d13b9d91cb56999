use super::types::{BOARD_SIZE, LineKind, Mark, WinningLine};

/// Lines in the order they are checked: columns, rows, then both diagonals.
/// The first complete line is the one reported for drawing.
pub const LINES: [LineKind; 8] = [
    LineKind::Column(0),
    LineKind::Column(1),
    LineKind::Column(2),
    LineKind::Row(0),
    LineKind::Row(1),
    LineKind::Row(2),
    LineKind::MainDiagonal,
    LineKind::AntiDiagonal,
];

pub fn check_win_with_line(cells: &[[Mark; BOARD_SIZE]; BOARD_SIZE]) -> Option<WinningLine> {
    LINES.iter().find_map(|&kind| {
        let [first, second, third] = kind.cells();
        let mark = cells[first.row][first.col];
        let player = mark.player()?;
        if cells[second.row][second.col] == mark && cells[third.row][third.col] == mark {
            Some(WinningLine::new(player, kind))
        } else {
            None
        }
    })
}
