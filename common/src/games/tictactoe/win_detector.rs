use super::{Board, Marker};

// Rows, then columns, then diagonals. Callers rely on this order for ties.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [1, 2, 3],
    [4, 5, 6],
    [7, 8, 9],
    [1, 4, 7],
    [2, 5, 8],
    [3, 6, 9],
    [1, 5, 9],
    [3, 5, 7],
];

pub fn winning_line(board: &Board) -> Option<[usize; 3]> {
    WINNING_LINES.into_iter().find(|line| {
        let [a, b, c] = line.map(|position| board.get(position));
        a.is_some() && a == b && b == c
    })
}

pub fn winning_marker(board: &Board) -> Option<Marker> {
    winning_line(board).and_then(|line| board.get(line[0]))
}
