use crate::games::SessionRng;

use super::{Board, CENTER, Marker, WINNING_LINES};

const COMPUTER_NAMES: [&str; 8] = [
    "KITT",
    "Rosie",
    "ED-209",
    "T-1000",
    "Iron Giant",
    "Major Motoko Kusanagi",
    "Bishop 341-B",
    "Data",
];

pub fn pick_computer_name(rng: &mut SessionRng) -> &'static str {
    rng.choose(&COMPUTER_NAMES).copied().unwrap_or("KITT")
}

pub fn find_line_completion(board: &Board, marker: Marker) -> Option<usize> {
    WINNING_LINES.iter().find_map(|line| {
        let held = line.iter().filter(|&&p| board.get(p) == Some(marker)).count();
        let free: Vec<usize> = line.iter().copied().filter(|&p| board.is_unmarked(p)).collect();
        match (held, free.as_slice()) {
            (2, &[position]) => Some(position),
            _ => None,
        }
    })
}

pub fn choose_computer_move(
    board: &Board,
    human: Marker,
    computer: Marker,
    rng: &mut SessionRng,
) -> Option<usize> {
    if let Some(position) = find_line_completion(board, computer) {
        crate::log!("Computer completes a line at {}", position);
        return Some(position);
    }

    if let Some(position) = find_line_completion(board, human) {
        crate::log!("Computer blocks at {}", position);
        return Some(position);
    }

    if board.is_unmarked(CENTER) {
        return Some(CENTER);
    }

    let available_moves = board.unmarked_keys();
    rng.choose(&available_moves).copied()
}
