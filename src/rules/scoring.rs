//! O-S-O pattern scoring
//!
//! A pattern is three consecutive collinear cells reading O-S-O. Only
//! patterns passing through the just-placed cell are counted, so scoring a
//! move costs at most 12 window checks regardless of board size.

use crate::board::{Board, Pos, Symbol};

/// Direction vectors for pattern checking (4 axes)
const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal →
    (1, 0),  // Vertical ↓
    (1, 1),  // Diagonal ↘
    (1, -1), // Diagonal ↙
];

/// The symbols a completed pattern reads, in window order
const PATTERN: [Symbol; 3] = [Symbol::O, Symbol::S, Symbol::O];

/// Count O-S-O patterns that include `pos`.
///
/// For every axis the three length-3 windows containing `pos` (at offset 0, 1
/// or 2) are checked. Each in-bounds matching window counts once; windows are
/// not deduplicated, so a single move can complete several patterns.
pub fn count_patterns(board: &Board, pos: Pos) -> u32 {
    let mut total = 0;

    for &(dr, dc) in &DIRECTIONS {
        for start in -2i32..=0 {
            let r0 = pos.row as i32 + start * dr;
            let c0 = pos.col as i32 + start * dc;
            if window_matches(board, r0, c0, dr, dc) {
                total += 1;
            }
        }
    }

    total
}

/// Check if the window starting at (r0, c0) along (dr, dc) reads O-S-O.
#[inline]
fn window_matches(board: &Board, r0: i32, c0: i32, dr: i32, dc: i32) -> bool {
    // Check bounds for the farthest position first
    if !board.in_bounds(r0, c0) || !board.in_bounds(r0 + 2 * dr, c0 + 2 * dc) {
        return false;
    }

    PATTERN.iter().enumerate().all(|(i, &expected)| {
        let i = i as i32;
        let cell = Pos::new((r0 + i * dr) as usize, (c0 + i * dc) as usize);
        board.get(cell) == Some(expected)
    })
}

/// Check if placing `symbol` at an empty `pos` would score.
///
/// Used by the GUI hover preview; does not touch the board.
pub fn would_score(board: &Board, pos: Pos, symbol: Symbol) -> u32 {
    if !board.is_empty(pos) {
        return 0;
    }
    let mut preview = board.clone();
    preview.set(pos, symbol);
    count_patterns(&preview, pos)
}
