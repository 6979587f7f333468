use once_cell::sync::Lazy;

use super::{Bitboard, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, 1),
    (2, -1),
    (-1, -2),
    (-1, 2),
    (1, 2),
    (1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

pub(crate) const DIAGONAL_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
pub(crate) const ORTHOGONAL_DIRECTIONS: [(isize, isize); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

fn leaper_table(offsets: &[(isize, isize); 8]) -> [Bitboard; 64] {
    let mut table = [Bitboard::EMPTY; 64];
    for (idx, targets) in table.iter_mut().enumerate() {
        let from = Square::from_index(idx);
        for &(dr, dc) in offsets {
            if let Some(to) = from.offset(dr, dc) {
                targets.insert(to);
            }
        }
    }
    table
}

/// Knight destinations per square, already bounds-checked.
pub(crate) static KNIGHT_TARGETS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KNIGHT_OFFSETS));

/// King neighbours per square, already bounds-checked.
pub(crate) static KING_TARGETS: Lazy<[Bitboard; 64]> = Lazy::new(|| leaper_table(&KING_OFFSETS));
