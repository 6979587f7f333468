//! Board module tests.
//!
//! Tests are organized into separate files by category:
//! - `movegen.rs` - Per-piece pseudo-legal generation and attack marking
//! - `make_unmake.rs` - Forward/reverse exactness over real games
//! - `scenarios.rs` - Scripted games: en passant, castling, mates, promotion
//! - `perft.rs` - Node counts for reference positions
//! - `proptest.rs` - Property-based tests over random playouts

mod scenarios;

use crate::board::{Board, BoardBuilder, Color, PieceType, Square};

/// Build a position from the piece-placement field of a FEN record
/// (rank 8 first, upper-case White). Pieces off their home squares are
/// marked moved by the builder.
pub(super) fn position(placement: &str, side: Color, double_moved: Option<Square>) -> Board {
    let mut builder = BoardBuilder::new().side_to_move(side);
    for (row, rank) in placement.split('/').enumerate() {
        let mut col = 0;
        for ch in rank.chars() {
            if let Some(skip) = ch.to_digit(10) {
                col += skip as usize;
                continue;
            }
            let piece_type = PieceType::from_char(ch).expect("bad piece letter");
            let color = Color::from_is_white(ch.is_ascii_uppercase());
            builder = builder.piece(Square(row, col), color, piece_type);
            col += 1;
        }
    }
    if let Some(sq) = double_moved {
        builder = builder.double_moved(sq);
    }
    builder.build().expect("test position must be valid")
}

/// Parse "e2" style notation, panicking on typos.
pub(super) fn sq(name: &str) -> Square {
    name.parse().expect("bad square in test")
}

/// Play a sequence of "e2e4" moves, panicking on the first illegal one.
pub(super) fn play(board: &mut Board, moves: &[&str]) {
    for mv in moves {
        let (from, to) = mv.split_at(2);
        board
            .make_move(sq(from), sq(to))
            .unwrap_or_else(|e| panic!("{mv} rejected: {e}"));
    }
}
