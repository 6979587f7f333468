//! Core chess types.
//!
//! This module contains the fundamental types used by the board:
//! - `PieceType`, `PieceState`, `Piece` and `Color` - pieces and their flags
//! - `Square` - (row, col) board coordinates
//! - `Bitboard` - 64-bit square set
//! - `Move` and `MoveKind` - move representation

mod bitboard;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use moves::{Move, MoveKind};
pub use piece::{Color, Piece, PieceState, PieceType};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;
