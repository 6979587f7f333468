//! Piece, piece state and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::moves::Move;
use super::square::Square;

/// Chess piece types.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PieceType {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceType {
    /// All piece types in index order
    pub const ALL: [PieceType; 6] = [
        PieceType::Pawn,
        PieceType::Knight,
        PieceType::Bishop,
        PieceType::Rook,
        PieceType::Queen,
        PieceType::King,
    ];

    /// Parse a piece from a character (p, n, b, r, q, k, any case)
    #[must_use]
    pub fn from_char(c: char) -> Option<PieceType> {
        match c.to_ascii_lowercase() {
            'p' => Some(PieceType::Pawn),
            'n' => Some(PieceType::Knight),
            'b' => Some(PieceType::Bishop),
            'r' => Some(PieceType::Rook),
            'q' => Some(PieceType::Queen),
            'k' => Some(PieceType::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceType::Pawn => 'p',
            PieceType::Knight => 'n',
            PieceType::Bishop => 'b',
            PieceType::Rook => 'r',
            PieceType::Queen => 'q',
            PieceType::King => 'k',
        }
    }

    /// Static material worth. The king is priceless and scores 0.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            PieceType::Pawn => 1,
            PieceType::Knight | PieceType::Bishop => 3,
            PieceType::Rook => 5,
            PieceType::Queen => 9,
            PieceType::King => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion_target(self) -> bool {
        matches!(
            self,
            PieceType::Knight | PieceType::Bishop | PieceType::Rook | PieceType::Queen
        )
    }
}

/// Promotion piece choices in order of typical preference (queen first)
pub(crate) const PROMOTION_PIECES: [PieceType; 4] = [
    PieceType::Queen,
    PieceType::Rook,
    PieceType::Bishop,
    PieceType::Knight,
];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors in index order (White=0, Black=1)
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    #[inline]
    #[must_use]
    pub const fn from_is_white(is_white: bool) -> Self {
        if is_white {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_white(self) -> bool {
        matches!(self, Color::White)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 1,
        }
    }

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub const fn forward(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Back row for this color (7 for White, 0 for Black)
    #[inline]
    #[must_use]
    pub const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    #[inline]
    #[must_use]
    pub const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    #[inline]
    #[must_use]
    pub const fn promotion_row(self) -> usize {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Per-kind data of a live piece.
///
/// This is also the unit of flag snapshotting: copying the state before a
/// move and writing it back afterwards restores every move-tracking flag.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum PieceState {
    Pawn {
        has_moved: bool,
        just_double_moved: bool,
    },
    Knight,
    Bishop,
    Rook {
        has_moved: bool,
    },
    Queen,
    King {
        has_moved: bool,
    },
}

impl PieceState {
    /// Fresh state for a piece that has not moved yet.
    #[must_use]
    pub const fn unmoved(piece_type: PieceType) -> Self {
        match piece_type {
            PieceType::Pawn => PieceState::Pawn {
                has_moved: false,
                just_double_moved: false,
            },
            PieceType::Knight => PieceState::Knight,
            PieceType::Bishop => PieceState::Bishop,
            PieceType::Rook => PieceState::Rook { has_moved: false },
            PieceType::Queen => PieceState::Queen,
            PieceType::King => PieceState::King { has_moved: false },
        }
    }

    #[must_use]
    pub const fn piece_type(self) -> PieceType {
        match self {
            PieceState::Pawn { .. } => PieceType::Pawn,
            PieceState::Knight => PieceType::Knight,
            PieceState::Bishop => PieceType::Bishop,
            PieceState::Rook { .. } => PieceType::Rook,
            PieceState::Queen => PieceType::Queen,
            PieceState::King { .. } => PieceType::King,
        }
    }
}

/// A live piece on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub(crate) color: Color,
    pub(crate) location: Square,
    pub(crate) state: PieceState,
    pub(crate) moves: Vec<Move>,
}

impl Piece {
    #[must_use]
    pub fn new(color: Color, piece_type: PieceType, location: Square) -> Self {
        Piece {
            color,
            location,
            state: PieceState::unmoved(piece_type),
            moves: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn color(&self) -> Color {
        self.color
    }

    #[inline]
    #[must_use]
    pub const fn piece_type(&self) -> PieceType {
        self.state.piece_type()
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> PieceState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> i32 {
        self.piece_type().value()
    }

    #[inline]
    #[must_use]
    pub const fn location(&self) -> Square {
        self.location
    }

    /// Cached move list. Legal only right after a full board update.
    #[must_use]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// `Some(flag)` for kinds that track movement (pawn, rook, king).
    #[must_use]
    pub const fn has_moved(&self) -> Option<bool> {
        match self.state {
            PieceState::Pawn { has_moved, .. }
            | PieceState::Rook { has_moved }
            | PieceState::King { has_moved } => Some(has_moved),
            _ => None,
        }
    }

    #[must_use]
    pub const fn just_double_moved(&self) -> bool {
        matches!(
            self.state,
            PieceState::Pawn {
                just_double_moved: true,
                ..
            }
        )
    }

    pub(crate) fn is_unmoved(&self, piece_type: PieceType) -> bool {
        self.piece_type() == piece_type && self.has_moved() == Some(false)
    }

    /// Force the moved flag, used when setting up positions.
    pub(crate) fn mark_moved(&mut self) {
        match &mut self.state {
            PieceState::Pawn { has_moved, .. }
            | PieceState::Rook { has_moved }
            | PieceState::King { has_moved } => *has_moved = true,
            _ => {}
        }
    }

    pub(crate) fn clear_double_move(&mut self) {
        if let PieceState::Pawn {
            just_double_moved, ..
        } = &mut self.state
        {
            *just_double_moved = false;
        }
    }

    /// Relocate the piece and advance its move-tracking flags.
    pub(crate) fn update_location(&mut self, to: Square) {
        let from = self.location;
        self.location = to;
        match &mut self.state {
            PieceState::Pawn {
                has_moved,
                just_double_moved,
            } => {
                *has_moved = true;
                *just_double_moved = from.0.abs_diff(to.0) == 2;
            }
            PieceState::Rook { has_moved } | PieceState::King { has_moved } => {
                *has_moved = true;
            }
            _ => {}
        }
    }

    /// Replace a pawn by the promotion piece, keeping color and location.
    pub(crate) fn promote(&mut self, piece_type: PieceType) {
        let mut state = PieceState::unmoved(piece_type);
        if let PieceState::Rook { has_moved } = &mut state {
            *has_moved = true;
        }
        self.state = state;
    }
}
