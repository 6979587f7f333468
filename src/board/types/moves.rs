//! Move types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::PieceType;
use super::square::Square;
use crate::board::error::{MoveDecodeError, SquareError};

// Move flags (4 bits, values 0-15)
const FLAG_NORMAL: u16 = 0;
const FLAG_CAPTURE: u16 = 1;
const FLAG_EN_PASSANT: u16 = 2;
const FLAG_CASTLE: u16 = 3;
// 4-7 reserved
const FLAG_PROMO_KNIGHT: u16 = 8;
const FLAG_PROMO_BISHOP: u16 = 9;
const FLAG_PROMO_ROOK: u16 = 10;
const FLAG_PROMO_QUEEN: u16 = 11;
const FLAG_PROMO_CAPTURE_KNIGHT: u16 = 12;
const FLAG_PROMO_CAPTURE_BISHOP: u16 = 13;
const FLAG_PROMO_CAPTURE_ROOK: u16 = 14;
const FLAG_PROMO_CAPTURE_QUEEN: u16 = 15;

/// What a move does besides relocating the mover.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    Normal,
    Capture,
    EnPassant,
    Castle,
}

impl MoveKind {
    pub const ALL: [MoveKind; 4] = [
        MoveKind::Normal,
        MoveKind::Capture,
        MoveKind::EnPassant,
        MoveKind::Castle,
    ];

    /// Stable numeric code (0-3).
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            MoveKind::Normal => 0,
            MoveKind::Capture => 1,
            MoveKind::EnPassant => 2,
            MoveKind::Castle => 3,
        }
    }

    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(MoveKind::Normal),
            1 => Some(MoveKind::Capture),
            2 => Some(MoveKind::EnPassant),
            3 => Some(MoveKind::Castle),
            _ => None,
        }
    }

    /// Single-letter tag: N, X, E or C.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            MoveKind::Normal => 'N',
            MoveKind::Capture => 'X',
            MoveKind::EnPassant => 'E',
            MoveKind::Castle => 'C',
        }
    }

    #[must_use]
    pub const fn from_char(c: char) -> Option<Self> {
        match c {
            'N' => Some(MoveKind::Normal),
            'X' => Some(MoveKind::Capture),
            'E' => Some(MoveKind::EnPassant),
            'C' => Some(MoveKind::Castle),
            _ => None,
        }
    }
}

/// Compact 16-bit move representation.
///
/// Encoding:
/// - bits 0-5:   from square (0-63)
/// - bits 6-11:  to square (0-63)
/// - bits 12-15: flags (kind, plus promotion piece for pawn promotions)
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move(u16);

impl Move {
    /// Build a move from caller-supplied squares, rejecting coordinates
    /// off the board.
    pub fn try_new(from: Square, to: Square, kind: MoveKind) -> Result<Self, SquareError> {
        Ok(Move::new(from.validate()?, to.validate()?, kind))
    }

    /// Checked counterpart of [`Move::promotion`].
    pub fn try_promotion(
        from: Square,
        to: Square,
        capture: bool,
        piece: PieceType,
    ) -> Result<Self, SquareError> {
        Ok(Move::promotion(from.validate()?, to.validate()?, capture, piece))
    }

    // The unchecked constructors below pack `as_index()` straight into six
    // bits each, so callers must pass on-board squares.

    #[inline]
    #[must_use]
    pub(crate) const fn new(from: Square, to: Square, kind: MoveKind) -> Self {
        Move::with_flag(from, to, kind.code() as u16)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn normal(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_NORMAL)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn capture(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CAPTURE)
    }

    #[inline]
    #[must_use]
    pub(crate) const fn en_passant(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_EN_PASSANT)
    }

    /// Two-square king move; the rook is implied by the destination.
    #[inline]
    #[must_use]
    pub(crate) const fn castle(from: Square, to: Square) -> Self {
        Move::with_flag(from, to, FLAG_CASTLE)
    }

    /// Create a promotion move. Pawn and king fall back to a queen.
    #[inline]
    #[must_use]
    pub(crate) const fn promotion(
        from: Square,
        to: Square,
        capture: bool,
        piece: PieceType,
    ) -> Self {
        let base = match piece {
            PieceType::Knight => FLAG_PROMO_KNIGHT,
            PieceType::Bishop => FLAG_PROMO_BISHOP,
            PieceType::Rook => FLAG_PROMO_ROOK,
            _ => FLAG_PROMO_QUEEN,
        };
        let flag = if capture { base + 4 } else { base };
        Move::with_flag(from, to, flag)
    }

    #[inline]
    const fn with_flag(from: Square, to: Square, flag: u16) -> Self {
        let from_idx = from.as_index() as u16;
        let to_idx = to.as_index() as u16;
        Move(from_idx | (to_idx << 6) | (flag << 12))
    }

    #[inline]
    #[must_use]
    pub const fn from(self) -> Square {
        Square::from_index((self.0 & 0x3F) as usize)
    }

    #[inline]
    #[must_use]
    pub const fn to(self) -> Square {
        Square::from_index(((self.0 >> 6) & 0x3F) as usize)
    }

    #[inline]
    const fn flag(self) -> u16 {
        self.0 >> 12
    }

    #[must_use]
    pub const fn kind(self) -> MoveKind {
        match self.flag() {
            FLAG_CAPTURE => MoveKind::Capture,
            FLAG_EN_PASSANT => MoveKind::EnPassant,
            FLAG_CASTLE => MoveKind::Castle,
            f if f >= FLAG_PROMO_CAPTURE_KNIGHT => MoveKind::Capture,
            _ => MoveKind::Normal,
        }
    }

    /// Returns true if this move removes an enemy piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(self) -> bool {
        matches!(self.kind(), MoveKind::Capture | MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(self) -> bool {
        self.flag() == FLAG_EN_PASSANT
    }

    #[inline]
    #[must_use]
    pub const fn is_castle(self) -> bool {
        self.flag() == FLAG_CASTLE
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(self) -> bool {
        self.flag() >= FLAG_PROMO_KNIGHT
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promotion_piece(self) -> Option<PieceType> {
        match self.flag() {
            FLAG_PROMO_KNIGHT | FLAG_PROMO_CAPTURE_KNIGHT => Some(PieceType::Knight),
            FLAG_PROMO_BISHOP | FLAG_PROMO_CAPTURE_BISHOP => Some(PieceType::Bishop),
            FLAG_PROMO_ROOK | FLAG_PROMO_CAPTURE_ROOK => Some(PieceType::Rook),
            FLAG_PROMO_QUEEN | FLAG_PROMO_CAPTURE_QUEEN => Some(PieceType::Queen),
            _ => None,
        }
    }

    /// Get the raw 16-bit value (for storage)
    #[inline]
    #[must_use]
    pub const fn as_u16(self) -> u16 {
        self.0
    }
}

impl TryFrom<u16> for Move {
    type Error = MoveDecodeError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        let flag = value >> 12;
        if (4..FLAG_PROMO_KNIGHT).contains(&flag) {
            return Err(MoveDecodeError::InvalidFlag { flag });
        }
        Ok(Move(value))
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{} {}", self.from(), self.to(), self.kind().to_char())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from(), self.to())?;
        if let Some(promo) = self.promotion_piece() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}
