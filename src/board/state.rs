use super::error::SquareError;
use super::{Bitboard, BitboardIter, Color, Piece, PieceType, Square};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    /// Sole owner of every piece. `None` is an empty cell.
    pub(crate) grid: [[Option<Piece>; 8]; 8],
    /// Occupancy per color, kept in step with `grid` by `place`/`take` only.
    pub(crate) occupied: [Bitboard; 2],
    /// Squares attacked by each color in the most recent generation pass.
    pub(crate) attacks: [Bitboard; 2],
    pub(crate) kings: [Square; 2],
    pub(crate) side_to_move: Color,
    /// Piece removed by the last `forward`, consumed by the matching `reverse`.
    pub(crate) last_captured: Option<Piece>,
    /// Set by any mutation, cleared by a full `update_board`.
    pub(crate) dirty: bool,
}

const BACK_ROW: [PieceType; 8] = [
    PieceType::Rook,
    PieceType::Knight,
    PieceType::Bishop,
    PieceType::Queen,
    PieceType::King,
    PieceType::Bishop,
    PieceType::Knight,
    PieceType::Rook,
];

impl Board {
    /// Standard starting position, White to move, move lists generated.
    #[must_use]
    pub fn new() -> Self {
        let mut board = Board::empty();
        for color in Color::BOTH {
            for (col, &piece_type) in BACK_ROW.iter().enumerate() {
                board.place(Piece::new(color, piece_type, Square(color.back_row(), col)));
            }
            for col in 0..8 {
                board.place(Piece::new(
                    color,
                    PieceType::Pawn,
                    Square(color.pawn_start_row(), col),
                ));
            }
        }
        board.update_board();
        board
    }

    pub(crate) fn empty() -> Self {
        Board {
            grid: Default::default(),
            occupied: [Bitboard::EMPTY; 2],
            attacks: [Bitboard::EMPTY; 2],
            kings: [
                Square(Color::White.back_row(), 4),
                Square(Color::Black.back_row(), 4),
            ],
            side_to_move: Color::White,
            last_captured: None,
            dirty: true,
        }
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// The piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Result<Option<&Piece>, SquareError> {
        let sq = sq.validate()?;
        Ok(self.cell(sq))
    }

    /// Squares attacked by `color` as of the last generation pass.
    #[must_use]
    pub fn attacks(&self, color: Color) -> Bitboard {
        self.attacks[color.index()]
    }

    #[must_use]
    pub fn king_square(&self, color: Color) -> Square {
        self.kings[color.index()]
    }

    /// Locations of every live piece of `color`, derived from the grid.
    #[must_use]
    pub fn squares_of(&self, color: Color) -> BitboardIter {
        self.occupied[color.index()].iter()
    }

    /// Sum of static material values for `color`.
    #[must_use]
    pub fn material(&self, color: Color) -> i32 {
        self.squares_of(color)
            .filter_map(|sq| self.cell(sq))
            .map(Piece::value)
            .sum()
    }

    #[inline]
    pub(crate) fn cell(&self, sq: Square) -> Option<&Piece> {
        self.grid[sq.0][sq.1].as_ref()
    }

    #[inline]
    pub(crate) fn cell_mut(&mut self, sq: Square) -> Option<&mut Piece> {
        self.grid[sq.0][sq.1].as_mut()
    }

    #[inline]
    pub(crate) fn is_empty(&self, sq: Square) -> bool {
        self.grid[sq.0][sq.1].is_none()
    }

    #[inline]
    pub(crate) fn color_at(&self, sq: Square) -> Option<Color> {
        self.cell(sq).map(Piece::color)
    }

    /// Put `piece` on its own location. The target cell must be empty.
    pub(crate) fn place(&mut self, piece: Piece) {
        let sq = piece.location;
        debug_assert!(self.is_empty(sq), "place onto occupied square {sq}");
        let c_idx = piece.color.index();
        self.occupied[c_idx].insert(sq);
        if piece.piece_type() == PieceType::King {
            self.kings[c_idx] = sq;
        }
        self.grid[sq.0][sq.1] = Some(piece);
    }

    /// Remove and return whatever stands on `sq`.
    pub(crate) fn take(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.grid[sq.0][sq.1].take()?;
        self.occupied[piece.color.index()].remove(sq);
        Some(piece)
    }

    /// Panics if grid, occupancy, piece locations and king locators disagree.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        let mut occupied = [Bitboard::EMPTY; 2];
        let mut king_count = [0usize; 2];
        for row in 0..8 {
            for col in 0..8 {
                let sq = Square(row, col);
                if let Some(piece) = self.cell(sq) {
                    assert_eq!(piece.location, sq, "stale location for piece on {sq}");
                    occupied[piece.color.index()].insert(sq);
                    if piece.piece_type() == PieceType::King {
                        king_count[piece.color.index()] += 1;
                        assert_eq!(self.kings[piece.color.index()], sq, "stale king locator");
                    }
                }
            }
        }
        assert_eq!(occupied, self.occupied, "occupancy out of sync with grid");
        assert_eq!(king_count, [1, 1], "expected exactly one king per color");
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
