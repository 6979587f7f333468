//! Pseudo-legal move generation and attack-map accumulation.
//!
//! Generators never look at whether a move exposes the mover's own king;
//! that is left to the check trimmer.

mod kings;
mod knights;
mod pawns;
mod sliders;

pub(crate) use kings::castle_rook_cols;
use sliders::SliderType;

use super::error::MoveError;
use super::{Bitboard, Board, Color, Move, PieceState, Square};

impl Board {
    /// Append the pseudo-legal moves of the piece on `from` to `moves` and
    /// mark every square it attacks. Castling is not included.
    pub(crate) fn generate_piece(&self, from: Square, moves: &mut Vec<Move>, attacks: &mut Bitboard) {
        let Some(piece) = self.cell(from) else {
            return;
        };
        let color = piece.color();
        match piece.state() {
            PieceState::Pawn { has_moved, .. } => {
                self.generate_pawn_moves(from, color, has_moved, moves, attacks);
            }
            PieceState::Knight => self.generate_knight_moves(from, color, moves, attacks),
            PieceState::Bishop => {
                self.generate_slider_moves(from, color, SliderType::Bishop, moves, attacks);
            }
            PieceState::Rook { .. } => {
                self.generate_slider_moves(from, color, SliderType::Rook, moves, attacks);
            }
            PieceState::Queen => {
                self.generate_slider_moves(from, color, SliderType::Queen, moves, attacks);
            }
            PieceState::King { .. } => self.generate_king_steps(from, color, moves, attacks),
        }
    }

    /// Recompute the full attack map of `color` against the current grid,
    /// leaving cached move lists and stored bitboards alone.
    pub(crate) fn attack_map(&self, color: Color) -> Bitboard {
        let mut attacks = Bitboard::EMPTY;
        let mut scratch = Vec::with_capacity(32);
        for sq in self.occupied[color.index()].iter() {
            scratch.clear();
            self.generate_piece(sq, &mut scratch, &mut attacks);
        }
        attacks
    }

    /// Pseudo-legal moves of the piece on `from`, including castling.
    pub(crate) fn pseudo_moves(&self, from: Square) -> Vec<Move> {
        let mut moves = Vec::new();
        let mut attacks = Bitboard::EMPTY;
        self.generate_piece(from, &mut moves, &mut attacks);
        if let Some(color) = self.color_at(from) {
            if from == self.kings[color.index()] {
                moves.extend(self.castle_moves(color));
            }
        }
        moves
    }

    /// Rebuild every piece's candidate list and both attack maps from scratch.
    pub(crate) fn regenerate_pseudo_moves(&mut self) {
        let mut attacks = [Bitboard::EMPTY; 2];
        for color in Color::BOTH {
            for sq in self.occupied[color.index()].iter() {
                let Some(piece) = self.cell_mut(sq) else {
                    continue;
                };
                let mut moves = std::mem::take(&mut piece.moves);
                moves.clear();
                self.generate_piece(sq, &mut moves, &mut attacks[color.index()]);
                if let Some(piece) = self.cell_mut(sq) {
                    piece.moves = moves;
                }
            }
        }
        self.attacks = attacks;

        for color in Color::BOTH {
            let castles = self.castle_moves(color);
            let king_sq = self.kings[color.index()];
            if let Some(king) = self.cell_mut(king_sq) {
                king.moves.extend(castles);
            }
        }
    }

    /// Regenerate the pseudo-legal list of the piece on `at` and OR its
    /// attacks into its color's bitboard.
    ///
    /// The list is untrimmed until the next [`Board::update_board`], so the
    /// board is marked dirty.
    pub fn generate_moves(&mut self, at: Square) -> Result<&[Move], MoveError> {
        let at = at.validate()?;
        let color = self
            .color_at(at)
            .ok_or(MoveError::EmptySquare { square: at })?;

        let moves = self.pseudo_moves(at);
        let mut attacks = self.attacks[color.index()];
        self.generate_piece(at, &mut Vec::new(), &mut attacks);
        self.attacks[color.index()] = attacks;
        self.dirty = true;

        let piece = self
            .cell_mut(at)
            .ok_or(MoveError::EmptySquare { square: at })?;
        piece.moves = moves;
        Ok(&piece.moves)
    }
}
