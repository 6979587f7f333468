use super::super::attack_tables::{KING_TARGETS, KNIGHT_TARGETS};
use super::super::{Bitboard, Board, Color, Move, PieceType, Square};

impl Board {
    pub(crate) fn generate_knight_moves(
        &self,
        from: Square,
        color: Color,
        moves: &mut Vec<Move>,
        attacks: &mut Bitboard,
    ) {
        self.generate_leaper_moves(from, color, KNIGHT_TARGETS[from.as_index()], moves, attacks);
    }

    /// Adjacent king steps. Castling is added separately once both attack
    /// maps are known.
    pub(crate) fn generate_king_steps(
        &self,
        from: Square,
        color: Color,
        moves: &mut Vec<Move>,
        attacks: &mut Bitboard,
    ) {
        self.generate_leaper_moves(from, color, KING_TARGETS[from.as_index()], moves, attacks);
    }

    fn generate_leaper_moves(
        &self,
        from: Square,
        color: Color,
        targets: Bitboard,
        moves: &mut Vec<Move>,
        attacks: &mut Bitboard,
    ) {
        for to in targets.iter() {
            // Own-occupied targets are defended, so they are marked too.
            attacks.insert(to);
            match self.cell(to) {
                None => moves.push(Move::normal(from, to)),
                Some(p) if p.color() != color && p.piece_type() != PieceType::King => {
                    moves.push(Move::capture(from, to));
                }
                Some(_) => {}
            }
        }
    }
}
