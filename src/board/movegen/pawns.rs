use super::super::{Bitboard, Board, Color, Move, PieceType, Square, PROMOTION_PIECES};

impl Board {
    pub(crate) fn generate_pawn_moves(
        &self,
        from: Square,
        color: Color,
        has_moved: bool,
        moves: &mut Vec<Move>,
        attacks: &mut Bitboard,
    ) {
        let dir = color.forward();

        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                push_pawn_move(from, one, false, color, moves);
                if !has_moved {
                    if let Some(two) = from.offset(2 * dir, 0) {
                        if self.is_empty(two) {
                            moves.push(Move::normal(from, two));
                        }
                    }
                }
            }
        }

        for dc in [-1, 1] {
            let Some(target) = from.offset(dir, dc) else {
                continue;
            };
            // Diagonals count as attacked whether or not anything stands there.
            attacks.insert(target);
            if let Some(victim) = self.cell(target) {
                if victim.color() != color && victim.piece_type() != PieceType::King {
                    push_pawn_move(from, target, true, color, moves);
                }
            }
        }

        for dc in [-1, 1] {
            let (Some(side), Some(landing)) = (from.offset(0, dc), from.offset(dir, dc)) else {
                continue;
            };
            let Some(neighbour) = self.cell(side) else {
                continue;
            };
            if neighbour.color() != color && neighbour.just_double_moved() && self.is_empty(landing)
            {
                moves.push(Move::en_passant(from, landing));
            }
        }
    }
}

fn push_pawn_move(from: Square, to: Square, capture: bool, color: Color, moves: &mut Vec<Move>) {
    if to.0 == color.promotion_row() {
        for piece in PROMOTION_PIECES {
            moves.push(Move::promotion(from, to, capture, piece));
        }
    } else if capture {
        moves.push(Move::capture(from, to));
    } else {
        moves.push(Move::normal(from, to));
    }
}
