use super::super::attack_tables::{DIAGONAL_DIRECTIONS, ORTHOGONAL_DIRECTIONS};
use super::super::{Bitboard, Board, Color, Move, PieceType, Square};

/// Type of sliding piece for move generation
#[derive(Clone, Copy)]
pub(crate) enum SliderType {
    Bishop,
    Rook,
    Queen,
}

impl SliderType {
    fn directions(self) -> &'static [(isize, isize)] {
        const QUEEN: [(isize, isize); 8] = [
            DIAGONAL_DIRECTIONS[0],
            DIAGONAL_DIRECTIONS[1],
            DIAGONAL_DIRECTIONS[2],
            DIAGONAL_DIRECTIONS[3],
            ORTHOGONAL_DIRECTIONS[0],
            ORTHOGONAL_DIRECTIONS[1],
            ORTHOGONAL_DIRECTIONS[2],
            ORTHOGONAL_DIRECTIONS[3],
        ];
        match self {
            SliderType::Bishop => &DIAGONAL_DIRECTIONS,
            SliderType::Rook => &ORTHOGONAL_DIRECTIONS,
            SliderType::Queen => &QUEEN,
        }
    }
}

impl Board {
    /// Ray-cast along each direction of `slider`.
    ///
    /// A ray stops at the first occupied square, which is always marked
    /// attacked and is a capture only when it holds an enemy. The enemy king
    /// does not block attacks: squares behind it stay marked so the king
    /// cannot retreat along the checking line.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        color: Color,
        slider: SliderType,
        moves: &mut Vec<Move>,
        attacks: &mut Bitboard,
    ) {
        for &(dr, dc) in slider.directions() {
            let mut cur = from;
            let mut through_king = false;
            while let Some(next) = cur.offset(dr, dc) {
                cur = next;
                attacks.insert(next);
                let occupant = self.cell(next);
                if through_king {
                    if occupant.is_some() {
                        break;
                    }
                    continue;
                }
                match occupant {
                    None => moves.push(Move::normal(from, next)),
                    Some(p) if p.color() != color => {
                        if p.piece_type() == PieceType::King {
                            through_king = true;
                            continue;
                        }
                        moves.push(Move::capture(from, next));
                        break;
                    }
                    Some(_) => break,
                }
            }
        }
    }
}
