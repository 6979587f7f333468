//! Scripted games exercising the public controller surface.

use super::{play, position, sq};
use crate::board::{
    Board, BoardBuilder, Color, GameStatus, Move, MoveError, MoveKind, PieceType, Square,
};

#[test]
fn test_scenario_a_double_push_from_start() {
    let mut board = Board::new();
    assert_eq!(board.valid_move(sq("e2"), sq("e4")), Ok(true));
    let mv = board.make_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(mv.kind(), MoveKind::Normal);
    let pawn = board.piece_at(sq("e4")).unwrap().unwrap();
    assert_eq!(pawn.has_moved(), Some(true));
    assert!(pawn.just_double_moved());
    assert!(board.piece_at(sq("e2")).unwrap().is_none());
}

fn en_passant_moves(board: &mut Board, color: Color) -> usize {
    board
        .all_legal_moves(color)
        .iter()
        .filter(|m| m.kind() == MoveKind::EnPassant)
        .count()
}

#[test]
fn test_scenario_b_en_passant_window() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "a7a6", "e4e5"]);
    // One ply too early: d7 has not moved yet.
    assert_eq!(en_passant_moves(&mut board, Color::White), 0);

    play(&mut board, &["d7d5"]);
    assert_eq!(en_passant_moves(&mut board, Color::White), 1);
    assert_eq!(board.valid_move(sq("e5"), sq("d6")), Ok(true));

    play(&mut board, &["a2a3", "h7h6"]);
    assert_eq!(en_passant_moves(&mut board, Color::White), 0);
    assert!(!board.piece_at(sq("d5")).unwrap().unwrap().just_double_moved());
    assert_eq!(
        board.make_move(sq("e5"), sq("d6")),
        Err(MoveError::IllegalMove {
            from: sq("e5"),
            to: sq("d6"),
        })
    );
}

#[test]
fn test_en_passant_capture_removes_pawn() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "a7a6", "e4e5", "d7d5"]);
    let mv = board.make_move(sq("e5"), sq("d6")).unwrap();
    assert_eq!(mv.kind(), MoveKind::EnPassant);
    assert!(board.piece_at(sq("d5")).unwrap().is_none());
    assert_eq!(board.material(Color::Black), 38);
    board.assert_consistent();
}

#[test]
fn test_black_can_capture_en_passant() {
    let mut board = Board::new();
    play(&mut board, &["a2a3", "d7d5", "a3a4", "d5d4", "e2e4"]);
    assert_eq!(en_passant_moves(&mut board, Color::Black), 1);
    let mv = board.make_move(sq("d4"), sq("e3")).unwrap();
    assert!(mv.is_en_passant());
    assert!(board.piece_at(sq("e4")).unwrap().is_none());
}

#[test]
fn test_scenario_c_fools_mate() {
    let mut board = Board::new();
    play(&mut board, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert!(board.is_check(Color::White));
    assert!(board.all_legal_moves(Color::White).is_empty());
    assert!(board.is_checkmate(Color::White));
    assert!(!board.is_stalemate(Color::White));
    assert_eq!(board.game_status(), GameStatus::Checkmate);
    assert!(board.game_status().is_over());
}

#[test]
fn test_scenario_d_both_castles_available() {
    let mut board = BoardBuilder::starting_position()
        .clear(sq("b1"))
        .clear(sq("c1"))
        .clear(sq("d1"))
        .clear(sq("f1"))
        .clear(sq("g1"))
        .build()
        .unwrap();
    let mut castles: Vec<_> = board
        .castle_options(Color::White)
        .iter()
        .map(|m| m.to())
        .collect();
    castles.sort_by_key(|s| s.as_index());
    assert_eq!(castles, vec![sq("c1"), sq("g1")]);

    let mv = board.make_move(sq("e1"), sq("g1")).unwrap();
    assert!(mv.is_castle());
    let rook = board.piece_at(sq("f1")).unwrap().unwrap();
    assert_eq!(rook.piece_type(), PieceType::Rook);
    assert_eq!(rook.has_moved(), Some(true));
    assert!(board.piece_at(sq("h1")).unwrap().is_none());
    assert_eq!(board.king_square(Color::White), sq("g1"));
}

#[test]
fn test_queenside_castle_moves_rook() {
    let mut board = position("r3k2r/8/8/8/8/8/8/R3K2R", Color::Black, None);
    board.make_move(sq("e8"), sq("c8")).unwrap();
    assert_eq!(
        board.piece_at(sq("d8")).unwrap().unwrap().piece_type(),
        PieceType::Rook
    );
    assert!(board.piece_at(sq("a8")).unwrap().is_none());
    assert_eq!(board.king_square(Color::Black), sq("c8"));
}

#[test]
fn test_no_castle_after_king_moved_back() {
    let mut board = position("r3k2r/8/8/8/8/8/8/R3K2R", Color::White, None);
    play(&mut board, &["e1e2", "a8b8", "e2e1", "b8a8"]);
    assert!(board.castle_options(Color::White).is_empty());
    assert_eq!(board.castle_options(Color::Black).len(), 1);
}

#[test]
fn test_no_castle_with_moved_rook() {
    let board = BoardBuilder::new()
        .piece(sq("e1"), Color::White, PieceType::King)
        .piece(sq("h1"), Color::White, PieceType::Rook)
        .piece(sq("a1"), Color::White, PieceType::Rook)
        .moved(sq("h1"))
        .piece(sq("e8"), Color::Black, PieceType::King);
    let mut board = board.build().unwrap();
    let castles = board.castle_options(Color::White);
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to(), sq("c1"));
}

#[test]
fn test_no_castle_through_occupied_square() {
    let mut board = position("4k3/8/8/8/8/8/8/RN2K1NR", Color::White, None);
    assert!(board.castle_options(Color::White).is_empty());
}

#[test]
fn test_no_castle_through_attacked_square() {
    // Black rook covers f1, so only the queenside is open.
    let mut board = position("4kr2/8/8/8/8/8/8/R3K2R", Color::White, None);
    let castles = board.castle_options(Color::White);
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to(), sq("c1"));

    // b1 may be attacked: the king never crosses it.
    let mut board = position("1r2k3/8/8/8/8/8/8/R3K2R", Color::White, None);
    assert_eq!(board.castle_options(Color::White).len(), 2);
}

#[test]
fn test_no_castle_onto_attacked_square() {
    // Knight on h3 covers g1 but not f1.
    let mut board = position("4k3/8/8/8/8/7n/8/R3K2R", Color::White, None);
    let castles = board.castle_options(Color::White);
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to(), sq("c1"));
    assert_eq!(board.valid_move(sq("e1"), sq("f1")), Ok(true));

    // Knight on a2 covers c1 but not d1.
    let mut board = position("4k3/8/8/8/8/8/n7/R3K2R", Color::White, None);
    let castles = board.castle_options(Color::White);
    assert_eq!(castles.len(), 1);
    assert_eq!(castles[0].to(), sq("g1"));
    assert_eq!(board.valid_move(sq("e1"), sq("d1")), Ok(true));
}

#[test]
fn test_no_castle_out_of_check() {
    let mut board = position("4k3/8/8/8/8/8/8/R3K2R", Color::White, None);
    assert_eq!(board.castle_options(Color::White).len(), 2);
    let mut board = position("4r1k1/8/8/8/8/8/8/R3K2R", Color::White, None);
    assert!(board.is_check(Color::White));
    assert!(board.castle_options(Color::White).is_empty());
}

#[test]
fn test_pinned_knight_cannot_move() {
    let mut board = Board::new();
    play(&mut board, &["d2d4", "e7e5", "b1c3", "f8b4"]);
    assert!(!board.is_check(Color::White));
    assert!(board.legal_moves(sq("c3")).unwrap().is_empty());
    assert_eq!(board.valid_move(sq("c3"), sq("d5")), Ok(false));
    assert_eq!(
        board.causes_check(Move::normal(sq("c3"), sq("d5"))),
        Ok(true)
    );
}

#[test]
fn test_only_check_evasions_allowed() {
    let mut board = Board::new();
    play(&mut board, &["e2e4", "f7f6", "d1h5"]);
    assert_eq!(board.game_status(), GameStatus::Check);
    let mut replies: Vec<String> = board
        .all_legal_moves(Color::Black)
        .iter()
        .map(|m| m.to_string())
        .collect();
    replies.sort();
    assert_eq!(replies, vec!["g7g6"]);
}

#[test]
fn test_stalemate_detected() {
    let mut board = position("k7/8/1Q6/8/8/8/8/7K", Color::Black, None);
    assert!(!board.is_check(Color::Black));
    assert!(board.is_stalemate(Color::Black));
    assert!(!board.is_checkmate(Color::Black));
    assert_eq!(board.game_status(), GameStatus::Stalemate);
}

#[test]
fn test_back_rank_mate() {
    let mut board = position("6k1/5ppp/8/8/8/8/8/R5K1", Color::White, None);
    board.make_move(sq("a1"), sq("a8")).unwrap();
    assert!(board.is_checkmate(Color::Black));
}

#[test]
fn test_promotion_defaults_to_queen() {
    let mut board = position("7k/P7/8/8/8/8/8/K7", Color::White, None);
    let mv = board.make_move(sq("a7"), sq("a8")).unwrap();
    assert_eq!(mv.promotion_piece(), Some(PieceType::Queen));
    let queen = board.piece_at(sq("a8")).unwrap().unwrap();
    assert_eq!(queen.piece_type(), PieceType::Queen);
    assert_eq!(board.material(Color::White), 9);
    assert!(board.is_check(Color::Black));
}

#[test]
fn test_underpromotion_to_knight() {
    let mut board = position("7k/P7/8/8/8/8/8/K7", Color::White, None);
    let mv = board
        .make_move_promoting(sq("a7"), sq("a8"), PieceType::Knight)
        .unwrap();
    assert_eq!(mv.promotion_piece(), Some(PieceType::Knight));
    assert_eq!(
        board.piece_at(sq("a8")).unwrap().unwrap().piece_type(),
        PieceType::Knight
    );
    assert_eq!(board.game_status(), GameStatus::Ongoing);
}

#[test]
fn test_promoted_rook_cannot_castle() {
    let mut board = position("4k3/P7/8/8/8/8/8/4K3", Color::White, None);
    board
        .make_move_promoting(sq("a7"), sq("a8"), PieceType::Rook)
        .unwrap();
    let rook = board.piece_at(sq("a8")).unwrap().unwrap();
    assert_eq!(rook.has_moved(), Some(true));
}

#[test]
fn test_rejections_leave_board_unchanged() {
    let mut board = Board::new();
    let before = board.clone();
    assert!(board.make_move(sq("e2"), sq("e5")).is_err());
    assert!(board.make_move(sq("e7"), sq("e5")).is_err());
    assert!(matches!(
        board.make_move(sq("e2"), Square(9, 0)),
        Err(MoveError::InvalidSquare(_))
    ));
    assert_eq!(board, before);
}
