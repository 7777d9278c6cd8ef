use chessgame::{Board, ChessError, Color, Game, InvalidMoveReason, Move, Piece, PieceType, Square};

fn sq(s: &str) -> Square {
    s.parse().unwrap()
}

fn mv(s: &str) -> Move {
    s.parse().unwrap()
}

fn game(diagram: &str, side_to_move: Color) -> Game {
    let board: Board = diagram.parse().unwrap();
    Game::from_board(board, side_to_move)
}

#[test]
fn opening_position_has_twenty_white_moves() {
    let g = Game::standard_setup();
    let moves = g.all_valid_moves(Color::White);
    assert_eq!(moves.len(), 20);

    let pawn_moves = moves
        .iter()
        .filter(|m| g.board().piece_at(m.from).map(|p| p.piece_type) == Some(PieceType::Pawn))
        .count();
    assert_eq!(pawn_moves, 16);
}

#[test]
fn lone_king_checked_by_adjacent_queen() {
    let checked = game(
        "........
         ........
         ........
         ........
         ........
         ........
         ....q...
         ....K..k",
        Color::White,
    );
    assert!(checked.is_in_check(Color::White).unwrap());
    // The queen is unprotected, so the king takes it.
    assert!(!checked.is_in_checkmate(Color::White).unwrap());

    let mated = game(
        "........
         ........
         ........
         ........
         ........
         .....k..
         ....q...
         ....K...",
        Color::White,
    );
    assert!(mated.is_in_check(Color::White).unwrap());
    assert!(mated.is_in_checkmate(Color::White).unwrap());
    assert!(!mated.is_in_stalemate(Color::White).unwrap());
}

#[test]
fn minimal_stalemate() {
    let g = game(
        ".......k
         .....Q..
         ......K.
         ........
         ........
         ........
         ........
         ........",
        Color::Black,
    );
    assert!(!g.is_in_check(Color::Black).unwrap());
    assert!(g.is_in_stalemate(Color::Black).unwrap());
    assert!(!g.is_in_checkmate(Color::Black).unwrap());
}

#[test]
fn back_rank_mate_after_a_move() {
    let mut g = game(
        "......k.
         .....ppp
         ........
         ........
         ........
         ........
         ........
         R.....K.",
        Color::White,
    );
    assert!(!g.is_in_check(Color::Black).unwrap());
    g.make_move(&mv("a1a8")).unwrap();
    assert!(g.is_in_checkmate(Color::Black).unwrap());
}

#[test]
fn promotion_choosing_knight() {
    let mut g = game(
        "....k...
         ......P.
         ........
         ........
         ........
         ........
         ........
         ....K...",
        Color::White,
    );
    let moves = g.valid_moves(sq("g7")).unwrap();
    assert_eq!(moves.len(), 4);

    g.make_move(&Move::with_promotion(sq("g7"), sq("g8"), PieceType::Knight))
        .unwrap();
    assert_eq!(
        g.board().piece_at(sq("g8")),
        Some(Piece::new(Color::White, PieceType::Knight))
    );
    assert_eq!(g.board().piece_at(sq("g7")), None);
}

#[test]
fn black_promotes_by_capture() {
    let mut g = game(
        "....k...
         ........
         ........
         ........
         ........
         ........
         .p......
         R...K...",
        Color::Black,
    );
    g.make_move(&mv("b2a1q")).unwrap();
    assert_eq!(
        g.board().piece_at(sq("a1")),
        Some(Piece::new(Color::Black, PieceType::Queen))
    );
    assert!(g.is_in_check(Color::White).unwrap());
}

#[test]
fn illegal_move_keeps_everything() {
    let mut g = game(
        "....k...
         ........
         ........
         .......b
         ........
         ........
         ........
         ...QK...",
        Color::White,
    );
    let before = g.clone();
    // The king may not walk onto the bishop's diagonal.
    let err = g.make_move(&mv("e1e2")).unwrap_err();
    assert_eq!(
        err,
        ChessError::InvalidMove {
            mv: mv("e1e2"),
            reason: InvalidMoveReason::NotValid
        }
    );
    assert_eq!(g, before);
    assert_eq!(g.to_json().unwrap(), before.to_json().unwrap());
}

#[test]
fn saved_game_resumes_identically() {
    let mut g = Game::standard_setup();
    for m in &["e2e4", "e7e5", "g1f3", "b8c6", "f1b5"] {
        g.make_move(&mv(m)).unwrap();
    }
    let restored = Game::from_json(&g.to_json().unwrap()).unwrap();
    assert_eq!(restored, g);
    assert_eq!(restored.side_to_move(), Color::Black);
    assert_eq!(
        restored.all_valid_moves(Color::Black),
        g.all_valid_moves(Color::Black)
    );
}
