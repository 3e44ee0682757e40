//! Engine integration tests
//!
//! Drives whole games through `Engine::attempt_move`, checking the
//! validation pipeline order, capture atomicity, win-threshold exactness,
//! turn alternation and the terminal Won state.

use chessvar_engine::{
    Board, Engine, GameState, Piece, PieceKind, Rejected, Side, Square,
};

/// Parse a two-character algebraic square, panicking on bad input.
fn sq(name: &str) -> Square {
    let mut chars = name.chars();
    let file = chars.next().unwrap();
    let rank = chars.next().unwrap();
    Square::from_algebraic(file, rank).unwrap()
}

/// Put a piece on the board at an algebraic square.
fn place(board: &mut Board, name: &str, side: Side, kind: PieceKind) {
    board.place(sq(name), Piece::new(side, kind));
}

#[test]
fn algebraic_mapping_flips_rank() {
    assert_eq!(sq("a8"), Square::new(0, 0).unwrap());
    assert_eq!(sq("a1"), Square::new(0, 7).unwrap());
    assert_eq!(sq("e2"), Square::new(4, 6).unwrap());
    assert_eq!(sq("h1"), Square::new(7, 7).unwrap());
    assert_eq!(Square::from_algebraic('i', '1'), None);
    assert_eq!(Square::from_algebraic('a', '9'), None);
}

#[test]
fn white_opening_double_push_is_applied() {
    let mut game = Engine::new();

    let applied = game.attempt_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(applied.captured, None);
    assert_eq!(applied.state, GameState::InProgress);

    assert_eq!(
        game.piece_at(sq("e4")),
        Some(Piece::new(Side::White, PieceKind::Pawn))
    );
    assert_eq!(game.piece_at(sq("e2")), None);
    assert_eq!(game.side_to_move(), Side::Black);
}

#[test]
fn pawn_cannot_advance_three_squares() {
    let mut game = Engine::new();
    game.attempt_move(sq("e2"), sq("e4")).unwrap();
    game.attempt_move(sq("a7"), sq("a6")).unwrap();

    let before = game.board().clone();
    let err = game.attempt_move(sq("e4"), sq("e6")).unwrap_err();
    assert_eq!(
        err,
        Rejected::IllegalForPiece {
            kind: PieceKind::Pawn,
            from: sq("e4"),
            to: sq("e6"),
        }
    );

    // Rejection left nothing behind
    assert_eq!(*game.board(), before);
    assert_eq!(game.side_to_move(), Side::White);
    assert_eq!(game.state(), GameState::InProgress);
}

#[test]
fn rejects_move_from_empty_square() {
    let mut game = Engine::new();
    let err = game.attempt_move(sq("e4"), sq("e5")).unwrap_err();
    assert_eq!(err, Rejected::NoPieceAtSource { square: sq("e4") });
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn rejects_moving_the_opponents_piece() {
    let mut game = Engine::new();
    let err = game.attempt_move(sq("e7"), sq("e5")).unwrap_err();
    assert_eq!(
        err,
        Rejected::WrongSideToMove {
            square: sq("e7"),
            side: Side::Black,
        }
    );
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn capture_is_atomic_with_movement() {
    let mut board = Board::empty();
    place(&mut board, "a1", Side::White, PieceKind::Rook);
    place(&mut board, "a8", Side::Black, PieceKind::Knight);
    place(&mut board, "e1", Side::White, PieceKind::King);
    place(&mut board, "e8", Side::Black, PieceKind::King);
    let mut game = Engine::from_position(board, Side::White);

    let applied = game.attempt_move(sq("a1"), sq("a8")).unwrap();
    assert_eq!(applied.captured, Some(PieceKind::Knight));
    assert_eq!(applied.state, GameState::InProgress);

    // Source emptied, destination replaced
    assert_eq!(game.piece_at(sq("a1")), None);
    assert_eq!(
        game.piece_at(sq("a8")),
        Some(Piece::new(Side::White, PieceKind::Rook))
    );

    // Exactly one tally entry moved, and only for the capturing side
    for kind in PieceKind::ALL {
        let expected = if kind == PieceKind::Knight { 1 } else { 0 };
        assert_eq!(game.captured(Side::White).count(kind), expected);
        assert_eq!(game.captured(Side::Black).count(kind), 0);
    }
}

#[test]
fn second_knight_capture_wins_and_not_before() {
    let mut board = Board::empty();
    place(&mut board, "a1", Side::White, PieceKind::Rook);
    place(&mut board, "e1", Side::White, PieceKind::King);
    place(&mut board, "a5", Side::Black, PieceKind::Knight);
    place(&mut board, "h5", Side::Black, PieceKind::Knight);
    place(&mut board, "h8", Side::Black, PieceKind::King);
    let mut game = Engine::from_position(board, Side::White);

    // First knight falls: one short of the complement, still in progress
    let applied = game.attempt_move(sq("a1"), sq("a5")).unwrap();
    assert_eq!(applied.captured, Some(PieceKind::Knight));
    assert_eq!(applied.state, GameState::InProgress);
    assert_eq!(game.captured(Side::White).count(PieceKind::Knight), 1);

    game.attempt_move(sq("h8"), sq("h7")).unwrap();

    // Second knight falls: the win is reported on this very move
    let applied = game.attempt_move(sq("a5"), sq("h5")).unwrap();
    assert_eq!(applied.captured, Some(PieceKind::Knight));
    assert_eq!(applied.state, GameState::Won(Side::White));
    assert_eq!(game.state(), GameState::Won(Side::White));
    assert_eq!(game.captured(Side::White).count(PieceKind::Knight), 2);
}

#[test]
fn queen_capture_wins_immediately() {
    // Complement of one: the first queen capture crosses the threshold
    let mut board = Board::empty();
    place(&mut board, "d1", Side::White, PieceKind::Rook);
    place(&mut board, "d8", Side::Black, PieceKind::Queen);
    place(&mut board, "a1", Side::White, PieceKind::King);
    place(&mut board, "h8", Side::Black, PieceKind::King);
    let mut game = Engine::from_position(board, Side::White);

    let applied = game.attempt_move(sq("d1"), sq("d8")).unwrap();
    assert_eq!(applied.state, GameState::Won(Side::White));
}

#[test]
fn capturing_the_king_wins_like_any_other_type() {
    // The king has no protected status; it is just a complement-of-one type
    let mut board = Board::empty();
    place(&mut board, "b2", Side::Black, PieceKind::Bishop);
    place(&mut board, "h8", Side::White, PieceKind::King);
    place(&mut board, "a8", Side::Black, PieceKind::King);
    let mut game = Engine::from_position(board, Side::Black);

    let applied = game.attempt_move(sq("b2"), sq("h8")).unwrap();
    assert_eq!(applied.captured, Some(PieceKind::King));
    assert_eq!(applied.state, GameState::Won(Side::Black));
}

#[test]
fn won_game_rejects_every_further_move() {
    let mut board = Board::empty();
    place(&mut board, "d1", Side::White, PieceKind::Rook);
    place(&mut board, "d8", Side::Black, PieceKind::Queen);
    place(&mut board, "a1", Side::White, PieceKind::King);
    place(&mut board, "h8", Side::Black, PieceKind::King);
    let mut game = Engine::from_position(board, Side::White);
    game.attempt_move(sq("d1"), sq("d8")).unwrap();

    let before = game.board().clone();
    let side_before = game.side_to_move();

    // Idempotently rejecting: any arguments, any number of times
    for _ in 0..3 {
        let err = game.attempt_move(sq("h8"), sq("h7")).unwrap_err();
        assert_eq!(err, Rejected::GameAlreadyOver);
        let err = game.attempt_move(sq("a1"), sq("a2")).unwrap_err();
        assert_eq!(err, Rejected::GameAlreadyOver);
    }

    assert_eq!(*game.board(), before);
    assert_eq!(game.side_to_move(), side_before);
    assert_eq!(game.state(), GameState::Won(Side::White));
}

#[test]
fn turn_alternates_on_applied_only() {
    let mut game = Engine::new();
    assert_eq!(game.side_to_move(), Side::White);

    game.attempt_move(sq("g1"), sq("f3")).unwrap();
    assert_eq!(game.side_to_move(), Side::Black);

    // An illegal black move changes nothing
    game.attempt_move(sq("b8"), sq("b6")).unwrap_err();
    assert_eq!(game.side_to_move(), Side::Black);

    game.attempt_move(sq("b8"), sq("c6")).unwrap();
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn tallies_accumulate_over_a_real_game() {
    // A short open game: each side takes one pawn
    let mut game = Engine::new();
    game.attempt_move(sq("e2"), sq("e4")).unwrap();
    game.attempt_move(sq("d7"), sq("d5")).unwrap();
    game.attempt_move(sq("e4"), sq("d5")).unwrap(); // white takes a pawn
    game.attempt_move(sq("d8"), sq("d5")).unwrap(); // black queen takes back

    assert_eq!(game.captured(Side::White).count(PieceKind::Pawn), 1);
    assert_eq!(game.captured(Side::Black).count(PieceKind::Pawn), 1);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.side_to_move(), Side::White);
}

#[test]
fn rejection_messages_name_the_squares() {
    let mut game = Engine::new();
    let err = game.attempt_move(sq("e4"), sq("e5")).unwrap_err();
    assert_eq!(err.to_string(), "no piece at e4");

    let err = game.attempt_move(sq("a1"), sq("a5")).unwrap_err();
    assert_eq!(err.to_string(), "rook cannot move from a1 to a5");
}

#[test]
fn board_renders_eight_ranks_with_rank_eight_on_top() {
    let game = Engine::new();
    let rendered = game.board().to_string();
    let lines: Vec<&str> = rendered.lines().collect();

    assert_eq!(lines.len(), 8);
    assert!(lines[0].starts_with("bR bN bB bQ bK"));
    assert!(lines[7].starts_with("wR wN wB wQ wK"));
    assert!(lines[3].split_whitespace().all(|cell| cell == "*"));
}
