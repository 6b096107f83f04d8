//! End-to-end session scenarios for both game variants.

use rand::rngs::StdRng;
use rand::SeedableRng;

use arcade_core::{
    nexus, Coord, Difficulty, FourInARow, GameError, GameEvent, GameSession, Nexus, Player,
    SessionConfig, Status,
};

fn ai_config(difficulty: Difficulty) -> SessionConfig {
    SessionConfig {
        ai_enabled: true,
        difficulty,
        ..SessionConfig::default()
    }
}

#[test]
fn four_in_a_row_vertical_win_scenario() {
    // P1 drops in column 3 four times, P2 answers in column 0 between
    // each; the fourth drop in column 3 wins vertically.
    let mut session = GameSession::new(FourInARow, SessionConfig::default());

    for _ in 0..3 {
        session.apply_move(3).unwrap();
        session.apply_move(0).unwrap();
    }
    let outcome = session.apply_move(3).unwrap();

    assert_eq!(outcome.status, Status::Won(Player::One));
    assert!(outcome.events.contains(&GameEvent::GameOver {
        status: Status::Won(Player::One)
    }));
    assert!(arcade_core::four_in_a_row::check_win(
        session.board(),
        Player::One
    ));

    // Terminal state is absorbing.
    assert_eq!(session.apply_move(0), Err(GameError::GameOver));
}

#[test]
fn four_in_a_row_ai_answers_human_move() {
    let mut session = GameSession::new(FourInARow, ai_config(Difficulty::Medium));
    let mut rng = StdRng::seed_from_u64(42);

    // Nothing for the AI to do before the human has moved.
    assert!(session.maybe_run_ai(&mut rng).unwrap().is_none());

    session.apply_move(3).unwrap();
    let outcome = session.maybe_run_ai(&mut rng).unwrap().expect("ai move");

    assert_eq!(outcome.current_player, Player::One);
    assert_eq!(session.scores(), (1, 1));
}

#[test]
fn four_in_a_row_hard_ai_blocks_threat() {
    // Human holds three in column 2 with the AI to move: the hard tier
    // has no win of its own and must block on top of the stack.
    let mut board = arcade_core::Board::new(6, 7);
    for row in 3..6 {
        board.set_cell(row, 2, Some(Player::One));
    }
    board.set_cell(5, 5, Some(Player::Two));
    board.set_cell(5, 6, Some(Player::Two));

    let mut session =
        GameSession::from_position(FourInARow, ai_config(Difficulty::Hard), board, Player::Two);
    let mut rng = StdRng::seed_from_u64(1);

    session.maybe_run_ai(&mut rng).unwrap().expect("ai move");
    assert_eq!(session.board().cell(2, 2), Some(Player::Two));
}

#[test]
fn nexus_opening_capture_scenario() {
    // Seeded 6×6 board: P1 plays a legal capturing cell next to the seed
    // cluster; exactly one P2 piece flips.
    let mut session = GameSession::new(Nexus::new(), SessionConfig::default());
    assert_eq!(session.scores(), (2, 2));

    let outcome = session.apply_move(Coord::new(2, 4)).unwrap();
    assert_eq!(outcome.status, Status::Playing);
    assert_eq!(outcome.current_player, Player::Two);
    assert_eq!(session.scores(), (4, 1));
    assert_eq!(session.board().cell(2, 3), Some(Player::One));
}

#[test]
fn nexus_random_ai_plays_legal_move() {
    let mut session = GameSession::new(Nexus::new(), ai_config(Difficulty::Easy));
    let mut rng = StdRng::seed_from_u64(9);

    session.apply_move(Coord::new(2, 4)).unwrap();
    let legal = nexus::legal_moves(session.board(), Player::Two);
    let before = session.board().clone();

    let outcome = session.maybe_run_ai(&mut rng).unwrap().expect("ai move");
    assert_eq!(outcome.current_player, Player::One);

    // The AI placed on one of the moves that were legal beforehand.
    let placed: Vec<Coord> = legal
        .into_iter()
        .filter(|c| before.cell(c.row, c.col).is_none() && session.board().cell(c.row, c.col).is_some())
        .collect();
    assert_eq!(placed.len(), 1);
}

#[test]
fn nexus_turn_passes_when_opponent_stuck() {
    // After P1 captures along row 0, P2 has no move anywhere but P1 still
    // does: the turn passes back without consuming a round.
    let mut board = arcade_core::Board::new(nexus::SIZE, nexus::SIZE);
    board.set_cell(0, 0, Some(Player::One));
    board.set_cell(0, 1, Some(Player::Two));
    board.set_cell(5, 0, Some(Player::One));
    board.set_cell(5, 1, Some(Player::Two));

    let mut session =
        GameSession::from_position(Nexus::new(), SessionConfig::default(), board, Player::One);

    let before_pieces = session.scores();
    let outcome = session.apply_move(Coord::new(0, 2)).unwrap();

    assert_eq!(outcome.status, Status::Playing);
    assert_eq!(outcome.current_player, Player::One);
    assert!(outcome
        .events
        .contains(&GameEvent::TurnPassed { stuck: Player::Two }));
    // The pass itself mutated nothing beyond P1's own move.
    assert_eq!(session.scores().0 + session.scores().1, before_pieces.0 + before_pieces.1 + 1);

    // P1 keeps playing and captures the last P2 piece: neither player can
    // move afterwards, so P1 wins on piece majority.
    let outcome = session.apply_move(Coord::new(5, 2)).unwrap();
    assert_eq!(outcome.status, Status::Won(Player::One));
    assert_eq!(session.scores(), (6, 0));
    assert!(outcome.events.contains(&GameEvent::GameOver {
        status: Status::Won(Player::One)
    }));
}

#[test]
fn nexus_rejects_captureless_and_occupied_moves() {
    let mut session = GameSession::new(Nexus::new(), SessionConfig::default());

    assert_eq!(
        session.apply_move(Coord::new(0, 0)),
        Err(GameError::NoCapture { row: 0, col: 0 })
    );
    assert_eq!(
        session.apply_move(Coord::new(2, 2)),
        Err(GameError::Occupied { row: 2, col: 2 })
    );
    assert_eq!(
        session.apply_move(Coord::new(9, 9)),
        Err(GameError::OutOfRange { row: 9, col: 9 })
    );

    // Session untouched by the rejections.
    assert_eq!(session.scores(), (2, 2));
    assert_eq!(session.current_player(), Player::One);
}
