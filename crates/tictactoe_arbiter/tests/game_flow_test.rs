//! End-to-end game flows through the engine.

use tictactoe_arbiter::{Board, ErrorCode, GameEngine, GameError, GameRecord, GameStatus, PlayerId, Sign, Tile};

fn players() -> (PlayerId, PlayerId) {
    (PlayerId::new("player-one"), PlayerId::new("player-two"))
}

/// Plays a move and checks the resulting turn, status and board.
fn play(
    record: &GameRecord,
    player: &PlayerId,
    tile: (u8, u8),
    expected_turn: u8,
    expected_status: &GameStatus,
    expected_board: [&str; 3],
) -> GameRecord {
    let next = GameEngine::play_move(record, player, Tile::new(tile.0, tile.1)).expect("legal move");
    assert_eq!(*next.turn(), expected_turn);
    assert_eq!(next.status(), expected_status);
    assert_eq!(next.board(), &board(expected_board));
    next
}

fn board(rows: [&str; 3]) -> Board {
    let mut cells = [[None; 3]; 3];
    for (r, row) in rows.iter().enumerate() {
        for (c, ch) in row.chars().enumerate() {
            cells[r][c] = match ch {
                'X' => Some(Sign::X),
                'O' => Some(Sign::O),
                _ => None,
            };
        }
    }
    Board::from_rows(cells)
}

fn code(err: GameError) -> u32 {
    err.code().expect("coded error").as_u32()
}

#[test]
fn test_setup_game() {
    let (one, two) = players();
    let record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();

    assert_eq!(*record.turn(), 1);
    assert_eq!(record.players(), &[one, two]);
    assert_eq!(record.status(), &GameStatus::Active);
    assert_eq!(record.board(), &board(["...", "...", "..."]));
}

#[test]
fn test_player_one_wins() {
    let (one, two) = players();
    let active = GameStatus::Active;
    let record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();

    let record = play(&record, &one, (0, 0), 2, &active, ["X..", "...", "..."]);

    // Same player again.
    let err = GameEngine::play_move(&record, &one, Tile::new(1, 0)).unwrap_err();
    assert_eq!(err.name(), "NotPlayersTurn");
    assert_eq!(err.compared_values(), Some((&two, &one)));
    assert_eq!(code(err), 6003);

    let record = play(&record, &two, (1, 0), 3, &active, ["X..", "O..", "..."]);
    let record = play(&record, &one, (0, 1), 4, &active, ["XX.", "O..", "..."]);

    // Out of bounds row.
    let err = GameEngine::play_move(&record, &two, Tile::new(5, 1)).unwrap_err();
    assert_eq!(err.name(), "TileOutOfBounds");
    assert_eq!(code(err), 6000);

    let record = play(&record, &two, (1, 1), 5, &active, ["XX.", "OO.", "..."]);

    // Occupied tile.
    let err = GameEngine::play_move(&record, &one, Tile::new(0, 0)).unwrap_err();
    assert_eq!(code(err), 6001);

    let won = GameStatus::Won { winner: one.clone() };
    let record = play(&record, &one, (0, 2), 5, &won, ["XXX", "OO.", "..."]);

    // Anything after the win is rejected, even the same tile again.
    let err = GameEngine::play_move(&record, &one, Tile::new(0, 2)).unwrap_err();
    assert_eq!(code(err), 6002);
    assert_eq!(record.board().occupied(), 5);
}

#[test]
fn test_tie() {
    let (one, two) = players();
    let active = GameStatus::Active;
    let record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();

    let record = play(&record, &one, (0, 0), 2, &active, ["X..", "...", "..."]);
    let record = play(&record, &two, (1, 1), 3, &active, ["X..", ".O.", "..."]);
    let record = play(&record, &one, (2, 0), 4, &active, ["X..", ".O.", "X.."]);
    let record = play(&record, &two, (1, 0), 5, &active, ["X..", "OO.", "X.."]);
    let record = play(&record, &one, (1, 2), 6, &active, ["X..", "OOX", "X.."]);
    let record = play(&record, &two, (0, 1), 7, &active, ["XO.", "OOX", "X.."]);
    let record = play(&record, &one, (2, 1), 8, &active, ["XO.", "OOX", "XX."]);
    let record = play(&record, &two, (2, 2), 9, &active, ["XO.", "OOX", "XXO"]);
    let record = play(&record, &one, (0, 2), 9, &GameStatus::Tie, ["XOX", "OOX", "XXO"]);

    let err = GameEngine::play_move(&record, &two, Tile::new(0, 2)).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::NotPlayersTurn));
    let err = GameEngine::play_move(&record, &one, Tile::new(0, 2)).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::GameAlreadyOver));
}

#[test]
fn test_ninth_move_win_beats_tie() {
    let (one, two) = players();
    let active = GameStatus::Active;
    let record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();

    let record = play(&record, &one, (0, 0), 2, &active, ["X..", "...", "..."]);
    let record = play(&record, &two, (0, 1), 3, &active, ["XO.", "...", "..."]);
    let record = play(&record, &one, (0, 2), 4, &active, ["XOX", "...", "..."]);
    let record = play(&record, &two, (1, 1), 5, &active, ["XOX", ".O.", "..."]);
    let record = play(&record, &one, (1, 0), 6, &active, ["XOX", "XO.", "..."]);
    let record = play(&record, &two, (1, 2), 7, &active, ["XOX", "XOO", "..."]);
    let record = play(&record, &one, (2, 1), 8, &active, ["XOX", "XOO", ".X."]);
    let record = play(&record, &two, (2, 2), 9, &active, ["XOX", "XOO", ".XO"]);

    // The last mark fills the board and completes column 0.
    let won = GameStatus::Won { winner: one.clone() };
    let record = play(&record, &one, (2, 0), 9, &won, ["XOX", "XOO", "XXO"]);

    assert_eq!(record.winner(), Some(&one));
    assert_eq!(record.board().occupied(), 9);
    assert!(GameEngine::legal_tiles(&record).is_empty());
}

#[test]
fn test_out_of_bounds_leaves_record_unchanged() {
    let (one, two) = players();
    let record = GameEngine::setup_game(one.clone(), two).unwrap();
    let record = GameEngine::play_move(&record, &one, Tile::new(0, 0)).unwrap();
    let before = record.clone();

    let second = record.players()[1].clone();
    let err = GameEngine::play_move(&record, &second, Tile::new(5, 0)).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::TileOutOfBounds));
    assert_eq!(record, before);
}

#[test]
fn test_outsider_is_never_on_turn() {
    let (one, two) = players();
    let outsider = PlayerId::new("mallory");
    let mut record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();

    for (player, tile) in [(&one, Tile::new(0, 0)), (&two, Tile::new(2, 2)), (&one, Tile::new(0, 2))] {
        let err = GameEngine::play_move(&record, &outsider, Tile::new(1, 1)).unwrap_err();
        assert_eq!(err.compared_values(), Some((record.current_player(), &outsider)));
        record = GameEngine::play_move(&record, player, tile).unwrap();
    }
}

#[test]
fn test_turn_check_takes_precedence_over_everything() {
    let (one, two) = players();
    let record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();
    let record = GameEngine::play_move(&record, &one, Tile::new(0, 0)).unwrap();

    // Wrong player, off-board tile.
    let err = GameEngine::play_move(&record, &one, Tile::new(7, 7)).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::NotPlayersTurn));

    // Wrong player, occupied tile.
    let err = GameEngine::play_move(&record, &one, Tile::new(0, 0)).unwrap_err();
    assert_eq!(err.code(), Some(ErrorCode::NotPlayersTurn));
}

#[test]
fn test_bounds_rejected_for_row_and_column() {
    let (one, two) = players();
    let record = GameEngine::setup_game(one.clone(), two).unwrap();
    for tile in [Tile::new(3, 0), Tile::new(0, 3), Tile::new(255, 255)] {
        let err = GameEngine::play_move(&record, &one, tile).unwrap_err();
        assert_eq!(err, GameError::TileOutOfBounds);
    }
}

#[test]
fn test_turn_advances_then_freezes() {
    let (one, two) = players();
    let mut record = GameEngine::setup_game(one.clone(), two.clone()).unwrap();
    let moves = [
        (&one, Tile::new(1, 1)),
        (&two, Tile::new(0, 0)),
        (&one, Tile::new(0, 2)),
        (&two, Tile::new(2, 0)),
        (&one, Tile::new(1, 0)),
        (&two, Tile::new(1, 2)),
        (&one, Tile::new(2, 1)),
        (&two, Tile::new(0, 1)),
    ];
    for (i, (player, tile)) in moves.into_iter().enumerate() {
        let next = GameEngine::play_move(&record, player, tile).unwrap();
        assert!(next.is_active());
        assert_eq!(*next.turn() as usize, i + 2);
        assert_eq!(next.board().occupied(), *next.turn() as usize - 1);
        record = next;
    }

    // X takes the last cell without completing a line.
    let last = GameEngine::play_move(&record, &one, Tile::new(2, 2)).unwrap();
    assert_eq!(last.status(), &GameStatus::Tie);
    assert_eq!(*last.turn(), *record.turn());
}
