//! Behavioural tests for the tic-tac-toe engine.

use tictactoe_engine::{
    CELL_COUNT, Game, GameOver, GameStatus, InvalidMove, MoveOutcome, Player, Square, WIN_LINES,
    WinLine,
};

fn play(game: &mut Game, moves: &[usize]) -> Vec<MoveOutcome> {
    moves
        .iter()
        .map(|&index| game.apply_move(index).expect("move should be accepted"))
        .collect()
}

/// Line check written independently of the engine's evaluator.
fn has_three_in_a_row(squares: &[Square; CELL_COUNT]) -> bool {
    WIN_LINES.iter().any(|line| {
        let [a, b, c] = line.cells();
        !squares[a].is_empty() && squares[a] == squares[b] && squares[b] == squares[c]
    })
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = Game::new();
    let outcomes = play(&mut game, &[0, 3, 1, 4, 2]);

    assert_eq!(
        outcomes,
        vec![
            MoveOutcome::Continue {
                next_player: Player::O,
            },
            MoveOutcome::Continue {
                next_player: Player::X,
            },
            MoveOutcome::Continue {
                next_player: Player::O,
            },
            MoveOutcome::Continue {
                next_player: Player::X,
            },
            MoveOutcome::GameOver(GameOver::Won {
                winner: Player::X,
                line: WinLine::new([0, 1, 2]),
            }),
        ]
    );
    assert_eq!(
        game.current_status(),
        &GameStatus::Won {
            winner: Player::X,
            line: WinLine::new([0, 1, 2]),
        }
    );
}

#[test]
fn test_full_board_draw_scenario() {
    // X: 0,2,4,5,7  O: 1,3,6,8
    let mut game = Game::new();
    let outcomes = play(&mut game, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);

    let (last, earlier) = outcomes.split_last().expect("nine outcomes");
    assert_eq!(last, &MoveOutcome::GameOver(GameOver::Draw));
    assert!(earlier.iter().all(|o| !o.is_game_over()));
    assert_eq!(game.current_status(), &GameStatus::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.board().count(Player::X), 5);
    assert_eq!(game.board().count(Player::O), 4);
}

#[test]
fn test_occupied_cell_scenario() {
    let mut game = Game::new();
    game.apply_move(0).unwrap();

    for _ in 0..5 {
        assert_eq!(game.apply_move(0), Err(InvalidMove::CellOccupied(0)));
    }
    let marked = game.board().squares().iter().filter(|s| !s.is_empty()).count();
    assert_eq!(marked, 1);
    assert_eq!(game.board().get(0), Some(Square::Occupied(Player::X)));
    assert_eq!(game.active_player(), Player::O);
}

#[test]
fn test_out_of_range_scenario() {
    let mut game = Game::new();
    assert_eq!(game.apply_move(9), Err(InvalidMove::OutOfRange(9)));
    assert_eq!(game.apply_move(usize::MAX), Err(InvalidMove::OutOfRange(usize::MAX)));
    assert_eq!(game.current_status(), &GameStatus::InProgress);
    assert_eq!(game.active_player(), Player::X);
    assert_eq!(game, Game::new());
}

#[test]
fn test_move_after_win_scenario() {
    let mut game = Game::new();
    play(&mut game, &[0, 3, 1, 4, 2]);
    assert_eq!(game.apply_move(5), Err(InvalidMove::GameAlreadyOver));
    assert!(game.board().is_empty(5));
}

#[test]
fn test_turns_alternate_starting_with_x() {
    let mut game = Game::new();
    // 0 1 2 / 4 3 5 / 7 6 8 never completes a line until the last move
    let mut expected = Player::X;
    for index in [0, 1, 2, 4, 3, 5, 7, 6] {
        assert_eq!(game.active_player(), expected);
        let outcome = game.apply_move(index).unwrap();
        expected = expected.opponent();
        assert_eq!(
            outcome,
            MoveOutcome::Continue {
                next_player: expected,
            }
        );
    }
}

#[test]
fn test_engine_stays_usable_after_rejections() {
    let mut game = Game::new();
    game.apply_move(4).unwrap();
    assert!(game.apply_move(4).is_err());
    assert!(game.apply_move(10).is_err());

    assert_eq!(
        game.apply_move(0).unwrap(),
        MoveOutcome::Continue {
            next_player: Player::X,
        }
    );
}

#[test]
fn test_reset_after_any_terminal_state() {
    let mut won = Game::new();
    play(&mut won, &[0, 3, 1, 4, 2]);
    let mut drawn = Game::new();
    play(&mut drawn, &[0, 1, 2, 3, 4, 6, 5, 8, 7]);
    let mut midway = Game::new();
    play(&mut midway, &[8, 0]);

    for previous in [won, drawn, midway] {
        let before = previous.clone();
        let fresh = previous.reset();
        assert_eq!(fresh.current_status(), &GameStatus::InProgress);
        assert_eq!(fresh.active_player(), Player::X);
        assert!(fresh.board().squares().iter().all(|s| s.is_empty()));
        assert_eq!(previous, before);
    }
}

/// Walks every reachable game and checks the engine's state machine at
/// each node.
fn explore(game: &Game, stats: &mut (usize, usize, usize)) {
    if game.current_status().is_terminal() {
        let mut frozen = game.clone();
        for index in 0..=CELL_COUNT {
            assert_eq!(frozen.apply_move(index), Err(InvalidMove::GameAlreadyOver));
        }
        assert_eq!(&frozen, game);
        return;
    }

    let x = game.board().count(Player::X);
    let o = game.board().count(Player::O);
    let expected_mover = if x == o { Player::X } else { Player::O };
    assert_eq!(game.active_player(), expected_mover);

    for index in 0..CELL_COUNT {
        let mut next = game.clone();
        if !game.board().is_empty(index) {
            assert_eq!(next.apply_move(index), Err(InvalidMove::CellOccupied(index)));
            assert_eq!(&next, game);
            continue;
        }

        let outcome = next.apply_move(index).unwrap();
        let squares = next.board().snapshot();
        let won = has_three_in_a_row(&squares);
        assert_eq!(
            matches!(next.current_status(), GameStatus::Won { .. }),
            won,
            "board:\n{}",
            next.board()
        );

        match outcome {
            MoveOutcome::GameOver(GameOver::Won { winner, line }) => {
                stats.0 += 1;
                assert_eq!(winner, expected_mover);
                assert!(line.cells().iter().all(|&i| squares[i] == Square::Occupied(winner)));
                assert!(line.contains(index));
            }
            MoveOutcome::GameOver(GameOver::Draw) => {
                stats.1 += 1;
                assert!(!won);
                assert!(next.board().is_full());
            }
            MoveOutcome::Continue { next_player } => {
                stats.2 += 1;
                assert!(!won);
                assert!(!next.board().is_full());
                assert_eq!(next_player, expected_mover.opponent());
                assert_eq!(next.active_player(), next_player);
            }
        }
        explore(&next, stats);
    }
}

#[test]
fn test_every_reachable_game() {
    let mut stats = (0, 0, 0);
    explore(&Game::new(), &mut stats);
    let (wins, draws, continues) = stats;

    // Well-known counts for the full tic-tac-toe game tree.
    assert_eq!(wins + draws, 255_168);
    assert_eq!(draws, 46_080);
    assert_eq!(wins + draws + continues, 549_945);
}
