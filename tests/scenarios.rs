//! End-to-end match scenarios on the standard 7x6 grid.

use connect_four::ai::{Agent, MoveSelector};
use connect_four::error::MoveError;
use connect_four::game::{
    GameOutcome, Grid, Match, MatchStatus, Orientation, Outcome, Player, Position, BOT_PLAYER,
};

fn play_all(game: &mut Match, columns: &[usize]) {
    for &column in columns {
        game.place_move(column).unwrap();
    }
}

fn assert_winning_cells(game: &Match, cells: [(usize, usize); 4]) {
    let streak = game.winning_streak().expect("winning streak recorded");
    assert_eq!(streak.len(), 4);
    for (x, y) in cells {
        assert!(streak.contains(Position::new(x, y)), "missing ({}, {})", x, y);
    }
}

#[test]
fn column_holds_exactly_rows_pieces() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[0, 0, 0, 0, 0, 0]);

    let before = game.snapshot();
    assert_eq!(
        game.place_move(0).unwrap_err(),
        MoveError::ColumnFull { column: 0 }
    );
    assert_eq!(game.snapshot(), before);
    assert_eq!(game.status(), MatchStatus::AwaitingMove(Player::One));
}

#[test]
fn out_of_range_column_is_rejected() {
    let mut game = Match::new(7, 6, false);
    assert_eq!(
        game.place_move(7).unwrap_err(),
        MoveError::ColumnOutOfRange {
            column: 7,
            columns: 7
        }
    );
    assert_eq!(game.grid().piece_count(), 0);
    assert_eq!(game.active_player(), Player::One);
}

#[test]
fn vertical_win_for_player_one() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[0, 1, 0, 1, 0, 1]);
    assert!(!game.is_finished());

    let report = game.place_move(0).unwrap();
    match report.placement.outcome {
        Outcome::Win { player, ref streak } => {
            assert_eq!(player, Player::One);
            assert_eq!(streak.orientation(), Orientation::Vertical);
        }
        ref other => panic!("expected a win, got {:?}", other),
    }
    assert_eq!(game.result(), Some(GameOutcome::Winner(Player::One)));
    assert_winning_cells(&game, [(0, 5), (0, 4), (0, 3), (0, 2)]);
}

#[test]
fn horizontal_win_on_bottom_row() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[0, 0, 1, 1, 2, 2, 3]);

    assert_eq!(game.result(), Some(GameOutcome::Winner(Player::One)));
    assert_eq!(
        game.winning_streak().unwrap().orientation(),
        Orientation::Horizontal
    );
    assert_winning_cells(&game, [(0, 5), (1, 5), (2, 5), (3, 5)]);
}

#[test]
fn rising_diagonal_win_for_player_two() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[1, 0, 2, 1, 2, 2, 3, 6, 3, 3, 6, 3]);

    assert_eq!(game.result(), Some(GameOutcome::Winner(Player::Two)));
    assert_eq!(
        game.winning_streak().unwrap().orientation(),
        Orientation::Slash
    );
    assert_winning_cells(&game, [(0, 5), (1, 4), (2, 3), (3, 2)]);
}

#[test]
fn falling_diagonal_win_for_player_one() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[3, 0, 0, 1, 0, 2, 1, 4, 2, 5, 1, 4]);
    assert!(!game.is_finished());

    game.place_move(0).unwrap();
    assert_eq!(game.result(), Some(GameOutcome::Winner(Player::One)));
    assert_eq!(
        game.winning_streak().unwrap().orientation(),
        Orientation::Backslash
    );
    assert_winning_cells(&game, [(0, 2), (1, 3), (2, 4), (3, 5)]);
}

const DRAW: [usize; 42] = [
    0, 2, 0, 0, 1, 0, 0, 2, 0, 4, 1, 1, 2, 1, 1, 4, 1, 6, 2, 2, 3, 2, 3, 3, 4, 3, 3, 6, 4, 4, 5, 4,
    6, 5, 5, 5, 5, 5, 6, 6, 3, 6,
];

#[test]
fn full_board_without_four_is_a_draw() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &DRAW[..41]);
    assert!(!game.is_finished());

    let report = game.place_move(DRAW[41]).unwrap();
    assert_eq!(report.placement.outcome, Outcome::Draw);
    assert!(game.grid().is_full());
    assert_eq!(game.status(), MatchStatus::Finished(GameOutcome::Draw));
    assert!(game.winning_streak().is_none());
}

#[test]
fn finished_match_rejects_moves_until_reset() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[0, 1, 0, 1, 0, 1, 0]);
    let finished = game.snapshot();

    assert_eq!(
        game.place_move(3).unwrap_err(),
        MoveError::GameAlreadyFinished
    );
    assert_eq!(game.snapshot(), finished);

    game.reset();
    assert!(!game.is_finished());
    assert_eq!(game.active_player(), Player::One);
    assert_eq!(game.grid().piece_count(), 0);
    assert_eq!(game.near_win_count(), 0);
    assert!(game.result().is_none());
    game.place_move(3).unwrap();
}

#[test]
fn bot_replies_with_legal_moves_until_the_end() {
    for seed in 0..50 {
        let mut game = Match::with_agent(7, 6, Some(Box::new(MoveSelector::seeded(seed))));
        let mut human = MoveSelector::seeded(seed + 1_000);

        while !game.is_finished() {
            let column = human.select_column(game.grid(), BOT_PLAYER.other());
            let pieces_before = game.grid().piece_count();
            let report = game.place_move(column).unwrap();

            match report.reply {
                Some(reply) => {
                    assert_eq!(reply.piece.player, BOT_PLAYER);
                    assert_eq!(game.grid().piece_count(), pieces_before + 2);
                }
                None => assert!(game.is_finished()),
            }
            if !game.is_finished() {
                assert_eq!(game.active_player(), BOT_PLAYER.other());
            }
        }
        assert!(game.grid().piece_count() <= 42);
    }
}

#[test]
fn incremental_and_full_board_evaluation_agree() {
    let mut game = Match::new(7, 6, false);
    play_all(&mut game, &[1, 0, 2, 1, 2, 2, 3, 6, 3, 3, 6, 3]);

    let detector = connect_four::game::WinDetector::new();
    let evaluation = detector.evaluate_board(game.grid());
    assert_eq!(evaluation.outcome.winner(), Some(Player::Two));

    let empty = Grid::new(7, 6);
    assert_eq!(detector.evaluate_board(&empty).outcome, Outcome::Continue);
}
