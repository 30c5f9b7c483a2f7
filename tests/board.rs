//! Scoreboard integration tests.

use flipscore::{
    BoardOptions, BoardState, Player, PlayerId, RosterError, RoundError, Scoreboard, ScoreError,
    StartError, UndoError,
};

fn board() -> Scoreboard {
    Scoreboard::new(BoardOptions::default())
}

fn board_with(names: &[&str]) -> (Scoreboard, Vec<PlayerId>) {
    let board = board();
    let ids = names
        .iter()
        .map(|name| board.add_player(name).unwrap())
        .collect();
    (board, ids)
}

#[test]
fn add_players_preserves_order_and_unique_ids() {
    let (board, ids) = board_with(&["Alice", "Bob", "Carol"]);

    assert_eq!(board.player_count(), 3);

    let state = board.state();
    let names: Vec<&str> = state.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Carol"]);

    for (i, a) in ids.iter().enumerate() {
        for b in &ids[i + 1..] {
            assert_ne!(a, b);
        }
    }
}

#[test]
fn add_player_trims_and_rejects_empty_names() {
    let board = board();

    let id = board.add_player("  Dana  ").unwrap();
    assert_eq!(board.get_player(id).unwrap().name, "Dana");

    assert_eq!(board.add_player("").unwrap_err(), RosterError::EmptyName);
    assert_eq!(board.add_player("   ").unwrap_err(), RosterError::EmptyName);
    assert_eq!(board.player_count(), 1);
    // Rejected adds must not burn undo slots.
    assert_eq!(board.history_len(), 1);
}

#[test]
fn add_player_rejects_full_roster() {
    let board = Scoreboard::new(BoardOptions::default().with_max_players(2));
    board.add_player("a").unwrap();
    board.add_player("b").unwrap();

    assert_eq!(board.add_player("c").unwrap_err(), RosterError::TableFull);
    assert_eq!(board.player_count(), 2);
}

#[test]
fn remove_player_unknown_id_is_guarded() {
    let (board, ids) = board_with(&["Alice"]);

    assert_eq!(
        board.remove_player(PlayerId(99)).unwrap_err(),
        RosterError::PlayerNotFound
    );
    // No snapshot for the rejected removal.
    assert_eq!(board.history_len(), 1);

    board.remove_player(ids[0]).unwrap();
    assert_eq!(board.player_count(), 0);
}

#[test]
fn start_game_requires_players() {
    let board = board();
    assert_eq!(board.start_game().unwrap_err(), StartError::NoPlayers);
    assert!(!board.is_started());

    board.add_player("Alice").unwrap();
    board.start_game().unwrap();
    assert!(board.is_started());
}

#[test]
fn record_score_empty_input_is_a_no_op() {
    let (board, ids) = board_with(&["Alice"]);

    assert_eq!(board.record_score(ids[0], "10", false, false).unwrap(), 10);

    let history_before = board.history_len();
    assert_eq!(
        board.record_score(ids[0], "", false, false).unwrap_err(),
        ScoreError::NoInput
    );
    assert_eq!(board.get_player(ids[0]).unwrap().score, 10);
    assert_eq!(board.history_len(), history_before);
}

#[test]
fn record_score_explicit_zero_is_applied() {
    let (board, ids) = board_with(&["Alice"]);

    assert_eq!(board.record_score(ids[0], "0", false, false).unwrap(), 0);
    let player = board.get_player(ids[0]).unwrap();
    assert_eq!(player.score, 0);
    assert_eq!(player.last_delta, Some(0));
}

#[test]
fn record_score_unparseable_counts_as_zero() {
    let (board, ids) = board_with(&["Alice"]);

    // Non-empty garbage is "explicit zero", not "nothing entered".
    assert_eq!(board.record_score(ids[0], "abc", false, false).unwrap(), 0);
    assert_eq!(board.get_player(ids[0]).unwrap().last_delta, Some(0));
}

#[test]
fn flip_bonus_adds_fifteen() {
    let (board, ids) = board_with(&["Alice"]);

    assert_eq!(board.record_score(ids[0], "5", true, false).unwrap(), 20);
    assert_eq!(board.get_player(ids[0]).unwrap().score, 20);

    // Bonus alone on an empty field still applies.
    assert_eq!(board.record_score(ids[0], "", true, false).unwrap(), 15);
    assert_eq!(board.get_player(ids[0]).unwrap().score, 35);
}

#[test]
fn crash_overrides_input_and_bonus() {
    let (board, ids) = board_with(&["Alice"]);
    board.record_score(ids[0], "30", false, false).unwrap();

    assert_eq!(board.record_score(ids[0], "99", true, true).unwrap(), 0);

    let player = board.get_player(ids[0]).unwrap();
    assert_eq!(player.score, 30);
    assert_eq!(player.last_delta, Some(0));
}

#[test]
fn record_score_rejects_unknown_player() {
    let board = board();
    assert_eq!(
        board.record_score(PlayerId(7), "10", false, false).unwrap_err(),
        ScoreError::PlayerNotFound
    );
}

#[test]
fn negative_scores_are_allowed() {
    let (board, ids) = board_with(&["Alice"]);
    board.record_score(ids[0], "-25", false, false).unwrap();
    assert_eq!(board.get_player(ids[0]).unwrap().score, -25);
}

#[test]
fn next_round_rotates_dealer_with_wraparound() {
    let (board, ids) = board_with(&["a", "b", "c"]);
    board.start_game().unwrap();
    assert_eq!(board.dealer(), Some(ids[0]));

    assert_eq!(board.next_round().unwrap(), 2);
    assert_eq!(board.dealer(), Some(ids[1]));

    board.next_round().unwrap();
    assert_eq!(board.dealer(), Some(ids[2]));

    // dealer_index 2 wraps back to 0 on a 3-player roster.
    assert_eq!(board.next_round().unwrap(), 4);
    assert_eq!(board.dealer(), Some(ids[0]));
}

#[test]
fn next_round_requires_players() {
    let board = board();
    assert_eq!(board.next_round().unwrap_err(), RoundError::EmptyRoster);
    assert_eq!(board.round(), 1);
}

#[test]
fn dealer_is_none_before_start() {
    let (board, _) = board_with(&["a"]);
    assert_eq!(board.dealer(), None);
}

#[test]
fn rematch_tallies_tied_winners_and_resets() {
    let (board, ids) = board_with(&["A", "B", "C"]);
    board.start_game().unwrap();
    board.record_score(ids[0], "210", false, false).unwrap();
    board.record_score(ids[1], "210", false, false).unwrap();
    board.record_score(ids[2], "190", false, false).unwrap();
    board.next_round().unwrap();

    let winners = board.rematch().unwrap();
    assert_eq!(winners, vec![ids[0], ids[1]]);

    let state = board.state();
    assert_eq!(state.players[0].wins, 1);
    assert_eq!(state.players[1].wins, 1);
    assert_eq!(state.players[2].wins, 0);
    for player in &state.players {
        assert_eq!(player.score, 0);
        assert_eq!(player.last_delta, None);
    }
    assert_eq!(state.round, 1);
    assert!(state.started);
}

#[test]
fn rematch_below_threshold_tallies_nobody() {
    let (board, ids) = board_with(&["A", "B"]);
    board.start_game().unwrap();
    board.record_score(ids[0], "150", false, false).unwrap();

    let winners = board.rematch().unwrap();
    assert!(winners.is_empty());
    assert_eq!(board.get_player(ids[0]).unwrap().wins, 0);
}

#[test]
fn rematch_advances_dealer() {
    let (board, ids) = board_with(&["a", "b"]);
    board.start_game().unwrap();
    assert_eq!(board.dealer(), Some(ids[0]));

    board.rematch().unwrap();
    assert_eq!(board.dealer(), Some(ids[1]));
}

#[test]
fn reset_all_returns_to_empty_default_but_keeps_history() {
    let (board, ids) = board_with(&["a", "b"]);
    board.start_game().unwrap();
    board.record_score(ids[0], "50", false, false).unwrap();

    board.reset_all();
    assert_eq!(board.player_count(), 0);
    assert!(!board.is_started());
    assert_eq!(board.round(), 1);

    // The pre-reset snapshot is still there to undo back into.
    board.undo().unwrap();
    assert_eq!(board.player_count(), 2);
    assert!(board.is_started());
    assert_eq!(board.get_player(ids[0]).unwrap().score, 50);
}

#[test]
fn undo_restores_exact_pre_transition_state() {
    let (board, ids) = board_with(&["Alice", "Bob"]);
    board.start_game().unwrap();
    board.record_score(ids[0], "40", true, false).unwrap();
    board.next_round().unwrap();

    let before: BoardState = board.state();
    board.record_score(ids[1], "7", false, false).unwrap();
    assert_ne!(board.state(), before);

    board.undo().unwrap();
    assert_eq!(board.state(), before);
}

#[test]
fn undo_on_empty_history_is_rejected() {
    let board = board();
    assert_eq!(board.undo().unwrap_err(), UndoError::NothingToUndo);
}

#[test]
fn history_is_bounded_at_five() {
    let (board, ids) = board_with(&["Alice"]);

    // 1 snapshot from the add, then 7 scoring mutations: 8 total pushes.
    for round in 1..=7 {
        board
            .record_score(ids[0], &round.to_string(), false, false)
            .unwrap();
    }
    assert_eq!(board.history_len(), 5);

    for _ in 0..5 {
        board.undo().unwrap();
    }
    assert_eq!(board.undo().unwrap_err(), UndoError::NothingToUndo);

    // Five undos walked back the last five deltas (3+4+5+6+7 = 25 undone).
    assert_eq!(board.get_player(ids[0]).unwrap().score, 1 + 2);
}

#[test]
fn ids_stay_unique_across_undo() {
    let board = board();
    let first = board.add_player("Alice").unwrap();
    board.undo().unwrap();

    let second = board.add_player("Bob").unwrap();
    assert_ne!(first, second);
}

#[test]
fn projection_is_idempotent() {
    let (board, ids) = board_with(&["A", "B", "C"]);
    board.start_game().unwrap();
    board.record_score(ids[1], "120", false, false).unwrap();
    board.record_score(ids[2], "80", true, false).unwrap();

    let first = board.view();
    let second = board.view();
    assert_eq!(first, second);

    let ranks: Vec<usize> = first.players.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![3, 1, 2]);
}

#[test]
fn view_marks_winners_and_dealer() {
    let (board, ids) = board_with(&["A", "B"]);
    board.start_game().unwrap();
    board.record_score(ids[0], "205", false, false).unwrap();
    board.next_round().unwrap();

    let view = board.view();
    assert!(view.players[0].is_winner);
    assert!(!view.players[0].is_dealer);
    assert!(view.players[1].is_dealer);

    let stats = view.stats.unwrap();
    assert_eq!(stats.total, 205);
    assert_eq!(stats.average, 102);
    assert_eq!(stats.leader_gap, 205);
}

#[test]
fn from_state_seeds_id_counter_past_persisted_ids() {
    let mut state = BoardState::default();
    state.players.push(Player::new(PlayerId(4), "Alice"));
    state.players.push(Player::new(PlayerId(9), "Bob"));

    let board = Scoreboard::from_state(BoardOptions::default(), state);
    let fresh = board.add_player("Carol").unwrap();
    assert_eq!(fresh, PlayerId(10));
}

#[test]
fn options_builder_sets_fields() {
    let options = BoardOptions::default()
        .with_win_threshold(300)
        .with_flip_bonus(10)
        .with_max_players(4)
        .with_undo_depth(2);

    assert_eq!(options.win_threshold, 300);
    assert_eq!(options.flip_bonus, 10);
    assert_eq!(options.max_players, 4);
    assert_eq!(options.undo_depth, 2);

    let board = Scoreboard::new(options);
    let id = board.add_player("Alice").unwrap();
    board.record_score(id, "5", true, false).unwrap();
    assert_eq!(board.get_player(id).unwrap().score, 15);
}
