use nines_core::NinesError;
use nines_core::game::{Game, HoleCount, PlayerCount};
use nines_core::store::{GameStore, MemoryStore};
use nines_core::test_helpers::{assert_totals_consistent, make_names, new_game_with_handicap};
use nines_engine::{
    add_hole_scores, create_game, edit_hole_scores, leader, net_score, results_summary, set_par,
    sorted_players, total_net_score,
};

/// Play `holes` through a store, saving after every transition like a UI would.
fn play_persisted(store: &mut MemoryStore, holes: &[Vec<u32>]) -> Game {
    for scores in holes {
        let game = store.load_game().expect("game saved before play");
        let next = add_hole_scores(&game, scores).unwrap();
        store.save_game(&next).unwrap();
    }
    store.load_game().unwrap()
}

#[test]
fn nine_hole_three_player_round() {
    let game = create_game(
        PlayerCount::Three,
        HoleCount::Nine,
        &make_names(3),
        &[None, Some(9.0), None],
        &[4, 3, 5, 4, 4, 3, 5, 4, 4],
    );
    let mut store = MemoryStore::new();
    store.save_game(&game).unwrap();

    let holes: Vec<Vec<u32>> = vec![
        vec![4, 5, 6],
        vec![3, 3, 4],
        vec![5, 6, 6],
        vec![4, 4, 4],
        vec![6, 5, 4],
        vec![3, 4, 5],
        vec![5, 5, 5],
        vec![4, 6, 5],
        vec![4, 4, 3],
    ];
    let done = play_persisted(&mut store, &holes);

    assert!(done.is_complete);
    assert_eq!(done.current_hole, 9);
    assert_totals_consistent(&done);
    let grand: u32 = done.players.iter().map(|p| p.total_points).sum();
    assert_eq!(grand, 81);

    // P1: 5 4 5 3 1 5 3 5 2 = 33
    // P2: 3 4 2 3 3 3 3 1 2 = 24
    // P3: 1 1 2 3 5 1 3 3 5 = 24
    let totals: Vec<u32> = done.players.iter().map(|p| p.total_points).collect();
    assert_eq!(totals, vec![33, 24, 24]);
    assert_eq!(leader(&done.players).unwrap().name, "P1");
    let order: Vec<&str> = sorted_players(&done.players)
        .iter()
        .map(|p| p.name.as_str())
        .collect();
    assert_eq!(order, vec!["P1", "P2", "P3"]);

    // A tenth hole changes nothing
    assert_eq!(add_hole_scores(&done, &[1, 1, 1]).unwrap(), done);
    assert!(results_summary(&done).contains("Winner: P1 - 33 points"));
}

#[test]
fn eighteen_hole_four_player_round_completes() {
    let mut game = create_game(PlayerCount::Four, HoleCount::Eighteen, &[], &[], &[]);
    for hole in 0..18u32 {
        assert!(!game.is_complete);
        assert_eq!(u32::from(game.current_hole), hole + 1);
        game = add_hole_scores(&game, &[4, 4 + hole % 2, 5, 6]).unwrap();
    }
    assert!(game.is_complete);
    assert_eq!(game.current_hole, 18);
    assert_eq!(game.holes_played(), 18);
    assert_totals_consistent(&game);
}

#[test]
fn failed_add_leaves_game_usable() {
    let game = create_game(PlayerCount::Four, HoleCount::Nine, &[], &[], &[]);
    let before = game.clone();
    assert!(matches!(
        add_hole_scores(&game, &[4, 5, 6]),
        Err(NinesError::InvalidInput { .. })
    ));
    assert_eq!(game, before);
    let next = add_hole_scores(&game, &[4, 5, 6, 7]).unwrap();
    assert_eq!(next.current_hole, 2);
}

#[test]
fn edit_then_continue_keeps_history_consistent() {
    let game = create_game(PlayerCount::Four, HoleCount::Nine, &[], &[], &[]);
    let game = add_hole_scores(&game, &[3, 4, 5, 6]).unwrap();
    let game = add_hole_scores(&game, &[4, 4, 5, 6]).unwrap();
    let game = add_hole_scores(&game, &[3, 5, 5, 5]).unwrap();

    let edited = edit_hole_scores(&game, 1, &[6, 5, 4, 3]).unwrap();
    assert_eq!(edited.players[0].points, vec![0, 3, 4]);
    assert_eq!(edited.players[3].points, vec![4, 1, 1]);
    assert_totals_consistent(&edited);

    let next = add_hole_scores(&edited, &[4, 4, 4, 4]).unwrap();
    assert_eq!(next.players[0].points, vec![0, 3, 4, 2]);
    assert_eq!(next.players[3].points, vec![4, 1, 1, 3]);
    assert_eq!(next.current_hole, 5);
    assert_totals_consistent(&next);

    // The hole in progress cannot be edited
    assert_eq!(edit_hole_scores(&next, 5, &[1, 2, 3, 4]).unwrap(), next);
}

#[test]
fn par_changes_survive_persistence() {
    let game = create_game(PlayerCount::Three, HoleCount::Nine, &[], &[], &[]);
    let game = set_par(&game, 4, 3);
    let game = add_hole_scores(&game, &[4, 5, 6]).unwrap();

    let mut store = MemoryStore::new();
    store.save_game(&game).unwrap();
    let loaded = store.load_game().unwrap();
    assert_eq!(loaded, game);
    assert_eq!(loaded.par(4), 3);

    let snapshot = Game::from_msgpack(&game.to_msgpack().unwrap()).unwrap();
    assert_eq!(snapshot, game);
}

#[test]
fn legacy_record_without_pars_or_handicaps_loads() {
    let mut store = MemoryStore::new();
    store.put_raw(
        r#"{
            "id": "game-legacy",
            "player_count": 3,
            "hole_count": 9,
            "players": [
                {"id": "player-1", "name": "Ana", "scores": [4, 4], "points": [4, 4], "total_points": 0},
                {"id": "player-2", "name": "Bo", "scores": [4, 5], "points": [4, 3]},
                {"id": "player-3", "name": "Cy", "scores": [5, 6], "points": [1, 1]}
            ],
            "current_hole": 3,
            "is_complete": false,
            "created_at": 1700000000000
        }"#,
    );
    let game = store.load_game().unwrap();
    assert_eq!(game.pars, vec![4; 9]);
    assert_eq!(game.players[0].total_points, 8);
    assert_totals_consistent(&game);

    let next = add_hole_scores(&game, &[4, 5, 6]).unwrap();
    assert_eq!(next.current_hole, 4);
    assert_eq!(next.players[0].total_points, 13);
}

#[test]
fn net_scores_over_a_round() {
    let game = new_game_with_handicap(PlayerCount::Three, HoleCount::Eighteen, 9.0);
    let game = (0..18).fold(game, |g, _| add_hole_scores(&g, &[4, 5, 6]).unwrap());
    let player = &game.players[0];

    let per_hole: i64 = player
        .scores
        .iter()
        .map(|&s| net_score(s, player.handicap, game.hole_count).unwrap())
        .sum();
    let total = total_net_score(&player.scores, player.handicap).unwrap();
    assert_eq!(per_hole, 54);
    assert_eq!(total, 63.0);
}
