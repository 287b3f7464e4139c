use std::collections::BTreeSet;

use rand::{Rng, SeedableRng, rngs::StdRng};
use sumcross::*;

fn seeded(seed: u64) -> Game {
    Game::new(GameConfig { seed: Some(seed), ..GameConfig::default() })
}

#[test]
fn full_round_from_selection_to_reset() {
    let mut game = seeded(5);
    game.set_max_select(3).unwrap();
    let picks = [
        TileId::new(6, 0).unwrap(),
        TileId::new(7, 0).unwrap(),
        TileId::new(7, 1).unwrap(),
    ];
    for &p in &picks {
        game.click(p).unwrap();
    }
    assert_eq!(format_status(&game), "Selected: 3/3");

    let roll = game.start_game().unwrap();
    assert!((2..=12).contains(&roll.sum()));
    assert_eq!(game.phase(), Phase::Playing);
    let expected: BTreeSet<_> = picks.iter().copied().collect();
    assert_eq!(game.confirmed(), &expected);

    // Honor system: any confirmed tile can be crossed regardless of the roll.
    game.click(picks[0]).unwrap();
    game.click(picks[1]).unwrap();
    assert!(!game.check_win());
    assert_eq!(format_status(&game), "Remaining tiles: 1");
    game.roll_dice().unwrap();
    game.click(picks[2]).unwrap();
    assert!(game.check_win());
    assert!(controls(&game).show_reset);

    let kinds: Vec<_> = game.take_notifications().into_iter().map(|n| n.kind).collect();
    assert_eq!(
        kinds,
        vec![NotificationKind::DiceRolled, NotificationKind::DiceRolled, NotificationKind::Victory]
    );

    game.reset().unwrap();
    let snap = game.snapshot();
    assert_eq!(snap.phase, Phase::Selecting);
    assert!(snap.selected.is_empty() && snap.confirmed.is_empty() && snap.crossed.is_empty());
    assert!(snap.dice.is_none());
    assert!(!game.is_started());
}

#[test]
fn random_toggles_never_exceed_cap() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut game = seeded(1);
    for _ in 0..2000 {
        if rng.gen_bool(0.05) {
            let _ = game.set_max_select(rng.gen_range(0..=35));
        }
        let tile = TileId::new(rng.gen_range(2..=12), rng.gen_range(0..10)).unwrap();
        let before = game.selected().len();
        match game.toggle_select(tile) {
            Ok(true) => assert!(game.selected().len() <= game.max_select()),
            Ok(false) => assert_eq!(game.selected().len(), before - 1),
            Err(GameError::SelectionOverflow { max_select }) => {
                assert_eq!(max_select, game.max_select());
                assert_eq!(game.selected().len(), before);
            }
            Err(other) => panic!("unexpected error {other}"),
        }
    }
}

#[test]
fn cap_holds_when_never_lowered() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut game = seeded(2);
    game.set_max_select(4).unwrap();
    for _ in 0..500 {
        let tile = TileId::new(rng.gen_range(2..=12), rng.gen_range(0..10)).unwrap();
        let _ = game.toggle_select(tile);
        assert!(game.selected().len() <= 4);
    }
}

#[test]
fn hidden_cells_only_after_start() {
    let mut game = seeded(8);
    game.set_max_select(2).unwrap();
    game.click(TileId::new(2, 0).unwrap()).unwrap();
    game.click(TileId::new(12, 9).unwrap()).unwrap();
    assert!(grid::iter_tiles().all(|t| cell_view(&game, t).is_some()));
    game.start_game().unwrap();
    let visible: Vec<_> = grid::iter_tiles().filter_map(|t| cell_view(&game, t)).collect();
    assert_eq!(visible.len(), 2);
    assert!(visible.iter().all(|v| v.state == CellState::Uncrossed));
}

#[test]
fn snapshot_serializes_to_json() {
    let mut game = seeded(4);
    game.set_max_select(1).unwrap();
    game.click(TileId::new(9, 9).unwrap()).unwrap();
    game.start_game().unwrap();
    let json = serde_json::to_value(game.snapshot()).unwrap();
    assert_eq!(json["phase"], "Playing");
    assert_eq!(json["confirmed"][0]["number"], 9);
    assert_eq!(json["remaining"], 1);
    assert!(json["dice"]["first"].as_u64().is_some());
}

#[test]
fn dice_cover_all_faces_over_many_rolls() {
    let mut game = seeded(21);
    game.set_max_select(1).unwrap();
    game.click(TileId::new(5, 5).unwrap()).unwrap();
    game.start_game().unwrap();
    let mut faces = BTreeSet::new();
    for _ in 0..300 {
        let roll = game.roll_dice().unwrap();
        assert!((1..=6).contains(&roll.first) && (1..=6).contains(&roll.second));
        faces.insert(roll.first);
        faces.insert(roll.second);
    }
    assert_eq!(faces.len(), 6);
}
