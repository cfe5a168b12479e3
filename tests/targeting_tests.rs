use std::collections::BTreeSet;

use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use skirmish::{
    Coordinate, Fleet, MatchConfig, MatchEngine, RandomTargeting, SweepTargeting, TargetSelector,
};

#[test]
fn test_random_targeting_covers_board_once() {
    let mut rng = SmallRng::seed_from_u64(5);
    let mut selector = RandomTargeting::new();
    let mut tried = BTreeSet::new();
    for _ in 0..64 {
        let coord = selector.select_target(&mut rng, 8, &tried).unwrap();
        assert!(coord.in_bounds(8));
        assert!(tried.insert(coord), "{} selected twice", coord);
    }
    assert_eq!(selector.select_target(&mut rng, 8, &tried), None);
}

#[test]
fn test_random_targeting_finds_last_cell() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut tried: BTreeSet<Coordinate> = (0..8)
        .flat_map(|r| (0..8).map(move |c| Coordinate::new(r, c)))
        .collect();
    tried.remove(&Coordinate::new(6, 3));
    let pick = RandomTargeting::new().select_target(&mut rng, 8, &tried);
    assert_eq!(pick, Some(Coordinate::new(6, 3)));
}

#[test]
fn test_sweep_targeting_order() {
    let mut rng = SmallRng::seed_from_u64(0);
    let mut sweep = SweepTargeting::new();
    let mut tried = BTreeSet::new();
    let mut order = Vec::new();
    while let Some(c) = sweep.select_target(&mut rng, 2, &tried) {
        tried.insert(c);
        order.push(c);
    }
    assert_eq!(
        order,
        vec![
            Coordinate::new(0, 0),
            Coordinate::new(0, 1),
            Coordinate::new(1, 0),
            Coordinate::new(1, 1)
        ]
    );
}

/// Always proposes the same cell, to check the engine's repeat guard.
struct Stubborn;

impl TargetSelector for Stubborn {
    fn select_target(
        &mut self,
        _rng: &mut SmallRng,
        _board_size: usize,
        _tried: &BTreeSet<Coordinate>,
    ) -> Option<Coordinate> {
        Some(Coordinate::new(0, 0))
    }
}

#[test]
fn test_engine_redraws_when_selector_repeats() {
    let config = MatchConfig::new(3, 1).unwrap();
    let ship = |r, c| Fleet::from_coords(3, [Coordinate::new(r, c)]).unwrap();
    let mut engine = MatchEngine::from_fleets(
        config,
        ship(2, 2),
        ship(2, 2),
        SmallRng::seed_from_u64(8),
        Box::new(Stubborn),
    )
    .unwrap();

    for r in 0..2 {
        for c in 0..3 {
            if engine.is_over() {
                break;
            }
            engine.play_round(Coordinate::new(r, c)).unwrap();
        }
    }
    let tried = engine.opponent_tried();
    assert!(tried.contains(&Coordinate::new(0, 0)));
    assert_eq!(tried.len(), engine.snapshot().opponent_shots);
    assert_eq!(engine.player_grid().unknown_count(), 9 - tried.len());
}

proptest! {
    #[test]
    fn random_targeting_avoids_tried(seed in any::<u64>(), size in 1usize..=10, mask in any::<u128>()) {
        let tried: BTreeSet<Coordinate> = (0..size * size)
            .filter(|i| mask & (1u128 << i) != 0)
            .map(|i| Coordinate::new(i / size, i % size))
            .collect();
        let mut rng = SmallRng::seed_from_u64(seed);
        let pick = RandomTargeting::new().select_target(&mut rng, size, &tried);
        match pick {
            Some(c) => {
                prop_assert!(c.in_bounds(size));
                prop_assert!(!tried.contains(&c));
            }
            None => prop_assert_eq!(tried.len(), size * size),
        }
    }
}
