use rand::rngs::SmallRng;
use rand::SeedableRng;
use skirmish::{
    ConfigError, Coordinate, Fleet, MatchConfig, MatchEngine, MatchError, MatchPhase, Outcome,
    RandomTargeting, ShotResult, SweepTargeting,
};

fn fleet(size: usize, coords: &[(usize, usize)]) -> Fleet {
    Fleet::from_coords(size, coords.iter().map(|&c| Coordinate::from(c))).unwrap()
}

fn scripted(size: usize, ships: usize, player: &[(usize, usize)], opponent: &[(usize, usize)]) -> MatchEngine {
    MatchEngine::from_fleets(
        MatchConfig::new(size, ships).unwrap(),
        fleet(size, player),
        fleet(size, opponent),
        SmallRng::seed_from_u64(1),
        Box::new(SweepTargeting::new()),
    )
    .unwrap()
}

#[test]
fn test_config_validation() {
    assert_eq!(MatchConfig::new(0, 1), Err(ConfigError::BoardTooSmall));
    assert_eq!(
        MatchConfig::new(27, 1),
        Err(ConfigError::BoardTooLarge { size: 27, max: 26 })
    );
    assert_eq!(MatchConfig::new(8, 0), Err(ConfigError::NoShips));
    assert_eq!(
        MatchConfig::new(2, 5),
        Err(ConfigError::TooManyShips { ships: 5, cells: 4 })
    );
    let config = MatchConfig::default();
    assert_eq!((config.board_size(), config.num_ships()), (8, 3));
    assert_eq!(config.cell_count(), 64);
}

#[test]
fn test_victory_without_opponent_turn() {
    let mut engine = scripted(2, 1, &[(1, 1)], &[(0, 0)]);
    assert_eq!(engine.phase(), MatchPhase::AwaitingPlayerShot);

    let report = engine.play_round(Coordinate::new(0, 0)).unwrap();
    assert_eq!(report.player.result, ShotResult::Hit);
    assert_eq!(report.opponent, None);
    assert_eq!(engine.phase(), MatchPhase::MatchOver(Outcome::Victory));
    assert!(engine.opponent_grid().is_defeated());
    assert!(engine.opponent_tried().is_empty());
    assert_eq!(engine.snapshot().opponent_shots, 0);
}

#[test]
fn test_turns_alternate() {
    let mut engine = scripted(3, 1, &[(2, 2)], &[(2, 2)]);

    assert_eq!(
        engine.run_opponent_turn().unwrap_err(),
        MatchError::NotOpponentTurn
    );
    assert_eq!(engine.submit_player_shot(Coordinate::new(0, 0)).unwrap(), ShotResult::Miss);
    assert_eq!(engine.phase(), MatchPhase::AwaitingOpponentShot);
    assert_eq!(
        engine.submit_player_shot(Coordinate::new(0, 1)).unwrap_err(),
        MatchError::NotPlayerTurn
    );

    let (coord, result) = engine.run_opponent_turn().unwrap();
    assert_eq!(coord, Coordinate::new(0, 0));
    assert_eq!(result, ShotResult::Miss);
    assert_eq!(engine.phase(), MatchPhase::AwaitingPlayerShot);
}

#[test]
fn test_repeat_shot_keeps_players_turn() {
    let mut engine = scripted(3, 1, &[(2, 2)], &[(2, 2)]);
    engine.play_round(Coordinate::new(1, 1)).unwrap();
    let before = engine.snapshot();

    let report = engine.play_round(Coordinate::new(1, 1)).unwrap();
    assert_eq!(report.player.result, ShotResult::AlreadyTried);
    assert_eq!(report.opponent, None);
    assert_eq!(engine.phase(), MatchPhase::AwaitingPlayerShot);

    let after = engine.snapshot();
    assert_eq!(after.target_view, before.target_view);
    assert_eq!(after.own_view, before.own_view);
    assert_eq!(after.player_shots, before.player_shots);
    assert_eq!(after.opponent_shots, before.opponent_shots);
}

#[test]
fn test_defeat_ends_match() {
    // sweep fires at (0,0) first, where the only player ship sits
    let mut engine = scripted(3, 1, &[(0, 0)], &[(2, 2)]);
    let report = engine.play_round(Coordinate::new(0, 0)).unwrap();
    let opponent = report.opponent.unwrap();
    assert_eq!(opponent.coord, Coordinate::new(0, 0));
    assert_eq!(opponent.result, ShotResult::Hit);
    assert_eq!(engine.outcome(), Some(Outcome::Defeat));

    assert_eq!(
        engine.submit_player_shot(Coordinate::new(2, 2)).unwrap_err(),
        MatchError::MatchOver
    );
    assert_eq!(engine.run_opponent_turn().unwrap_err(), MatchError::MatchOver);
}

#[test]
fn test_out_of_bounds_player_shot() {
    let mut engine = scripted(3, 1, &[(0, 0)], &[(2, 2)]);
    assert_eq!(
        engine.submit_player_shot(Coordinate::new(0, 3)).unwrap_err(),
        MatchError::OutOfBounds(Coordinate::new(0, 3))
    );
    assert_eq!(engine.phase(), MatchPhase::AwaitingPlayerShot);
}

#[test]
fn test_fleet_size_must_match_config() {
    let err = MatchEngine::from_fleets(
        MatchConfig::new(4, 2).unwrap(),
        fleet(4, &[(0, 0)]),
        fleet(4, &[(1, 1), (2, 2)]),
        SmallRng::seed_from_u64(3),
        Box::new(RandomTargeting::new()),
    )
    .err()
    .unwrap();
    assert_eq!(
        err,
        MatchError::FleetSizeMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn test_snapshot_counts() {
    let mut engine = scripted(4, 2, &[(3, 3), (3, 2)], &[(0, 1), (1, 0)]);
    engine.play_round(Coordinate::new(0, 1)).unwrap();

    let snap = engine.snapshot();
    assert_eq!(snap.opponent_ships_remaining, 1);
    assert_eq!(snap.player_ships_remaining, 2);
    assert_eq!(snap.player_shots, 1);
    assert_eq!(snap.opponent_shots, 1);
    assert_eq!(snap.last_player_shot.unwrap().result, ShotResult::Hit);
    assert_eq!(snap.last_opponent_shot.unwrap().coord, Coordinate::new(0, 0));
}

#[test]
fn test_random_match_is_reproducible() {
    let config = MatchConfig::default();
    let mut a = MatchEngine::new(config, SmallRng::seed_from_u64(99)).unwrap();
    let mut b = MatchEngine::new(config, SmallRng::seed_from_u64(99)).unwrap();
    assert_eq!(a.player_grid(), b.player_grid());
    assert_eq!(a.opponent_grid(), b.opponent_grid());

    for r in 0..8 {
        for c in 0..8 {
            if a.is_over() {
                break;
            }
            let ra = a.play_round(Coordinate::new(r, c)).unwrap();
            let rb = b.play_round(Coordinate::new(r, c)).unwrap();
            assert_eq!(ra, rb);
        }
    }
    assert_eq!(a.outcome(), b.outcome());
}
