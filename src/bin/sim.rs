use rand::{rngs::SmallRng, SeedableRng};
use serde_json::json;
use skirmish::{MatchConfig, MatchEngine, MatchPhase, SweepTargeting, TargetSelector};

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;

    // the scripted player sweeps row by row; the opponent uses its default policy
    let mut engine = MatchEngine::new(MatchConfig::default(), SmallRng::seed_from_u64(seed))?;
    let mut sweep = SweepTargeting::new();
    let mut sweep_rng = SmallRng::seed_from_u64(seed.wrapping_add(1));
    let mut tried = std::collections::BTreeSet::new();

    while !matches!(engine.phase(), MatchPhase::MatchOver(_)) {
        let size = engine.config().board_size();
        let coord = sweep
            .select_target(&mut sweep_rng, size, &tried)
            .ok_or_else(|| anyhow::anyhow!("sweep exhausted the board"))?;
        tried.insert(coord);
        engine.play_round(coord)?;
    }

    let snapshot = engine.snapshot();
    let result = json!({
        "outcome": engine.outcome(),
        "player_shots": snapshot.player_shots,
        "opponent_shots": snapshot.opponent_shots,
        "player_ships_remaining": snapshot.player_ships_remaining,
        "opponent_ships_remaining": snapshot.opponent_ships_remaining,
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
