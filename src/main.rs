#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use std::collections::BTreeSet;

#[cfg(feature = "std")]
use clap::{Args, Parser, Subcommand};
#[cfg(feature = "std")]
use rand::rngs::SmallRng;
#[cfg(feature = "std")]
use rand::SeedableRng;
#[cfg(feature = "std")]
use skirmish::{
    init_logging, run_session, ui, CellState, Coordinate, MatchConfig, MatchEngine,
    RandomTargeting, SessionOutcome, TargetSelector, DEFAULT_BOARD_SIZE, DEFAULT_NUM_SHIPS,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
#[cfg(feature = "std")]
struct MatchArgs {
    #[arg(long, default_value_t = DEFAULT_BOARD_SIZE, help = "Board edge length (1-26)")]
    size: usize,
    #[arg(long, default_value_t = DEFAULT_NUM_SHIPS, help = "Ships per side")]
    ships: usize,
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play against the scripted opponent
    Play(MatchArgs),
    /// Let random targeting play your side and show the result
    Watch(MatchArgs),
}

#[cfg(feature = "std")]
fn build_engine(args: MatchArgs) -> anyhow::Result<MatchEngine> {
    let config = MatchConfig::new(args.size, args.ships)?;
    if let Some(s) = args.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let rng = match args.seed {
        Some(s) => SmallRng::seed_from_u64(s),
        None => {
            let mut seed_rng = rand::rng();
            SmallRng::from_rng(&mut seed_rng)
        }
    };
    Ok(MatchEngine::new(config, rng)?)
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command {
        Commands::Play(args) => {
            let mut engine = build_engine(args)?;
            println!("===================================");
            println!(" 🚢 Welcome to Battleship Game 🚢 ");
            println!("===================================");
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            let outcome = run_session(&mut engine, stdin.lock(), stdout.lock())?;
            log::info!("session ended: {:?}", outcome);
        }
        Commands::Watch(args) => {
            let mut engine = build_engine(args)?;
            let outcome = watch(&mut engine, args.seed)?;
            println!("{}", ui::render_snapshot(&engine.snapshot()));
            println!("{}", ui::outcome_banner(outcome));
        }
    }
    Ok(())
}

#[cfg(feature = "std")]
fn watch(engine: &mut MatchEngine, seed: Option<u64>) -> anyhow::Result<SessionOutcome> {
    let mut rng = match seed {
        Some(s) => SmallRng::seed_from_u64(s.wrapping_add(1)),
        None => SmallRng::from_rng(&mut rand::rng()),
    };
    let mut selector = RandomTargeting::new();
    let size = engine.config().board_size();
    while !engine.is_over() {
        let tried: BTreeSet<Coordinate> = (0..size)
            .flat_map(|r| (0..size).map(move |c| Coordinate::new(r, c)))
            .filter(|c| engine.opponent_grid().cell(*c) != Some(CellState::Unknown))
            .collect();
        let coord = selector
            .select_target(&mut rng, size, &tried)
            .ok_or_else(|| anyhow::anyhow!("no targets left"))?;
        let report = engine.play_round(coord)?;
        println!("{}", ui::player_shot_message(&report.player));
        if let Some(shot) = report.opponent {
            println!("{}", ui::opponent_shot_message(&shot));
        }
    }
    engine
        .outcome()
        .map(SessionOutcome::from)
        .ok_or_else(|| anyhow::anyhow!("match did not finish"))
}
