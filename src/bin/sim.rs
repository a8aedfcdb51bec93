#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use mnk::{GameConfig, GameEngine, Mark, Outcome};
#[cfg(feature = "std")]
use rand::{rngs::SmallRng, Rng, SeedableRng};

/// Aggregate results of a batch of random playouts.
#[cfg(feature = "std")]
#[derive(Debug, Default, serde::Serialize)]
struct SimReport {
    config: GameConfig,
    seed: u64,
    games: usize,
    x_wins: usize,
    o_wins: usize,
    draws: usize,
    average_moves: f64,
}

/// Play one game choosing uniformly among the empty cells.
#[cfg(feature = "std")]
fn random_playout(config: GameConfig, rng: &mut SmallRng) -> anyhow::Result<(Outcome, usize)> {
    let mut engine = GameEngine::new(config);
    while engine.can_continue() {
        let open: Vec<(usize, usize)> = engine.board().empty_cells().collect();
        let (row, col) = open[rng.random_range(0..open.len())];
        engine.play(row, col).map_err(|e| anyhow::anyhow!(e))?;
    }
    let outcome = engine
        .result()
        .ok_or_else(|| anyhow::anyhow!("playout stopped without a result"))?;
    Ok((outcome, engine.board().move_count()))
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 || args.len() > 3 {
        eprintln!("Usage: {} <seed> [games]", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let games: usize = match args.get(2) {
        Some(n) => n.parse()?,
        None => 1000,
    };

    let mut rng = SmallRng::seed_from_u64(seed);
    let mut report = SimReport {
        config: GameConfig::standard(),
        seed,
        games,
        ..SimReport::default()
    };
    let mut total_moves = 0;
    for _ in 0..games {
        let (outcome, moves) = random_playout(report.config, &mut rng)?;
        total_moves += moves;
        match outcome {
            Outcome::Winner(Mark::X) => report.x_wins += 1,
            Outcome::Winner(Mark::O) => report.o_wins += 1,
            Outcome::Draw => report.draws += 1,
        }
    }
    if games > 0 {
        report.average_moves = total_moves as f64 / games as f64;
    }

    println!("{}", serde_json::to_string(&report)?);
    Ok(())
}
