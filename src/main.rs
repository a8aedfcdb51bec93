#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use mnk::{
    cases::{run_cases, CANONICAL_CASES},
    cli::run_interactive,
    init_logging, GameConfig, GameEngine, WinRule, DEFAULT_HEIGHT, DEFAULT_K, DEFAULT_WIDTH,
};

#[cfg(feature = "std")]
use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
#[cfg(feature = "std")]
enum RuleArg {
    /// A line must be exactly k long.
    Exact,
    /// A line of k or more wins.
    AtLeast,
}

#[cfg(feature = "std")]
impl From<RuleArg> for WinRule {
    fn from(rule: RuleArg) -> Self {
        match rule {
            RuleArg::Exact => WinRule::Exact,
            RuleArg::AtLeast => WinRule::AtLeast,
        }
    }
}

#[derive(Subcommand)]
#[cfg(feature = "std")]
enum Commands {
    /// Play one game with both players at this terminal.
    Play {
        #[arg(long, default_value_t = DEFAULT_WIDTH, value_parser = parse_dimension)]
        width: usize,
        #[arg(long, default_value_t = DEFAULT_HEIGHT, value_parser = parse_dimension)]
        height: usize,
        #[arg(short, default_value_t = DEFAULT_K, help = "Marks in a row needed to win")]
        k: usize,
        #[arg(long, value_enum, default_value_t = RuleArg::Exact)]
        win_rule: RuleArg,
    },
    /// Replay the canonical tic-tac-toe games and check their outcomes.
    #[command(alias = "tests")]
    Cases,
}

#[cfg(feature = "std")]
fn parse_dimension(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Play {
        width: DEFAULT_WIDTH,
        height: DEFAULT_HEIGHT,
        k: DEFAULT_K,
        win_rule: RuleArg::Exact,
    }) {
        Commands::Play {
            width,
            height,
            k,
            win_rule,
        } => {
            let config = GameConfig::new(width, height, k).with_win_rule(win_rule.into());
            if !config.is_winnable() {
                log::warn!(
                    "k={} exceeds both dimensions of a {}x{} board; every game will be a draw",
                    k,
                    width,
                    height
                );
            }
            log::debug!("starting game with {:?}", config);
            let mut engine = GameEngine::new(config);
            let stdin = std::io::stdin();
            let stdout = std::io::stdout();
            run_interactive(&mut engine, stdin.lock(), stdout.lock())?;
        }
        Commands::Cases => {
            for report in run_cases(&CANONICAL_CASES) {
                if !report.passed() {
                    return Err(anyhow::anyhow!(
                        "Test {} ({}) failed: expected {:?}, got {:?}",
                        report.index,
                        report.name,
                        report.expected,
                        report.actual
                    ));
                }
                println!("Test {} passed.", report.index);
            }
        }
    }
    Ok(())
}
