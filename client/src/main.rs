mod config;
mod runner;
mod terminal_ui;

use clap::{Parser, ValueEnum};
use common::config::Validate;
use common::games::SessionRng;
use common::games::tictactoe::{Difficulty, FirstPlayerMode};
use common::{log, logger};

use config::{get_config_manager, Config};
use runner::TerminalRunner;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FirstPlayerArg {
    GoFirst,
    GoSecond,
    CoinToss,
}

impl From<FirstPlayerArg> for FirstPlayerMode {
    fn from(arg: FirstPlayerArg) -> Self {
        match arg {
            FirstPlayerArg::GoFirst => FirstPlayerMode::GoFirst,
            FirstPlayerArg::GoSecond => FirstPlayerMode::GoSecond,
            FirstPlayerArg::CoinToss => FirstPlayerMode::CoinToss,
        }
    }
}

#[derive(Parser)]
#[command(name = "tictactoe", about = "Tic-Tac-Toe against a minimax opponent")]
struct Args {
    /// Probability (0..1) that the opponent plays the optimal move
    #[arg(long)]
    difficulty: Option<f64>,

    /// Skip the start menu
    #[arg(long, value_enum)]
    first: Option<FirstPlayerArg>,

    /// Seed for reproducible games
    #[arg(long)]
    seed: Option<u64>,

    #[arg(long)]
    use_log_prefix: bool,

    /// Write the difficulty and first player in effect at exit to the config file
    #[arg(long)]
    save_config: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let config_manager = get_config_manager();
    let (config, config_error) = match config_manager.get_config() {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    let prefix = if args.use_log_prefix || config.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        None
    };
    logger::init_logger(prefix);

    if let Some(e) = config_error {
        log!("Failed to load config, using defaults: {}", e);
    }

    let difficulty = match args.difficulty {
        Some(value) => Difficulty::new(value)?,
        None => config.difficulty,
    };
    let first_player = args.first.map(FirstPlayerMode::from).or(config.first_player);

    let mut rng = match args.seed {
        Some(seed) => SessionRng::new(seed),
        None => SessionRng::from_random(),
    };
    log!("Session seed {}", rng.seed());

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let final_difficulty = {
        let mut runner = TerminalRunner::new(stdin.lock(), stdout.lock(), &mut rng);
        runner.run(difficulty, first_player)?
    };

    if args.save_config {
        let updated = Config {
            difficulty: final_difficulty,
            first_player,
            ..config
        };
        updated.validate()?;
        config_manager.set_config(&updated)?;
        log!("Config saved");
    }

    Ok(())
}
