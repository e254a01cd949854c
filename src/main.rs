//! Mastermind - CLI
//!
//! Play Mastermind against the computer, let it break your code, or measure
//! how many rounds its candidate elimination needs.

use anyhow::Result;
use clap::{Parser, Subcommand};
use mastermind_solver::{
    commands::{
        BenchmarkConfig, SolveConfig, run_assist, run_benchmark, run_play, seeded_rng, solve_code,
    },
    core::CodeSpace,
    game::GameConfig,
    output::{print_benchmark_result, print_solve_result},
};

#[derive(Parser)]
#[command(
    name = "mastermind",
    about = "Mastermind with a candidate-elimination codebreaker",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Seed for the random number generator (reproducible games)
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Maximum rounds per game
    #[arg(short, long, global = true, default_value = "10")]
    rounds: usize,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG overrides
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive game against the computer or another player (default)
    Play,

    /// The computer breaks a code you keep in your head
    Assist,

    /// The computer breaks the given code
    Solve {
        /// The secret code, e.g. 1234 or RYBG
        code: String,

        /// Show candidate counts for each step
        #[arg(long)]
        details: bool,
    },

    /// Play against every code and report round statistics
    Benchmark {
        /// Only play the first N codes
        #[arg(short = 'n', long)]
        count: Option<usize>,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let space = CodeSpace::shared();
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let config = GameConfig {
                max_rounds: cli.rounds,
            };
            run_play(space, config, cli.seed)
        }
        Commands::Assist => {
            let mut rng = seeded_rng(cli.seed);
            run_assist(space, &mut rng)?;
            Ok(())
        }
        Commands::Solve { code, details } => {
            let config = SolveConfig {
                max_rounds: cli.rounds,
                seed: cli.seed,
                ..SolveConfig::new(code)
            };
            let result = solve_code(config, space).map_err(|e| anyhow::anyhow!(e))?;
            print_solve_result(&result, details);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let config = BenchmarkConfig {
                limit: count,
                max_rounds: cli.rounds,
                seed: cli.seed,
                ..BenchmarkConfig::default()
            };
            let games = count.unwrap_or(space.len()).min(space.len());
            println!("Running benchmark on {games} codes...");
            let result = run_benchmark(space, &config);
            print_benchmark_result(&result);
            Ok(())
        }
    }
}
