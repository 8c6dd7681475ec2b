use clap::{Args, Parser, Subcommand};
use gridlife::config::ConfigOverrides;
use gridlife::render::{Renderer, ScreenRenderer, TextRenderer};
use gridlife::scheduler::Scheduler;
use gridlife::seeder::Seeder;
use gridlife::settings;
use gridlife::{Error, Grid, LifeConfig, Neighborhood, Result, TransitionEngine};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "gridlife")]
#[command(author = "Terminal Art Generator")]
#[command(version)]
#[command(about = "Terminal cellular automaton: Game of Life on a von Neumann neighborhood", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug). RUST_LOG takes precedence.
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed a board and keep printing generations until interrupted
    Run {
        #[command(flatten)]
        board: BoardArgs,

        /// Seconds to wait between generations
        #[arg(short, long)]
        interval: Option<f64>,

        /// Full-screen display (space pauses, +/- changes speed, q quits)
        #[arg(short, long)]
        live: bool,

        /// Character used for ON cells in live mode
        #[arg(short, long, default_value = "#")]
        char: char,
    },

    /// Advance a board without waiting and print only the final generation
    Step {
        #[command(flatten)]
        board: BoardArgs,
    },
}

#[derive(Args)]
struct BoardArgs {
    /// Smallest random board side
    #[arg(long, allow_negative_numbers = true)]
    min_size: Option<i64>,

    /// Largest random board side
    #[arg(long, allow_negative_numbers = true)]
    max_size: Option<i64>,

    /// Probability that a seeded cell starts ON
    #[arg(short, long, allow_negative_numbers = true)]
    probability: Option<f64>,

    /// Fixed board width (requires --height)
    #[arg(long, allow_negative_numbers = true)]
    width: Option<i64>,

    /// Fixed board height (requires --width)
    #[arg(long, allow_negative_numbers = true)]
    height: Option<i64>,

    /// Random seed for reproducibility
    #[arg(short, long)]
    seed: Option<u64>,

    /// Number of generations to compute (run: unlimited by default, step: 1)
    #[arg(short, long)]
    generations: Option<u64>,

    /// Neighbor scheme
    #[arg(short, long, value_enum)]
    neighborhood: Option<Neighborhood>,

    /// Start from a board file in the printed text format instead of a random one
    #[arg(long)]
    pattern: Option<PathBuf>,

    /// Settings file (defaults to <config dir>/gridlife/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl BoardArgs {
    fn overrides(&self, interval: Option<f64>) -> ConfigOverrides {
        ConfigOverrides {
            min_size: self.min_size,
            max_size: self.max_size,
            on_probability: self.probability,
            step_interval_seconds: interval,
            seed: self.seed,
            generations: self.generations,
            neighborhood: self.neighborhood,
            width: self.width,
            height: self.height,
        }
    }

    /// Settings file layered under the command line, validated
    fn resolve(&self, interval: Option<f64>) -> Result<LifeConfig> {
        let file = settings::load(self.config.as_deref())?;
        Ok(LifeConfig::from_overrides(file.merge(self.overrides(interval)))?)
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(match verbose {
            0 => "warn",
            1 => "warn,gridlife=info",
            _ => "warn,gridlife=debug",
        })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn load_pattern(path: &Path) -> Result<Grid> {
    let text = fs::read_to_string(path).map_err(|source| Error::Read { path: path.to_path_buf(), source })?;
    let grid = Grid::parse(&text)?;
    info!(path = %path.display(), width = grid.width(), height = grid.height(), "loaded pattern");
    Ok(grid)
}

fn starting_board(config: &LifeConfig, pattern: Option<&Path>) -> Result<Grid> {
    match pattern {
        Some(path) => load_pattern(path),
        None => Ok(Seeder::from_config(config)?.seed()),
    }
}

fn simulate<R: Renderer>(grid: Grid, config: &LifeConfig, renderer: R) -> Result<()> {
    let engine = TransitionEngine::new(config.neighborhood);
    let mut scheduler = Scheduler::new(grid, engine, renderer, config.step_interval())
        .with_limit(config.generations);
    scheduler.run()?;
    Ok(())
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Run { board, interval, live, char: draw_char } => {
            let config = board.resolve(interval)?;
            let grid = starting_board(&config, board.pattern.as_deref())?;
            if live {
                simulate(grid, &config, ScreenRenderer::new(draw_char)?)
            } else {
                simulate(grid, &config, TextRenderer::new(io::stdout().lock()))
            }
        }
        Commands::Step { board } => {
            let config = board.resolve(None)?;
            let grid = starting_board(&config, board.pattern.as_deref())?;
            let engine = TransitionEngine::new(config.neighborhood);
            let last = engine.run(&grid, config.generations.unwrap_or(1));
            let mut out = io::stdout().lock();
            write!(out, "{last}")?;
            out.flush()?;
            Ok(())
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
