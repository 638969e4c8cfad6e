//! Word Finder - CLI
//!
//! Finds words traced through adjacent cells of a letter grid and solves
//! multi-word grid puzzles, with CLI and TUI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};
use wordfinder::{
    commands::{
        BenchmarkConfig, FindConfig, SolveConfig, find_in_grid, run_benchmark, solve_grid,
    },
    core::Grid,
    dictionary::{
        Dictionary, WordList,
        loader::{embedded, load_from_file, load_system},
    },
    input::load_grid,
    logging::init_logger,
    output::{print_benchmark_result, print_find_result, print_grid, print_solve_result},
    solver::Solver,
};

#[derive(Parser)]
#[command(
    name = "wordfinder",
    about = "Find words in a letter grid by tracing paths through adjacent cells",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary: 'system', 'embedded', 'none', or path to file
    /// [default: 'none' for find and benchmark, 'system' for solve and play]
    #[arg(short, long, global = true, env = "WORDFINDER_DICTIONARY")]
    dictionary: Option<String>,

    /// Log debug details to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List the words of a given length traceable in a grid
    Find {
        /// CSV file with one grid row per line, one letter (or nothing) per field
        grid: PathBuf,

        /// Number of letters per word
        length: usize,

        /// Only words starting with these letters
        #[arg(short, long, default_value = "")]
        prefix: String,

        /// Keep one entry per path instead of one per word
        #[arg(long)]
        all: bool,

        /// Print at most this many words
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Find word sequences of the given lengths, removing each word in turn
    Solve {
        /// CSV file with one grid row per line, one letter (or nothing) per field
        grid: PathBuf,

        /// Length of each word, in the order they are removed
        #[arg(required = true)]
        lengths: Vec<usize>,

        /// Search first-word branches in parallel
        #[arg(long)]
        parallel: bool,

        /// Keep one solution per path combination instead of one per word sequence
        #[arg(long)]
        all: bool,

        /// Print at most this many solutions
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Interactive TUI mode
    Play {
        /// CSV file with one grid row per line, one letter (or nothing) per field
        grid: PathBuf,
    },

    /// Benchmark path search on random grids
    Benchmark {
        #[arg(long, default_value = "5")]
        rows: usize,

        #[arg(long, default_value = "5")]
        cols: usize,

        /// Number of random grids to search
        #[arg(short = 'n', long, default_value = "20")]
        trials: usize,

        /// Path length to search for
        #[arg(long, default_value = "5")]
        length: usize,

        /// Probability of an empty cell
        #[arg(long, default_value = "0.0")]
        blank_ratio: f64,

        /// Seed for grid generation
        #[arg(long)]
        seed: Option<u64>,
    },
}

impl Commands {
    /// Dictionary mode used when -d is not given
    ///
    /// `find` lists every traceable string, like a plain grid dump; the game
    /// modes filter through the system word list.
    const fn default_dictionary(&self) -> &'static str {
        match self {
            Self::Find { .. } | Self::Benchmark { .. } => "none",
            Self::Solve { .. } | Self::Play { .. } => "system",
        }
    }
}

/// Load the dictionary selected by the -d flag
///
/// - "system": first system word list found, else the embedded list
/// - "embedded": the list compiled into the binary
/// - "none": no filtering, every letter sequence is a word
/// - "<path>": one word per line
fn load_dictionary(mode: &str) -> Result<Option<WordList>> {
    let words = match mode {
        "none" => return Ok(None),
        "system" => load_system().context("Failed to read the system word list")?,
        "embedded" => embedded(),
        path => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {path}"))?,
    };
    info!("Dictionary: {} words ({mode})", words.len());
    Ok(Some(words))
}

fn read_grid_file(path: &Path) -> Result<Grid> {
    load_grid(path).with_context(|| format!("Failed to load grid from {}", path.display()))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let mode = cli
        .dictionary
        .as_deref()
        .unwrap_or_else(|| cli.command.default_dictionary());
    let dictionary = load_dictionary(mode)?;
    let solver = Solver::new(dictionary.as_ref().map(|words| words as &dyn Dictionary));

    match cli.command {
        Commands::Find {
            grid,
            length,
            prefix,
            all,
            limit,
        } => run_find_command(&grid, length, prefix, all, limit, &solver),
        Commands::Solve {
            grid,
            lengths,
            parallel,
            all,
            limit,
        } => run_solve_command(
            &grid,
            lengths,
            all,
            limit,
            &solver.with_parallel(parallel),
        ),
        Commands::Play { grid } => run_play_command(&grid, solver),
        Commands::Benchmark {
            rows,
            cols,
            trials,
            length,
            blank_ratio,
            seed,
        } => {
            let config = BenchmarkConfig {
                rows,
                cols,
                trials,
                word_length: length,
                blank_ratio,
                seed,
            };
            run_benchmark_command(&config, &solver)
        }
    }
}

fn run_find_command(
    path: &Path,
    length: usize,
    prefix: String,
    all: bool,
    limit: Option<usize>,
    solver: &Solver,
) -> Result<()> {
    let grid = read_grid_file(path)?;

    let mut config = FindConfig::new(length, prefix);
    config.unique = !all;
    let result = find_in_grid(&grid, config, solver);

    print_find_result(&result, limit);
    Ok(())
}

fn run_solve_command(
    path: &Path,
    lengths: Vec<usize>,
    all: bool,
    limit: Option<usize>,
    solver: &Solver,
) -> Result<()> {
    let grid = read_grid_file(path)?;
    print_grid(&grid);

    let mut config = SolveConfig::new(lengths);
    config.unique = !all;
    let result = solve_grid(&grid, config, solver)?;

    print_solve_result(&result, limit);
    Ok(())
}

fn run_play_command(path: &Path, solver: Solver) -> Result<()> {
    use wordfinder::interactive::{App, run_tui};

    let grid = read_grid_file(path)?;
    let app = App::new(grid, solver);
    run_tui(app)
}

fn run_benchmark_command(config: &BenchmarkConfig, solver: &Solver) -> Result<()> {
    println!(
        "Running benchmark on {} random {}x{} grids...",
        config.trials, config.rows, config.cols
    );

    let result = run_benchmark(config, solver, true)?;
    print_benchmark_result(&result);
    Ok(())
}
