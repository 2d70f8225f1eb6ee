#![allow(dead_code, clippy::cast_precision_loss)]

use clap::{Args, Parser, Subcommand, ValueEnum};
use core::fmt;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use sudoku_solver::sudoku::driver::has_sufficient_clues;
use sudoku_solver::sudoku::grid::{CELLS, EXAMPLE_HARD, Grid};
use sudoku_solver::sudoku::search::Backtrack;
use sudoku_solver::sudoku::solver::{
    DefaultConfig, FixedOrderConfig, SolveStats, Solver,
};
use sudoku_solver::sudoku::validate;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the sudoku solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "A configurable Sudoku solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file to solve.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `example`,
    /// `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the sudoku solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file: 81 cells in row-major order, `0`/`.`/`_` for
    /// blanks, `#` or `c` comment lines ignored.
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text (e.g. "53..7...." and so on for
    /// 81 cells).
    Text {
        /// Literal puzzle input as a string.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve the built-in example puzzle (The Guardian #5,158, hard).
    Example {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file under a directory.
    Dir {
        /// Path to the directory to sweep.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable printing of performance and search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Enable printing of the parsed input grid before solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) print_input: bool,

    /// Specifies the blank-selection strategy used by the search.
    #[arg(long, default_value_t = SelectionType::MostConstrained)]
    pub(crate) selection: SelectionType,
}

/// The blank-selection strategies exposed on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum SelectionType {
    /// Fill the blank with the fewest candidates first.
    #[default]
    MostConstrained,
    /// Fill blanks in row-major order.
    FixedOrder,
}

impl fmt::Display for SelectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MostConstrained => write!(f, "most-constrained"),
            Self::FixedOrder => write!(f, "fixed-order"),
        }
    }
}

/// Reads and parses a puzzle file.
///
/// # Errors
///
/// If the file cannot be read or does not hold exactly 81 cells.
pub(crate) fn parse_grid_file(path: &Path) -> Result<Grid, String> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| format!("Unable to read {}: {e}", path.display()))?;
    Grid::from_text(&text).map_err(|e| format!("{}: {e}", path.display()))
}

/// Runs the configured search engine over a private copy of `puzzle`,
/// returning the solution (if any) together with the search statistics.
fn run_engine(puzzle: &Grid, selection: SelectionType) -> (Option<Grid>, SolveStats) {
    match selection {
        SelectionType::MostConstrained => {
            let mut engine: Backtrack<DefaultConfig> = Solver::new(puzzle.clone());
            let solution = engine.solve();
            (solution, engine.stats())
        }
        SelectionType::FixedOrder => {
            let mut engine: Backtrack<FixedOrderConfig> = Solver::new(puzzle.clone());
            let solution = engine.solve();
            (solution, engine.stats())
        }
    }
}

/// Solve a puzzle file.
///
/// # Errors
///
/// If the file doesn't exist or doesn't parse.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let grid = parse_grid_file(path)?;
    let parse_time = time.elapsed();

    solve_and_report(&grid, common, Some(path), parse_time);
    Ok(())
}

/// Solve a puzzle given as literal text.
///
/// # Errors
///
/// If the text doesn't parse as 81 cells.
pub(crate) fn solve_text(input: &str, common: &CommonOptions) -> Result<(), String> {
    let time = Instant::now();
    let grid = Grid::from_text(input).map_err(|e| e.to_string())?;
    let parse_time = time.elapsed();

    solve_and_report(&grid, common, None, parse_time);
    Ok(())
}

/// Solve the built-in example puzzle.
pub(crate) fn solve_example(common: &CommonOptions) {
    println!("Input puzzle: Sudoku 5,158 hard from The Guardian");
    let grid = Grid::new(EXAMPLE_HARD).expect("the example puzzle is well-formed");
    solve_and_report(&grid, common, None, Duration::ZERO);
}

/// Solves a directory of puzzle files.
///
/// Iterates over all `.sudoku` files under the directory, parses each file,
/// solves it, and reports the results.
///
/// # Errors
///
/// If the provided path is not a directory, or a puzzle file cannot be read
/// or parsed.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!(
            "Provided path is not a directory: {}",
            path.display()
        ));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }

        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        solve_file(file_path, common)?;
    }

    Ok(())
}

/// Checks the input, reports status, solves and prints the outcome.
///
/// Status messages and the all `-1` sentinel grid are the uniform failure
/// surface: an invalid or under-clued input short-circuits before the
/// search, an exhausted search reports after it, and in each case the
/// sentinel is rendered through the same display path as a solution.
pub(crate) fn solve_and_report(
    puzzle: &Grid,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    if common.print_input {
        println!("{puzzle}");
    }

    if !validate::is_valid(puzzle) {
        println!("Input not valid.");
        println!("{}", Grid::sentinel());
        return;
    }

    if !has_sufficient_clues(puzzle) {
        println!("Input not solvable.");
        println!("{}", Grid::sentinel());
        return;
    }

    println!("Input valid and solvable, solving...");

    epoch::advance().unwrap();

    let time = Instant::now();
    let (solution, search_stats) = run_engine(puzzle, common.selection);
    let elapsed = time.elapsed();

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    let solved = solution.is_some();
    match solution {
        Some(solution) => {
            println!("Solution found in {:.6} seconds:", elapsed.as_secs_f64());
            println!("{solution}");
        }
        None => {
            println!("No solution found");
            println!("{}", Grid::sentinel());
        }
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            puzzle,
            &search_stats,
            allocated_mib,
            resident_mib,
            solved,
        );
    }
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
pub(crate) fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of puzzle and search statistics.
#[allow(clippy::too_many_arguments)]
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    puzzle: &Grid,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
    solved: bool,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Puzzle Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Clues", puzzle.filled_cells());
    stat_line("Blanks", CELLS - puzzle.filled_cells());

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Forced assignments", s.forced, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line_with_rate("Validations", s.validations, elapsed_secs);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");

    if solved {
        println!("\nSOLVED");
    } else {
        println!("\nUNSOLVED");
    }
}
