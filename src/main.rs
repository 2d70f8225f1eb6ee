//! # SudokuSolver
//!
//! `SudokuSolver` is a configurable command-line Sudoku solver. It parses
//! 9×9 puzzles from files or plain text and solves them with a
//! candidate-guided backtracking search: the blank with the fewest remaining
//! candidate digits is filled first, forced cells are written in place and
//! undone on backtrack, and multi-candidate cells branch over independent
//! copies of the grid.
//!
//! ## Features
//!
//! -   **Multiple inputs**: puzzle files, plain-text puzzles, a built-in
//!     example, or a whole directory of `.sudoku` files.
//! -   **Configurable selection**: most-constrained-first (default) or
//!     row-major fixed order.
//! -   **Statistics**: parse time, solve time, decisions, forced
//!     assignments, backtracks, validations and memory usage.
//! -   **Memory management**: uses `tikv-jemallocator` for memory allocation
//!     and memory usage statistics.
//!
//! ## Usage
//!
//! ```sh
//! # Solve a puzzle file
//! sudoku_solver <path_to_puzzle_file>
//!
//! # Solve a puzzle file explicitly
//! sudoku_solver file --path puzzle.sudoku
//!
//! # Solve a puzzle given inline (81 cells, `.` or `0` for blanks)
//! sudoku_solver text --input "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//!
//! # Solve the built-in example puzzle
//! sudoku_solver example
//!
//! # Solve every .sudoku file under a directory
//! sudoku_solver dir --path puzzles/
//! ```
//!
//! Puzzles that are invalid ("Input not valid."), carry fewer than 17 clues
//! ("Input not solvable.") or admit no solution are answered with an all
//! `-1` grid in place of a solution.

use clap::{CommandFactory, Parser};

use crate::command_line::cli::{Cli, Commands};

mod command_line;

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// Main entry point of the sudoku solver application.
///
/// Parses command-line arguments, dispatches to the appropriate command
/// handler, and manages the overall execution flow.
fn main() {
    let cli = Cli::parse();

    // Handle the case where a path is provided globally without a
    // subcommand. This defaults to solving a puzzle file.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            if let Err(e) = command_line::cli::solve_file(&path, &cli.common) {
                eprintln!("{e}");
                std::process::exit(1);
            }
            return;
        }
    }

    let outcome = match cli.command {
        Some(Commands::File { path, common }) => command_line::cli::solve_file(&path, &common),

        Some(Commands::Text { input, common }) => command_line::cli::solve_text(&input, &common),

        Some(Commands::Example { common }) => {
            command_line::cli::solve_example(&common);
            Ok(())
        }

        Some(Commands::Dir { path, common }) => command_line::cli::solve_dir(&path, &common),

        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }

        None => {
            // This case is reached if no subcommand was provided and
            // `cli.path` was also None.
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    };

    if let Err(e) = outcome {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
