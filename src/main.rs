use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;

use gridseek::errors::ParseError;
use gridseek::puzzle::Puzzle;
use gridseek::solver;

/// Word search puzzle solver
#[derive(Parser, Debug)]
#[command(
    author,
    version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"),
    about,
    long_about = None
)]
struct Cli {
    /// Path to the puzzle file (dimensions line, letter grid, then words)
    puzzle: String,

    /// Extra words to search for, in addition to those listed in the file
    #[arg(short, long = "word")]
    word: Vec<String>,

    /// Also print the grid cells each match passes through
    #[arg(short = 'p', long)]
    show_paths: bool,
}

/// Entry point of the gridseek CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    // Set up logging
    let debug_enabled = std::env::var("GRIDSEEK_DEBUG").is_ok();
    gridseek::log::init_logger(debug_enabled);

    if let Err(e) = try_main() {
        // Print the error message to stderr, with detailed formatting if it's a ParseError
        if let Some(parse_err) = e.downcast_ref::<ParseError>() {
            eprintln!("Error: {}", parse_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        // Exit explicitly with a nonzero code so scripts can detect failure
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the gridseek CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Load and parse the puzzle file.
/// 3. Search the grid for every target word, in all eight directions.
/// 4. Print each match on stdout.
/// 5. Print performance metrics (timings, counts) on stderr.
///
/// Returns `Ok(())` on success or an error (e.g., unreadable file, malformed
/// puzzle) which bubbles up to [`main`].
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let cli = Cli::parse();

    // 1. Load and parse the puzzle file
    let t_load = Instant::now();
    let puzzle = Puzzle::load_from_path(&cli.puzzle)?;
    let load_secs = t_load.elapsed().as_secs_f64();

    log::info!(
        "Loaded {} puzzle with {} words",
        puzzle.dimensions,
        puzzle.words.len()
    );

    // 2. Combine the file's word list with any extra words from the CLI
    let mut words = puzzle.words.clone();
    words.extend(cli.word.iter().map(|w| w.to_uppercase()));

    // 3. Search the grid
    let t_search = Instant::now();
    let found = solver::find_words(&puzzle.grid, &words);
    let search_secs = t_search.elapsed().as_secs_f64();

    // 4. Print each match on stdout
    for m in &found {
        println!("{m}");
        if cli.show_paths {
            let cells: Vec<String> = m.path().iter().map(ToString::to_string).collect();
            println!("  {}", cells.join(" "));
        }
    }

    // 5. Print diagnostics (grid size, timings, number of matches) to stderr
    eprintln!(
        "Searched {} grid for {} words in {:.3}s (loaded in {:.3}s); {} matches.",
        puzzle.dimensions,
        words.len(),
        search_secs,
        load_secs,
        found.len()
    );

    Ok(())
}
