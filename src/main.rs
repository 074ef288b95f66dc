use anyhow::{Context, Result};
use clap::Parser;
use rand::Rng;
use std::{
    io::{self, stdin, BufRead, Write},
    path::{Path, PathBuf},
    str::FromStr,
};
use tracing_subscriber::EnvFilter;

mod bundled;
mod quiz;
mod route;
mod upload;
mod words;

use quiz::{MatchTest, Question};
use route::Route;
use words::WordStore;

#[derive(Parser, Debug)]
#[command(about = "Upload a word-pair list and run a match test against it")]
struct Args {
    /// Word list to upload before the first screen (`<source> - <target>` per line)
    #[arg(short, long)]
    file: Option<PathBuf>,
    /// Bundled word list to upload before the first screen
    #[arg(short, long, conflicts_with = "file")]
    list: Option<String>,
    /// Print the bundled word lists and exit
    #[arg(long, default_value = "false")]
    show_lists: bool,
    /// Screen to start on [default: /, or /match after a preloaded list]
    #[arg(short, long)]
    route: Option<Route>,
    /// Options offered per question
    #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u8).range(2..))]
    choices: u8,
}

enum Commands {
    Answer(String),
    Navigate(Route),
    Help,
    Words,
    Quit,
}

impl Commands {
    fn help() {
        println!("Available commands:");
        println!("  \\h        - Show this help message");
        println!("  \\w        - Show the current word list");
        println!("  \\q        - Quit");
        println!("  /upload  - Upload another word list");
        println!("  /match   - Start the match test");
        println!("  <answer> - Choice number or translation (on /match)");
        println!("  <path>   - File to upload, or :name for a bundled list (on /upload)");
    }
}

impl FromStr for Commands {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "\\h" => Ok(Commands::Help),
            "\\w" => Ok(Commands::Words),
            "\\q" => Ok(Commands::Quit),
            _ if s.starts_with('\\') => Err("Unknown command".to_string()),
            _ if s.starts_with('/') => Ok(match s.parse() {
                Ok(route) => Commands::Navigate(route),
                Err(_) => Commands::Answer(s.to_string()),
            }),
            _ => Ok(Commands::Answer(s.to_string())),
        }
    }
}

/// Reads the next non-blank line as a command, or `None` at end of input.
fn prompt(label: &str, input: &mut impl BufRead) -> Result<Option<Result<Commands, String>>> {
    loop {
        print!("{label}|> ");
        io::stdout().flush().context("Failed to flush stdout")?;

        let mut line = String::new();
        let read = input
            .read_line(&mut line)
            .context("Failed to read input line")?;
        if read == 0 {
            return Ok(None);
        }
        let line = line.trim();
        if !line.is_empty() {
            return Ok(Some(Commands::from_str(line)));
        }
    }
}

fn show_words(store: &WordStore) {
    if store.is_empty() {
        println!("No words uploaded yet.");
        return;
    }
    for (i, pair) in store.words().iter().enumerate() {
        println!("{:>3}. {} - {}", i + 1, pair.source, pair.target);
    }
    println!();
}

fn upload_input(store: &WordStore, input: &str) -> Result<usize, upload::UploadError> {
    match input.strip_prefix(':') {
        Some(name) => upload::upload_bundled(store, name),
        None => upload::upload_file(store, Path::new(input)),
    }
}

/// Returns the next route, or `None` to end the session.
fn upload_screen(store: &WordStore, input: &mut impl BufRead) -> Result<Option<Route>> {
    println!("\nUpload a word list: enter a file path, or :name for a bundled list.");
    loop {
        let Some(command) = prompt("upload ", input)? else {
            return Ok(None);
        };

        match command {
            Ok(Commands::Help) => Commands::help(),
            Ok(Commands::Words) => show_words(store),
            Ok(Commands::Quit) => return Ok(None),
            Ok(Commands::Navigate(route)) => return Ok(Some(route)),
            Ok(Commands::Answer(path)) => match upload_input(store, &path) {
                Ok(count) => {
                    println!("Loaded {count} word pairs.");
                    return Ok(Some(Route::Match));
                }
                Err(e) => eprintln!("Upload failed: {e}"),
            },
            Err(e) => eprintln!("Invalid command: {}. Type \\q to quit.", e),
        }
    }
}

fn ask(question: &Question) {
    println!("\n{}", question.source);
    for (i, choice) in question.choices.iter().enumerate() {
        println!("  {}. {}", i + 1, choice);
    }
}

fn match_screen<R: Rng>(
    store: &WordStore,
    choices: usize,
    rng: R,
    input: &mut impl BufRead,
) -> Result<Option<Route>> {
    let mut test = MatchTest::new(store.words(), choices, rng);
    if test.is_empty() {
        println!("No words uploaded yet.");
        return Ok(Some(Route::Upload));
    }
    println!("\nMatch test: {} words. Type '\\h' for commands.", test.len());

    while let Some(question) = test.next_question() {
        ask(&question);
        loop {
            let Some(command) = prompt("", input)? else {
                return Ok(None);
            };

            match command {
                Ok(Commands::Help) => Commands::help(),
                Ok(Commands::Words) => show_words(store),
                Ok(Commands::Quit) => return Ok(None),
                Ok(Commands::Navigate(route)) => return Ok(Some(route)),
                Ok(Commands::Answer(answer)) => {
                    let correct = question.check(&answer);
                    if correct {
                        println!("Correct!");
                    } else {
                        println!("Incorrect. The correct answer is: {}", question.correct());
                    }
                    test.record(correct);
                    break;
                }
                Err(e) => eprintln!("Invalid command: {}. Type \\q to quit.", e),
            }
        }
    }

    let score = test.score();
    println!("\nScore: {} / {}", score.correct, score.total);
    Ok(Some(Route::Upload))
}

fn run_session(
    store: &WordStore,
    start: Route,
    choices: usize,
    input: &mut impl BufRead,
) -> Result<()> {
    let mut route = start;
    loop {
        route = route.resolve();
        tracing::debug!(%route, "navigating");
        let next = match route {
            Route::Match => match_screen(store, choices, rand::rng(), input)?,
            _ => upload_screen(store, input)?,
        };
        match next {
            Some(next) => route = next,
            None => {
                println!("Quitting...");
                break Ok(());
            }
        }
    }
}

/// A preloaded list opens the match test unless a route was asked for;
/// a failed preload always lands on the upload screen.
fn start_route(requested: Option<Route>, preloaded: Option<bool>) -> Route {
    match (requested, preloaded) {
        (_, Some(false)) => Route::Upload,
        (Some(route), _) => route,
        (None, Some(true)) => Route::Match,
        (None, None) => Route::Home,
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("wordmatch=warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if args.show_lists {
        println!("Available lists: {}", bundled::names().join(", "));
        return Ok(());
    }

    let store = WordStore::new();

    let preload = match (&args.file, &args.list) {
        (Some(path), _) => Some(upload::upload_file(&store, path)),
        (None, Some(name)) => Some(upload::upload_bundled(&store, name)),
        (None, None) => None,
    };
    let preloaded = preload.map(|result| match result {
        Ok(count) => {
            println!("Loaded {count} word pairs.");
            true
        }
        Err(e) => {
            eprintln!("Upload failed: {e}");
            false
        }
    });
    let start = start_route(args.route, preloaded);

    run_session(&store, start, usize::from(args.choices), &mut stdin().lock())?;

    Ok(())
}
