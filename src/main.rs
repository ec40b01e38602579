//! Word Scramble - CLI
//!
//! Timed rounds in the terminal, plus commands for listing answers, checking
//! single words and benchmarking the enumeration pass.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::{debug, info};
use rand::seq::SliceRandom;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use word_scramble::{
    commands::{check_word, list_answers, run_benchmark, run_play},
    core::RootWord,
    dictionary::{DEFAULT_LOCALE, WordListValidator},
    game::{DEFAULT_ROUND_SECONDS, FileHighScore, GameSession, SessionConfig},
    output::{print_answers_result, print_benchmark_result, print_check_result},
    wordlists::{RootWordList, WordListError},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Find every word hidden in an 8-letter root word before time runs out",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word list file (default: built-in list)
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Dictionary file used to validate guesses (default: built-in dictionary)
    #[arg(long, global = true)]
    dictionary: Option<PathBuf>,

    /// Locale passed to every dictionary lookup
    #[arg(long, global = true, default_value = DEFAULT_LOCALE)]
    locale: String,

    /// Length of a round in seconds
    #[arg(long, global = true, default_value_t = DEFAULT_ROUND_SECONDS)]
    seconds: u32,

    /// File the high score is kept in
    #[arg(long, global = true, default_value = ".word_scramble_high_score")]
    high_score_file: PathBuf,

    /// Worker threads for the enumeration pass (default: one per core)
    #[arg(short = 'j', long, global = true)]
    threads: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Play timed rounds (default)
    Play,

    /// List every word that can be made from a root word
    Answers {
        /// The 8-letter root word
        root: String,
    },

    /// Check whether a guess would be accepted for a root word
    Check {
        /// The 8-letter root word
        root: String,

        /// The word to check
        guess: String,
    },

    /// Time the enumeration pass over several root words
    Benchmark {
        /// Number of random root words to enumerate
        #[arg(short = 'n', long, default_value = "10")]
        count: usize,
    },
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Could not configure the worker pool")?;
        debug!("Enumeration pool set to {threads} threads");
    }

    let validator = Arc::new(load_dictionary(&cli)?);

    // Default to Play mode if no command given
    let command = cli.command.take().unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&cli, validator),
        Commands::Answers { root } => {
            let root = RootWord::new(&root)?;
            let result = list_answers(&root, validator.as_ref(), &cli.locale);
            print_answers_result(&result);
            Ok(())
        }
        Commands::Check { root, guess } => {
            let root = RootWord::new(&root)?;
            let result = check_word(&root, &guess, validator.as_ref(), &cli.locale);
            print_check_result(&root, &result);
            Ok(())
        }
        Commands::Benchmark { count } => {
            let root_words = load_root_words(cli.words.as_deref())?;
            run_benchmark_command(count, &root_words, &validator, &cli.locale);
            Ok(())
        }
    }
}

/// Load the dictionary from `--dictionary`, or the built-in one
fn load_dictionary(cli: &Cli) -> Result<WordListValidator> {
    match &cli.dictionary {
        Some(path) => WordListValidator::load_from_file(cli.locale.clone(), path)
            .map_err(|e| fatal(&e)),
        None => Ok(WordListValidator::embedded(cli.locale.clone())),
    }
}

/// Load the root words from `--words`, or the built-in list
///
/// Both a missing and an empty list are fatal.
fn load_root_words(path: Option<&Path>) -> Result<RootWordList> {
    let loaded = match path {
        Some(path) => RootWordList::load_from_file(path),
        None => RootWordList::embedded(),
    };
    let root_words = loaded.map_err(|e| fatal(&e))?;
    info!("{} root words available", root_words.len());
    Ok(root_words)
}

fn fatal(error: &WordListError) -> anyhow::Error {
    eprintln!("{} {error}", format!("{}:", error.title()).red().bold());
    anyhow::anyhow!("{}", error.title())
}

fn run_play_command(cli: &Cli, validator: Arc<WordListValidator>) -> Result<()> {
    let root_words = load_root_words(cli.words.as_deref())?;
    let config = SessionConfig {
        round_seconds: cli.seconds,
        locale: cli.locale.clone(),
    };
    let high_scores = FileHighScore::new(cli.high_score_file.clone());
    let mut session = GameSession::new(config, validator, Box::new(high_scores));
    run_play(&mut session, &root_words)
}

fn run_benchmark_command(
    count: usize,
    root_words: &RootWordList,
    validator: &WordListValidator,
    locale: &str,
) {
    println!("Running benchmark on {count} random root words...");

    let mut roots: Vec<RootWord> = root_words.words().to_vec();
    roots.shuffle(&mut rand::rng());
    roots.truncate(count);

    let result = run_benchmark(&roots, validator, locale);
    print_benchmark_result(&result);
}
