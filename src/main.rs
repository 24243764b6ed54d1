//! Word Scramble - CLI
//!
//! Word anagram game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing_subscriber::EnvFilter;
use word_scramble::{
    commands::{check_words, find_answers, run_simple},
    dictionary::WordListDictionary,
    output::{print_answers_result, print_check_result},
    session::Game,
    wordlists::StartWords,
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell scored words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root words: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    start_words: String,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short, long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Seed for root word selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// List every dictionary word accepted for a root word
    Answers {
        /// The root word to search
        root: String,

        /// Show at most this many answers
        #[arg(short = 'n', long)]
        limit: Option<usize>,
    },

    /// Play a sequence of words against a root word and explain each verdict
    Check {
        /// The root word to play against
        root: String,

        /// Words to submit, in order
        #[arg(required = true)]
        words: Vec<String>,
    },
}

/// Initialize the tracing subscriber on stderr
///
/// `RUST_LOG` takes precedence; otherwise `debug` when verbose, else `warn`.
fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init()
        .ok();
}

fn make_rng(seed: Option<u64>) -> StdRng {
    seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Log lines would draw over the TUI, so play only logs when asked to
    if cli.verbose || !matches!(command, Commands::Play) {
        init_logging(cli.verbose);
    }

    let dictionary = WordListDictionary::from_arg(&cli.dictionary)
        .with_context(|| format!("failed to load dictionary '{}'", cli.dictionary))?;
    let game = Game::new(dictionary, StartWords::from_arg(&cli.start_words));
    let mut rng = make_rng(cli.seed);

    match command {
        Commands::Play => run_play_command(&game, rng),
        Commands::Simple => run_simple(&game, &mut rng).map_err(|e| anyhow::anyhow!(e)),
        Commands::Answers { root, limit } => run_answers_command(&root, limit, &game),
        Commands::Check { root, words } => run_check_command(&root, &words, &game),
    }
}

fn run_play_command(game: &Game<WordListDictionary, StartWords>, rng: StdRng) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(game, rng);
    run_tui(app)
}

fn run_answers_command(
    root: &str,
    limit: Option<usize>,
    game: &Game<WordListDictionary, StartWords>,
) -> Result<()> {
    let dictionary = game.dictionary();
    let mut word_list: Vec<&str> = dictionary.words().collect();
    word_list.sort_unstable();

    let result = find_answers(root, &word_list, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_answers_result(&result, limit);
    Ok(())
}

fn run_check_command(
    root: &str,
    words: &[String],
    game: &Game<WordListDictionary, StartWords>,
) -> Result<()> {
    let result = check_words(game, root, words).map_err(|e| anyhow::anyhow!(e))?;
    print_check_result(&result);
    Ok(())
}
