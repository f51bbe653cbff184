//! Wordle Game - CLI
//!
//! Single-player Wordle with TUI and simple line modes.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use wordle_game::{
    commands::{ReplayConfig, SecretSource, replay_game, run_simple, score_words},
    core::{MAX_ATTEMPTS, Word},
    game::GameConfig,
    logging::{self, LogTarget},
    output::{print_replay_result, print_score_result},
    wordlists::{SECRETS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "wordle_game",
    about = "Single-player Wordle with exact duplicate-letter feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Maximum number of attempts per game
    #[arg(short, long, global = true, default_value_t = MAX_ATTEMPTS)]
    max_attempts: usize,

    /// Secrets for --random: 'embedded' (default) or path to a word-per-line file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    /// Write logs to this file (the TUI logs nowhere without it)
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,
}

#[derive(Args, Default)]
struct SecretArgs {
    /// Secret word for the game (prompted for when omitted)
    #[arg(short, long, conflicts_with = "random")]
    secret: Option<String>,

    /// Pick a random secret from the word list for every game
    #[arg(short, long)]
    random: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play(SecretArgs),

    /// Simple line mode (one guess per line, no TUI)
    Simple(SecretArgs),

    /// Score one guess against a secret
    Score {
        /// The secret word
        secret: String,

        /// The guess to score
        guess: String,
    },

    /// Play a whole game from a list of guesses
    Replay {
        /// The secret word
        secret: String,

        /// Guesses in the order they are submitted
        #[arg(required = true)]
        guesses: Vec<String>,
    },
}

/// Load the secret pool based on the -w flag
fn load_secrets(wordlist_mode: &str) -> Result<Vec<Word>> {
    use wordle_game::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(SECRETS)),
        path => Ok(load_from_file(path)?),
    }
}

fn secret_source(args: SecretArgs, wordlist: &str) -> Result<SecretSource> {
    if let Some(secret) = args.secret {
        Ok(SecretSource::Given(secret))
    } else if args.random {
        Ok(SecretSource::Random(load_secrets(wordlist)?))
    } else {
        Ok(SecretSource::Prompt)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli
        .command
        .unwrap_or_else(|| Commands::Play(SecretArgs::default()));

    let owns_terminal = matches!(command, Commands::Play(_));
    logging::init(
        &cli.log_level,
        LogTarget::for_frontend(cli.log_file, owns_terminal),
    )?;

    let config = GameConfig::new(cli.max_attempts)?;

    match command {
        Commands::Play(args) => run_play_command(secret_source(args, &cli.wordlist)?, config),
        Commands::Simple(args) => run_simple(&secret_source(args, &cli.wordlist)?, config),
        Commands::Score { secret, guess } => {
            let result = score_words(&secret, &guess)?;
            print_score_result(&result);
            Ok(())
        }
        Commands::Replay { secret, guesses } => {
            let mut replay = ReplayConfig::new(secret, guesses);
            replay.game = config;
            let result = replay_game(replay)?;
            print_replay_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(source: SecretSource, config: GameConfig) -> Result<()> {
    use wordle_game::interactive::{App, run_tui};

    let app = App::new(source, config)?;
    run_tui(app)
}
