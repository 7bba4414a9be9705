//! Wordle Clone - CLI
//!
//! Guessing game with TUI and line modes: simple, endless and zen rules over
//! word lists, random letters or structured records.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordle_clone::{
    commands::run_play,
    game::{
        DEFAULT_BONUS_LIVES, DEFAULT_LIVES, DEFAULT_MAX_TRIES, DEFAULT_WORD_LENGTH, GameConfig,
        GameMode, Material, Session, WordList, build_session,
    },
    highscore::{FileScoreKeeper, ScoreKeeper},
    output::print_legend,
    wordlists::{
        CachedList, PROGRAMMING_LANGUAGES, WordListCache, bundled_cache, load_records,
        loader::load_from_file, word_list_name,
    },
};

#[derive(Parser)]
#[command(
    name = "wordle_clone",
    about = "Wordle-style guessing game with endless, zen, random and object modes",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Mode: simple, endless, zen, random, endless-random, zen-random (or 1-6)
    #[arg(short, long, global = true, default_value = "simple")]
    mode: GameMode,

    /// Tries per game in bounded modes (0 for unlimited)
    #[arg(short, long, global = true, default_value_t = DEFAULT_MAX_TRIES)]
    tries: u32,

    /// Starting lives in endless modes
    #[arg(long, global = true, default_value_t = DEFAULT_LIVES)]
    lives: u32,

    /// Lives awarded for each won endless round
    #[arg(long, global = true, default_value_t = DEFAULT_BONUS_LIVES)]
    bonus: u32,

    /// Word length: picks the bundled list (4-6) or the random target length
    #[arg(short, long, global = true, default_value_t = DEFAULT_WORD_LENGTH)]
    length: usize,

    /// Word list file, one word per line
    #[arg(short = 'w', long, global = true, conflicts_with_all = ["records", "languages", "list"])]
    words: Option<PathBuf>,

    /// Record list JSON file to guess objects instead of words
    #[arg(short = 'r', long, global = true, conflicts_with_all = ["languages", "list"])]
    records: Option<PathBuf>,

    /// Bundled list to play, by name (see the `lists` command)
    #[arg(long, global = true, conflicts_with = "languages")]
    list: Option<String>,

    /// Guess programming languages from the bundled record list
    #[arg(long, global = true)]
    languages: bool,

    /// Seed for reproducible targets
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// File holding the endless high score
    #[arg(long, global = true, default_value = "highscore.txt")]
    highscore: PathBuf,

    /// Log level when RUST_LOG is unset (logs go to stderr)
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Line mode without TUI
    Simple,

    /// Show what each colour means
    Legend,

    /// Show the bundled lists
    Lists,
}

impl Cli {
    fn config(&self) -> GameConfig {
        GameConfig {
            max_tries: self.tries,
            lives: self.lives,
            bonus_lives: self.bonus,
            word_length: self.length,
            seed: self.seed,
        }
    }
}

/// Pick what the game draws targets from
///
/// Precedence: record file, word file, named bundled list, bundled word list
/// for the chosen length.
fn load_material(cli: &Cli) -> Result<Material> {
    if let Some(path) = &cli.records {
        let set = load_records(path)
            .with_context(|| format!("Failed to load records from {}", path.display()))?;
        return Ok(Material::Records(set.into_record_list()));
    }

    if let Some(path) = &cli.words {
        return Ok(Material::Words(load_word_file(path)?));
    }

    let cache = bundled_cache().context("Bundled record list is malformed")?;
    let name = match (&cli.list, cli.languages) {
        (Some(name), _) => name.clone(),
        (None, true) => PROGRAMMING_LANGUAGES.to_string(),
        (None, false) if cli.mode.is_random() => {
            // Random modes generate their own targets
            return Ok(Material::Words(WordList::default()));
        }
        (None, false) => word_list_name(cli.length),
    };

    cache.material(&name).with_context(|| {
        format!(
            "No bundled list named '{name}'; pick one of: {}",
            cache.names().join(", ")
        )
    })
}

fn load_word_file(path: &Path) -> Result<WordList> {
    let words = load_from_file(path)
        .with_context(|| format!("Failed to read word list {}", path.display()))?;
    let list = WordList::new(words);
    if list.is_empty() {
        bail!("Word list {} is empty", path.display());
    }
    Ok(list)
}

fn print_lists(cache: &WordListCache) {
    println!("Bundled lists:");
    for name in cache.names() {
        let size = cache.get(name).map_or(0, CachedList::len);
        println!("  {name:<24} {size} entries");
    }
}

fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn build(cli: &Cli) -> Result<Box<dyn Session>> {
    let config = cli.config();
    let material = load_material(cli)?;
    let keeper: Box<dyn ScoreKeeper> = Box::new(FileScoreKeeper::open(&cli.highscore));

    info!(mode = %cli.mode, ?config, "starting game");
    build_session(cli.mode, &config, material, Some(keeper)).context("Failed to create game")
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    // Default to Play mode if no command given
    let command = cli.command.as_ref().unwrap_or(&Commands::Play);

    match command {
        Commands::Legend => {
            print_legend();
            Ok(())
        }
        Commands::Lists => {
            let cache = bundled_cache().context("Bundled record list is malformed")?;
            print_lists(&cache);
            Ok(())
        }
        Commands::Simple => {
            let mut session = build(&cli)?;
            run_play(session.as_mut()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Play => run_play_command(&cli),
    }
}

fn run_play_command(cli: &Cli) -> Result<()> {
    use wordle_clone::interactive::{App, run_tui};

    let session = build(cli)?;
    let app = App::new(session, cli.mode.name());
    run_tui(app)
}
