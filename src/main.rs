mod error;
mod game;
mod languages;
mod words;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game::Session;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::path::PathBuf;

const DEFAULT_LOG_FILE: &str = "assembly-endgame.log";

#[derive(Parser)]
#[command(
    name = "assembly-endgame",
    about = "Guess the word before Assembly takes over",
    args_conflicts_with_subcommands = true
)]
struct Cli
{
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    play: PlayArgs,
}

#[derive(clap::Args)]
struct PlayArgs
{
    /// Seed the word picker for a repeatable game
    #[arg(long)]
    seed: Option<u64>,

    /// Play a specific word instead of a random one
    #[arg(long)]
    word: Option<String>,

    /// Where to write logs (falls back to ASSEMBLY_ENDGAME_LOG)
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Command
{
    /// Start a game (default)
    Play(PlayArgs),
    /// List the languages in elimination order
    Languages,
    /// Show how many words can be drawn
    Words,
}

fn main()
{
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()>
{
    let cli = Cli::parse();
    match cli.command {
        None => play(cli.play),
        Some(Command::Play(args)) => play(args),
        Some(Command::Languages) => {
            list_languages();
            Ok(())
        }
        Some(Command::Words) => {
            println!("{} words", words::WORDS.len());
            Ok(())
        }
    }
}

fn play(args: PlayArgs) -> Result<()>
{
    init_logging(args.log_file)?;

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let session = match args.word.as_deref() {
        Some(word) => Session::with_word(word)?,
        None => Session::new(&mut rng)?,
    };

    game::tui::run(session, &mut rng)
}

fn init_logging(path: Option<PathBuf>) -> Result<()>
{
    let path = path
        .or_else(|| std::env::var_os("ASSEMBLY_ENDGAME_LOG").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));
    // raw mode owns the terminal, so logs go to a file
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::sync::Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn list_languages()
{
    println!("Eliminated in this order:");
    for (idx, language) in languages::LANGUAGES.iter().enumerate() {
        println!("  {}. {}", idx + 1, language.name);
    }
    println!(
        "\n{} wrong guesses allowed.",
        languages::max_wrong_guesses()
    );
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn cli_defaults_to_play()
    {
        let cli = Cli::try_parse_from(["assembly-endgame", "--seed", "5"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.play.seed, Some(5));
    }

    #[test]
    fn play_subcommand_takes_a_word()
    {
        let cli = Cli::try_parse_from(["assembly-endgame", "play", "--word", "react"]).unwrap();
        match cli.command {
            Some(Command::Play(args)) => assert_eq!(args.word.as_deref(), Some("react")),
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn play_flags_before_a_subcommand_are_rejected()
    {
        assert!(Cli::try_parse_from(["assembly-endgame", "--seed", "3", "play"]).is_err());
        assert!(Cli::try_parse_from(["assembly-endgame", "--word", "react", "play"]).is_err());
        assert!(Cli::try_parse_from(["assembly-endgame", "--word", "x", "languages"]).is_err());
    }

    #[test]
    fn play_subcommand_keeps_its_seed()
    {
        let cli = Cli::try_parse_from(["assembly-endgame", "play", "--seed", "3"]).unwrap();
        match cli.command {
            Some(Command::Play(args)) => assert_eq!(args.seed, Some(3)),
            _ => panic!("expected play"),
        }
    }

    #[test]
    fn rejects_bad_seed()
    {
        assert!(Cli::try_parse_from(["assembly-endgame", "--seed", "soon"]).is_err());
    }
}
