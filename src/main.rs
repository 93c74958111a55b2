//! Chromacle - CLI
//!
//! Daily color puzzle with TUI and line modes.

use anyhow::{Result, anyhow};
use chrono::{Local, NaiveDate};
use chromacle::{
    commands::{print_share, print_summary, run_guess, run_simple},
    core::Color,
    game::Game,
    interactive::{App, run_tui},
    storage::{FileStore, KeyValueStore, MemoryStore},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "chromacle",
    about = "Guess the daily color by hue, saturation and lightness",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Directory holding saved progress and stats
    #[arg(long, global = true, env = "CHROMACLE_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Play a specific day's puzzle (YYYY-MM-DD) instead of today's
    #[arg(long, global = true)]
    date: Option<NaiveDate>,

    /// Keep progress in memory only (nothing is saved)
    #[arg(long, global = true)]
    ephemeral: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - sliders and live preview)
    Play,

    /// Simple CLI mode (type guesses at a prompt)
    Simple,

    /// Submit a single guess
    Guess {
        /// Hue in degrees
        #[arg(value_parser = clap::value_parser!(u16).range(0..360))]
        hue: u16,

        /// Saturation percent
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        saturation: u8,

        /// Lightness percent
        #[arg(value_parser = clap::value_parser!(u8).range(0..=100))]
        lightness: u8,
    },

    /// Print the share text for today's finished game
    Share,

    /// Show cumulative stats and today's progress
    Stats,
}

fn init_logging() {
    // Default to warn; the TUI shares the terminal
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();
}

fn main() -> Result<()> {
    init_logging();
    let cli = Cli::parse();

    let date = cli.date.unwrap_or_else(|| Local::now().date_naive());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    if cli.ephemeral {
        run_command(command, MemoryStore::new(), date)
    } else {
        let dir = cli.data_dir.unwrap_or_else(FileStore::default_dir);
        tracing::debug!(dir = %dir.display(), %date, "using file store");
        run_command(command, FileStore::new(dir), date)
    }
}

fn run_command<S: KeyValueStore>(command: Commands, store: S, date: NaiveDate) -> Result<()> {
    let mut game = Game::load(store, date);

    match command {
        Commands::Play => run_play_command(game),
        Commands::Simple => run_simple(&mut game).map_err(|e| anyhow!(e)),
        Commands::Guess {
            hue,
            saturation,
            lightness,
        } => {
            let color = Color::new(hue, saturation, lightness);
            run_guess(&mut game, color).map_err(|e| anyhow!(e))?;
            Ok(())
        }
        Commands::Share => {
            print_share(&game).map_err(|e| anyhow!(e))?;
            Ok(())
        }
        Commands::Stats => {
            print_summary(&game);
            Ok(())
        }
    }
}

fn run_play_command<S: KeyValueStore>(game: Game<S>) -> Result<()> {
    let app = App::new(game);
    if let Some(share) = run_tui(app)? {
        println!("{share}");
    }
    Ok(())
}
