//! Terminal player for Pfadfinder branching-narrative stories.

mod commands;
mod game;

use std::path::PathBuf;
use std::process;

use clap::{ArgAction, Parser, Subcommand};
use pf_core::Difficulty;
use pf_session::StorageConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "pf",
    about = "Pfadfinder: branching text adventures in the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Directory holding the saves/ and stats/ folders
    #[arg(long, global = true, env = "PF_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,

    /// Keep saves here instead of <data-dir>/saves
    #[arg(long, global = true, env = "PF_SAVES_DIR")]
    saves_dir: Option<PathBuf>,

    /// Keep statistics here instead of <data-dir>/stats
    #[arg(long, global = true, env = "PF_STATS_DIR")]
    stats_dir: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the available stories
    Stories {
        /// Only list stories of this difficulty (easy, medium, hard)
        #[arg(short, long)]
        difficulty: Option<Difficulty>,
    },

    /// Start a new game
    Play {
        /// Player name (asked for when omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Story key, e.g. castle (picked from a menu when omitted)
        #[arg(short, long)]
        story: Option<String>,
    },

    /// Resume a saved game
    Load {
        /// Save name (picked from a list when omitted)
        save: Option<String>,
    },

    /// List saved games
    Saves {
        #[command(subcommand)]
        action: Option<SavesAction>,
    },

    /// Show statistics over finished games
    Stats {
        /// Show one player's totals instead of the global ones
        #[arg(short, long)]
        player: Option<String>,

        #[command(subcommand)]
        action: Option<StatsAction>,
    },

    /// Validate every story graph
    Check,
}

#[derive(Subcommand)]
enum SavesAction {
    /// Delete a saved game
    Delete {
        /// Save name
        name: String,
    },
}

#[derive(Subcommand)]
enum StatsAction {
    /// Delete the global statistics
    Reset,

    /// Write the global statistics to a JSON file
    Export {
        /// Destination file
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = StorageConfig::default().with_root(&cli.data_dir);
    if let Some(dir) = cli.saves_dir {
        config = config.with_saves_dir(dir);
    }
    if let Some(dir) = cli.stats_dir {
        config = config.with_stats_dir(dir);
    }

    let result = match cli.command {
        None => commands::menu::run(&config),
        Some(Commands::Stories { difficulty }) => commands::stories::run(difficulty),
        Some(Commands::Play { name, story }) => commands::play::run(&config, name, story),
        Some(Commands::Load { save }) => commands::load::run(&config, save.as_deref()),
        Some(Commands::Saves { action }) => match action {
            None => commands::saves::run(&config),
            Some(SavesAction::Delete { name }) => commands::saves::delete(&config, &name),
        },
        Some(Commands::Stats { player, action }) => match action {
            None => commands::stats::run(&config, player.as_deref()),
            Some(StatsAction::Reset) => commands::stats::reset(&config),
            Some(StatsAction::Export { file }) => commands::stats::export(&config, &file),
        },
        Some(Commands::Check) => commands::check::run(),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

/// Install the stderr log subscriber. `RUST_LOG` wins over `-v`.
fn init_tracing(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();
}
