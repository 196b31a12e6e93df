//! CLI entry and dispatch.

use anyhow::{Context, Result};
use clap::Parser;
use lectern_core::{Config, interrupt, logging};

mod commands;

#[derive(Parser)]
#[command(name = "lectern")]
#[command(version = "0.1")]
#[command(about = "Course board for the terminal")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Run keyboard-only (do not capture the mouse)
    #[arg(long = "no-mouse")]
    no_mouse: bool,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Manage configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

#[derive(clap::Subcommand)]
enum ConfigCommands {
    /// Show the path to the config file
    Path,
    /// Initialize a default config file (if not present)
    Init,
    /// Print the effective configuration as TOML
    Show,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    interrupt::init();
    logging::init().context("init logging")?;

    let mut config = Config::load().context("load config")?;

    let Cli { command, no_mouse } = cli;

    // default to board mode
    let Some(command) = command else {
        if no_mouse {
            config.mouse = false;
        }
        return lectern_tui::run_board(&config).context("course board failed");
    };

    match command {
        Commands::Config { command } => match command {
            ConfigCommands::Path => {
                commands::config::path();
                Ok(())
            }
            ConfigCommands::Init => commands::config::init(),
            ConfigCommands::Show => commands::config::show(&config),
        },
    }
}
