//! Full-screen TUI implementation for Lectern.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod mutations;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, Write, stderr};

use anyhow::Result;
pub use features::{board, statusline};
use lectern_core::Config;
pub use runtime::BoardRuntime;

/// Runs the interactive course board.
pub fn run_board(config: &Config) -> Result<()> {
    // Board mode requires a terminal to render the TUI
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Board mode requires a terminal.\n\
             Use `lectern config show` for non-interactive inspection."
        );
    }

    // Print pre-TUI info to stderr (will be replaced by alternate screen)
    let mut err = stderr();
    writeln!(err, "Lectern Course Board")?;
    let config_path = lectern_core::config::paths::config_path();
    if config_path.exists() {
        writeln!(err, "Config file: {}", config_path.display())?;
    }
    err.flush()?;

    let mut runtime = BoardRuntime::new(config.clone())?;
    runtime.run()?;

    // Print goodbye after TUI exits (terminal restored)
    writeln!(stderr(), "Goodbye!")?;

    Ok(())
}
