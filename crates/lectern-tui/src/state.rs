//! Application state composition.
//!
//! This module defines the top-level state hierarchy for the TUI:
//! - `AppState` - combined state (`TuiState` + overlay)
//! - `TuiState` - non-overlay UI state (board, config)
//!
//! ## State Hierarchy
//!
//! ```text
//! AppState
//! ├── tui: TuiState
//! │   ├── board: BoardState     (cards, selection, scroll, gesture)
//! │   └── config: Config        (mouse, swipe threshold, hints)
//! └── overlay: Option<Overlay>  (modal overlays)
//! ```
//!
//! ## Split State Architecture
//!
//! State is split between `TuiState` (non-overlay) and `Option<Overlay>`:
//! - `TuiState` contains all non-overlay UI state
//! - `Option<Overlay>` holds the active overlay if any
//! - `AppState` combines both for runtime use
//!
//! This allows overlay handlers to get `&mut self` and `&mut TuiState` simultaneously.

use lectern_core::Config;

use crate::features::board::BoardState;
use crate::overlays::Overlay;

// ============================================================================
// AppState (Combined State)
// ============================================================================

/// Combined application state for the TUI.
///
/// Combines `TuiState` with `Option<Overlay>` to enable the split state
/// architecture where overlay handlers can access both without borrow conflicts.
pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    /// Creates a new `AppState` with the seeded course board.
    pub fn new(config: Config) -> Self {
        Self {
            tui: TuiState::new(config),
            overlay: None,
        }
    }
}

// ============================================================================
// TuiState
// ============================================================================

/// TUI application state (non-overlay).
///
/// This contains all state except for overlays. Overlays are stored separately
/// in `Option<Overlay>` and combined via `AppState` to enable the split state
/// architecture where overlay handlers can access both without borrow conflicts.
pub struct TuiState {
    /// Flag indicating the app should quit.
    pub should_quit: bool,
    /// Course board state (cards, selection, scroll, gesture).
    pub board: BoardState,
    /// Runtime configuration.
    pub config: Config,
}

impl TuiState {
    pub fn new(config: Config) -> Self {
        Self {
            should_quit: false,
            board: BoardState::seeded(),
            config,
        }
    }
}
