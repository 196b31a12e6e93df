//! UI event types.
//!
//! All inputs to the board (terminal input, frame timing) are converted to
//! `UiEvent` before being processed by the reducer. There is no background
//! work; every event originates on the main thread's poll loop.

use crossterm::event::Event as CrosstermEvent;

/// Unified event enum for the TUI.
///
/// The reducer (`update`) pattern-matches on these events to update state.
#[derive(Debug)]
pub enum UiEvent {
    /// Timer tick (drives redraw cadence).
    Tick,

    /// Frame event for per-frame state updates.
    ///
    /// Emitted once per frame before other events are processed.
    /// Contains terminal dimensions for layout calculations.
    Frame { width: u16, height: u16 },

    /// Terminal input event (key, mouse, paste, resize).
    Terminal(CrosstermEvent),
}
