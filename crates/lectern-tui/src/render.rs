//! Pure view/render functions for the TUI.
//!
//! This module contains all rendering logic. Functions here:
//! - Take `&AppState` by immutable reference
//! - Draw to a ratatui Frame
//! - Never mutate state or return effects

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::features::board::render_board;
use crate::features::statusline::render_statusline;
use crate::overlays::OverlayExt;
use crate::state::AppState;

/// Height of the status line at the bottom of the screen.
pub const STATUS_HEIGHT: u16 = 1;

/// Renders the entire TUI to the frame.
///
/// This is a pure render function - it only reads state and draws to frame.
/// No mutations, no side effects.
pub fn render(app: &AppState, frame: &mut Frame) {
    let area = frame.area();
    if area.height == 0 || area.width == 0 {
        return;
    }
    let state = &app.tui;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(STATUS_HEIGHT)])
        .split(area);

    render_board(frame, &state.board, chunks[0]);
    render_statusline(frame, &state.board, &state.config, chunks[1]);

    // Render overlay (last, so it appears on top)
    app.overlay.render(frame, area, chunks[1].y);
}
