//! Feature slices for the TUI (state/update/render per slice).

pub mod board;
pub mod statusline;
