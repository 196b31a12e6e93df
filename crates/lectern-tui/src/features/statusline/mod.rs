//! Status line feature slice.
//!
//! One-row summary under the board: card counts, the selected card's
//! label, and key hints. A swipe past the dismiss threshold swaps the
//! hints for a release prompt.

mod render;

pub use render::render_statusline;
