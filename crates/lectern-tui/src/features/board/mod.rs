//! Board feature slice: the wrapped grid of course cards.
//!
//! ## Module Structure
//!
//! - `card.rs`: per-card content building (the bind step)
//! - `gesture.rs`: drag and swipe recognition state machine
//! - `layout.rs`: flex-wrap geometry for mixed-width cards
//! - `state.rs`: board data plus view state (selection, scroll, gestures)
//! - `update.rs`: keyboard and mouse handling for the board
//! - `render.rs`: card grid painting and hit-test rect collection

pub mod card;
pub mod gesture;
pub mod layout;
mod render;
mod state;
mod update;

pub use render::render_board;
pub use state::{BoardState, CardRect, CardSlot};
pub use update::{handle_key, handle_mouse};
