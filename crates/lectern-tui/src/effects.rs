//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer itself only mutates state; anything touching the outside
//! world goes through an effect.

/// Effects returned by the reducer for the runtime to execute.
///
/// The reducer returns `Vec<UiEffect>` from each update call.
/// The runtime executes these effects after rendering.
#[derive(Debug, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,
}
