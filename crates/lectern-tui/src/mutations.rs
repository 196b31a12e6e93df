//! Cross-slice state mutations.
//!
//! Overlays return these mutations to request changes outside their own
//! slice. The main reducer applies them in order.

/// Mutations for cross-slice state changes.
#[derive(Debug, PartialEq, Eq)]
pub enum StateMutation {
    Board(BoardMutation),
}

/// Board slice mutations requested by overlays.
#[derive(Debug, PartialEq, Eq)]
pub enum BoardMutation {
    /// Rebind the card at `index`: `Some` overrides its primary line only,
    /// `None` drops any override and rebinds everything from the record.
    Relabel { index: usize, label: Option<String> },
}
