//! Drag and swipe recognition state machine.
//!
//! A press on a card enters `Pending`. Movement past the slop thresholds
//! commits to one axis for the rest of the gesture: vertical movement turns
//! into a reorder drag, sideways movement into a dismissal swipe. The axis
//! never changes mid-gesture; release or a press outside a card returns to
//! `Idle`.

/// Rows of travel before a vertical drag starts.
pub const DRAG_SLOP: i32 = 1;
/// Columns of travel before a sideways swipe starts.
pub const SWIPE_SLOP: i32 = 2;
/// Horizontal wins only when `|dx| >= AXIS_RATIO * |dy|`. Terminal cells
/// are roughly twice as tall as wide, so one row of travel covers as much
/// screen as two columns.
pub const AXIS_RATIO: i32 = 2;

/// Axis a pending gesture committed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Current pointer gesture over the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Gesture {
    #[default]
    Idle,
    /// Button held on a card, no axis committed yet.
    Pending { index: usize, origin: (u16, u16) },
    /// Reorder drag: the held card chases the pointer through the grid.
    Dragging { index: usize },
    /// Dismissal swipe: the held card slides sideways by `dx` columns.
    Swiping { index: usize, origin_x: u16, dx: i32 },
}

impl Gesture {
    pub fn is_active(self) -> bool {
        !matches!(self, Gesture::Idle)
    }

    /// Index of the card the gesture holds, if any.
    pub fn held_index(self) -> Option<usize> {
        match self {
            Gesture::Idle => None,
            Gesture::Pending { index, .. }
            | Gesture::Dragging { index }
            | Gesture::Swiping { index, .. } => Some(index),
        }
    }

    /// The same gesture phase rebound onto a different card index.
    pub fn with_index(self, index: usize) -> Gesture {
        match self {
            Gesture::Idle => Gesture::Idle,
            Gesture::Pending { origin, .. } => Gesture::Pending { index, origin },
            Gesture::Dragging { .. } => Gesture::Dragging { index },
            Gesture::Swiping { origin_x, dx, .. } => Gesture::Swiping { index, origin_x, dx },
        }
    }

    /// Decides the gesture axis from total travel since the press.
    ///
    /// Returns `None` while movement is still within both slop distances.
    pub fn classify(origin: (u16, u16), column: u16, row: u16) -> Option<Axis> {
        let dx = (i32::from(column) - i32::from(origin.0)).abs();
        let dy = (i32::from(row) - i32::from(origin.1)).abs();

        if dx >= SWIPE_SLOP && dx >= AXIS_RATIO * dy {
            Some(Axis::Horizontal)
        } else if dy >= DRAG_SLOP {
            Some(Axis::Vertical)
        } else {
            None
        }
    }
}
