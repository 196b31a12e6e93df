//! Flex-wrap geometry for mixed-width cards.
//!
//! Pure math over card sizes. The renderer applies scroll and margins on
//! top; the state layer uses the same layout to keep the selection visible
//! and to clamp scrolling.

/// Gap between cards, both axes.
pub const CARD_GAP: u16 = 1;

/// Position and size of one laid-out card, relative to the content origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

/// Geometry for the full card sequence.
#[derive(Debug, Clone, Default)]
pub struct FlexLayout {
    pub slots: Vec<Slot>,
    pub content_height: u16,
}

/// Lays out `sizes` left to right in sequence order, wrapping before any
/// card that would cross `max_width`.
///
/// Rows are as tall as their tallest member and cards are top-aligned
/// within the row. A card wider than `max_width` still gets a row of its
/// own at x 0; the renderer clips it.
pub fn flex_wrap(sizes: &[(u16, u16)], max_width: u16, gap: u16) -> FlexLayout {
    let mut slots = Vec::with_capacity(sizes.len());
    let mut cursor_x: u16 = 0;
    let mut cursor_y: u16 = 0;
    let mut row_height: u16 = 0;

    for &(width, height) in sizes {
        if cursor_x > 0 && cursor_x + width > max_width {
            cursor_x = 0;
            cursor_y += row_height + gap;
            row_height = 0;
        }
        slots.push(Slot {
            x: cursor_x,
            y: cursor_y,
            width,
            height,
        });
        cursor_x += width + gap;
        row_height = row_height.max(height);
    }

    let content_height = if slots.is_empty() {
        0
    } else {
        cursor_y + row_height
    };
    FlexLayout {
        slots,
        content_height,
    }
}
