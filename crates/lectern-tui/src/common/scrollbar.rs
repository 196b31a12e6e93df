//! Custom scrollbar widget with stable thumb size.
//!
//! ratatui's built-in Scrollbar rounds the thumb ends separately, which makes
//! the thumb length wobble while dragging cards across row boundaries. This
//! implementation computes one fixed thumb length and positions it so the
//! thumb touches the bottom exactly at max scroll.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;

const THUMB_SYMBOL: &str = "█";
const TRACK_SYMBOL: &str = "│";

/// Vertical scrollbar for the wrapped card grid.
///
/// All quantities are in terminal rows, matching the board's scroll state.
#[derive(Debug, Clone)]
pub struct Scrollbar {
    /// Total height of the laid-out content.
    content_height: u16,
    /// Visible height of the board viewport.
    viewport_height: u16,
    /// Current scroll offset (0 = top).
    offset: u16,
    style: Style,
}

impl Scrollbar {
    pub fn new(content_height: u16, viewport_height: u16, offset: u16) -> Self {
        Self {
            content_height,
            viewport_height,
            offset,
            style: Style::default(),
        }
    }

    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Only shows when there is content to scroll.
    fn should_display(&self) -> bool {
        self.content_height > self.viewport_height
    }
}

impl Widget for Scrollbar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if !self.should_display() {
            return;
        }

        let max_scroll = u64::from(self.content_height - self.viewport_height);
        let track_len = u64::from(area.height);
        let viewport_len = u64::from(self.viewport_height).min(track_len);

        if track_len == 0 || max_scroll == 0 {
            return;
        }

        // Fixed thumb length: round(track * viewport / (content - 1 + viewport)),
        // clamped so the thumb is always visible and never fills a scrollable track.
        let denom = u64::from(self.content_height).saturating_sub(1) + viewport_len;
        let thumb_len = if denom > 0 {
            ((track_len * viewport_len + denom / 2) / denom).clamp(1, track_len)
        } else {
            track_len
        };

        // Thumb start walks the leftover track in proportion to the offset, so
        // offset == max_scroll puts the thumb flush with the bottom.
        let available = track_len.saturating_sub(thumb_len);
        let thumb_start = u64::from(self.offset).min(max_scroll) * available / max_scroll;

        let x = area.x + area.width.saturating_sub(1);
        for (idx, y) in (area.y..area.y + area.height).enumerate() {
            let idx = idx as u64;
            let symbol = if idx >= thumb_start && idx < thumb_start + thumb_len {
                THUMB_SYMBOL
            } else {
                TRACK_SYMBOL
            };
            buf.set_string(x, y, symbol, self.style);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn column(buf: &Buffer, area: Rect) -> Vec<String> {
        (area.y..area.y + area.height)
            .map(|y| buf.cell((area.x, y)).unwrap().symbol().to_string())
            .collect()
    }

    #[test]
    fn test_should_display_when_content_exceeds_viewport() {
        let scrollbar = Scrollbar::new(40, 20, 0);
        assert!(scrollbar.should_display());
    }

    #[test]
    fn test_should_not_display_when_content_fits() {
        let scrollbar = Scrollbar::new(10, 20, 0);
        assert!(!scrollbar.should_display());
    }

    #[test]
    fn test_should_not_display_when_equal() {
        let scrollbar = Scrollbar::new(20, 20, 0);
        assert!(!scrollbar.should_display());
    }

    #[test]
    fn test_thumb_starts_at_top_when_unscrolled() {
        let area = Rect::new(0, 0, 1, 4);
        let mut buf = Buffer::empty(area);

        Scrollbar::new(16, 4, 0).render(area, &mut buf);

        let cells = column(&buf, area);
        assert_eq!(cells[0], THUMB_SYMBOL);
        assert_eq!(cells[3], TRACK_SYMBOL);
    }

    #[test]
    fn test_thumb_reaches_bottom_at_max_scroll() {
        let area = Rect::new(0, 0, 1, 4);
        let mut buf = Buffer::empty(area);

        // content 16, viewport 4: max scroll is 12.
        Scrollbar::new(16, 4, 12).render(area, &mut buf);

        let cells = column(&buf, area);
        assert_eq!(cells[3], THUMB_SYMBOL);
        assert_eq!(cells[0], TRACK_SYMBOL);
    }
}
