//! Per-card content building.
//!
//! Building a card is the bind step: it turns a board record plus an
//! optional label override into the two styled interior lines the renderer
//! paints. Cards have fixed per-kind widths so built content never depends
//! on the viewport, only on the record and the override.

use lectern_core::{Card, CardKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::common::text::fit_to_width;

/// Total width of a college card, borders included.
pub const COLLEGE_CARD_WIDTH: u16 = 30;
/// Total width of a lesson card, borders included.
pub const LESSON_CARD_WIDTH: u16 = 24;
/// Card height: two interior lines plus borders.
pub const CARD_HEIGHT: u16 = 4;

/// Badge shown before a college name. The cap is two columns wide.
const COLLEGE_BADGE: &str = "🎓 ";

/// Outer size of a card of the given kind.
pub fn card_size(kind: CardKind) -> (u16, u16) {
    match kind {
        CardKind::College => (COLLEGE_CARD_WIDTH, CARD_HEIGHT),
        CardKind::Lesson => (LESSON_CARD_WIDTH, CARD_HEIGHT),
    }
}

/// A card's interior content, built once per bind and cached by the board
/// state until the record or its override changes.
#[derive(Debug, Clone)]
pub struct BuiltCard {
    width: u16,
    lines: [Line<'static>; 2],
}

impl BuiltCard {
    pub fn size(&self) -> (u16, u16) {
        (self.width, CARD_HEIGHT)
    }

    /// Interior lines, each padded to exactly the interior width.
    pub fn lines(&self) -> &[Line<'static>; 2] {
        &self.lines
    }
}

/// Builds the interior lines for one card.
///
/// `label_override` replaces the primary line's text only; the secondary
/// line always comes from the record.
pub fn build_card(card: &Card, label_override: Option<&str>) -> BuiltCard {
    let (width, _) = card_size(card.kind());
    // One border column and one padding column on each side.
    let interior = usize::from(width) - 4;
    let primary = label_override.unwrap_or_else(|| card.primary_text());

    let lines = match card.kind() {
        CardKind::College => {
            let badge_width = 3;
            let name = fit_to_width(primary, interior - badge_width);
            let host = fit_to_width(host_of(card.secondary_text()), interior);
            [
                Line::from(vec![
                    Span::raw(COLLEGE_BADGE),
                    Span::styled(
                        name,
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                ]),
                Line::from(Span::styled(host, Style::default().fg(Color::DarkGray))),
            ]
        }
        CardKind::Lesson => {
            let title = fit_to_width(primary, interior);
            let description = fit_to_width(card.secondary_text(), interior);
            [
                Line::from(Span::styled(
                    title,
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    description,
                    Style::default().fg(Color::DarkGray),
                )),
            ]
        }
    };

    BuiltCard { width, lines }
}

/// Extracts the host portion of a URL for display.
///
/// Avatar URLs are never fetched; the host is all that fits on a card line
/// and is enough to identify the source.
pub fn host_of(url: &str) -> &str {
    let rest = url.split_once("://").map_or(url, |(_, rest)| rest);
    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    &rest[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_college_card_has_badge_and_host() {
        let card = Card::college(
            "Stanford University",
            "https://upload.wikimedia.org/wikipedia/zh/thumb/5/55/logo.svg",
        );

        let built = build_card(&card, None);

        assert_eq!(built.size(), (COLLEGE_CARD_WIDTH, CARD_HEIGHT));
        assert_eq!(built.lines()[0].spans[0].content, COLLEGE_BADGE);
        assert!(built.lines()[0].spans[1].content.starts_with("Stanford University"));
        assert!(built.lines()[1].spans[0].content.starts_with("upload.wikimedia.org"));
    }

    #[test]
    fn test_lesson_card_shows_title_and_description() {
        let card = Card::lesson("CMU 15-445", "Database Systems");

        let built = build_card(&card, None);

        assert_eq!(built.size(), (LESSON_CARD_WIDTH, CARD_HEIGHT));
        assert!(built.lines()[0].spans[0].content.starts_with("CMU 15-445"));
        assert!(built.lines()[1].spans[0].content.starts_with("Database Systems"));
    }

    #[test]
    fn test_interior_lines_measure_exactly() {
        let interior = usize::from(COLLEGE_CARD_WIDTH) - 4;
        let card = Card::college("Massachusetts Institute of Technology", "https://example.com/x");

        let built = build_card(&card, None);

        assert_eq!(built.lines()[0].width(), interior);
        assert_eq!(built.lines()[1].width(), interior);
    }

    #[test]
    fn test_override_replaces_primary_line_only() {
        let card = Card::college(
            "Carnegie Mellon University",
            "https://bkimg.cdn.bcebos.com/pic/18d8",
        );

        let built = build_card(&card, Some("卡耐基梅隆大学"));

        assert_eq!(built.lines()[0].spans[0].content, COLLEGE_BADGE);
        assert!(built.lines()[0].spans[1].content.starts_with("卡耐基梅隆大学"));
        assert!(built.lines()[1].spans[0].content.starts_with("bkimg.cdn.bcebos.com"));
        assert_eq!(built.lines()[0].width(), usize::from(COLLEGE_CARD_WIDTH) - 4);
    }

    #[test]
    fn test_host_of_variants() {
        assert_eq!(
            host_of("https://upload.wikimedia.org/wikipedia/zh/thumb/4/44/MIT_Seal.svg"),
            "upload.wikimedia.org"
        );
        assert_eq!(host_of("example.com/path"), "example.com");
        assert_eq!(host_of("example.com?q=1"), "example.com");
        assert_eq!(host_of("https://example.com"), "example.com");
    }
}
