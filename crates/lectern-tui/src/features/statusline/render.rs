//! Status line rendering.

use lectern_core::{Board, CardKind, Config};
use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::common::text::truncate_with_ellipsis;
use crate::features::board::BoardState;

const HINTS: &str = "←→↑↓ select • H/L move • d dismiss • r relabel • q quit";
const RELEASE_PROMPT: &str = "release to dismiss";

/// Renders the one-row status line at the bottom of the screen.
pub fn render_statusline(frame: &mut Frame, board: &BoardState, config: &Config, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    let (right, right_style) = right_segment(board, config);
    let right_width = right.width() as u16;

    let mut left = board_summary(board.board());
    if let Some(label) = selected_label(board) {
        left.push_str("  │  ");
        left.push_str(label);
    }
    let left_budget = area.width.saturating_sub(right_width + 2);
    let left = truncate_with_ellipsis(&left, usize::from(left_budget));

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            left,
            Style::default().fg(Color::DarkGray),
        ))),
        area,
    );
    if right_width > 0 && right_width < area.width {
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(right, right_style))).alignment(Alignment::Right),
            area,
        );
    }
}

fn right_segment(board: &BoardState, config: &Config) -> (&'static str, Style) {
    if let Some(dx) = board.swipe_dx()
        && dx.unsigned_abs() >= u32::from(config.effective_swipe_threshold())
    {
        return (
            RELEASE_PROMPT,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        );
    }
    if config.show_hints {
        (HINTS, Style::default().fg(Color::DarkGray))
    } else {
        ("", Style::default())
    }
}

/// Card counts, e.g. `8 cards (3 colleges, 5 lessons)`.
fn board_summary(board: &Board) -> String {
    let total = board.len();
    let colleges = board.count(CardKind::College);
    let lessons = board.count(CardKind::Lesson);
    format!(
        "{total} {} ({colleges} {}, {lessons} {})",
        plural(total, "card", "cards"),
        plural(colleges, "college", "colleges"),
        plural(lessons, "lesson", "lessons"),
    )
}

/// The display label of the selected card, override included.
fn selected_label(board: &BoardState) -> Option<&str> {
    let index = board.selected?;
    let slot = &board.slots()[index];
    Some(
        slot.label_override()
            .unwrap_or_else(|| board.board().card(index).primary_text()),
    )
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
