//! Board rendering.
//!
//! Pure painting: reads `BoardState`, writes the frame buffer, and records
//! the visible card rectangles for mouse hit testing. The held card is
//! painted last so it overlaps its neighbours while dragged or swiped.

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::card::BuiltCard;
use super::gesture::Gesture;
use super::state::{BoardState, CardRect};
use crate::common::scrollbar::Scrollbar;

/// Left margin before the first card column.
pub const BOARD_MARGIN: u16 = 1;
/// Width of the scrollbar column on the right edge.
pub const SCROLLBAR_WIDTH: u16 = 1;

/// Renders the card grid, scrollbar included, into `area`.
pub fn render_board(frame: &mut Frame, board: &BoardState, area: Rect) {
    if area.width == 0 || area.height == 0 {
        return;
    }

    if board.board().is_empty() {
        board.store_rects(Vec::new());
        render_empty_notice(frame, area);
        return;
    }

    let content_height = paint_grid(frame.buffer_mut(), board, area);

    let scrollbar_area = Rect::new(
        area.right().saturating_sub(SCROLLBAR_WIDTH),
        area.y,
        SCROLLBAR_WIDTH,
        area.height,
    );
    frame.render_widget(
        Scrollbar::new(content_height, area.height, board.scroll)
            .style(Style::default().fg(Color::DarkGray)),
        scrollbar_area,
    );
}

/// Paints every card and stores the visible rectangles. Returns the laid
/// out content height for the scrollbar.
fn paint_grid(buf: &mut Buffer, board: &BoardState, area: Rect) -> u16 {
    let flex = board.layout();
    debug_assert_eq!(
        flex.slots.len(),
        board.board().len(),
        "view cache out of step with the board"
    );

    let scroll = i32::from(board.scroll);
    let held = board.gesture.held_index();
    let mut rects = Vec::with_capacity(flex.slots.len());

    for (index, slot) in flex.slots.iter().enumerate() {
        let x = area.x + BOARD_MARGIN + slot.x;
        let top = i32::from(area.y) + i32::from(slot.y) - scroll;

        if let Some(rect) = visible_rect(x, top, slot.width, slot.height, area) {
            rects.push(CardRect { index, area: rect });
        }

        if held == Some(index) {
            continue;
        }
        let style = if board.selected == Some(index) {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        paint_card(buf, board.slots()[index].built(), x, top, area, style);
    }

    if let Some(index) = held {
        let slot = flex.slots[index];
        let mut x = i32::from(area.x + BOARD_MARGIN + slot.x);
        let top = i32::from(area.y) + i32::from(slot.y) - scroll;
        if let Gesture::Swiping { dx, .. } = board.gesture {
            let min_dx = i32::from(area.x) - x;
            let max_dx = i32::from(area.right()) - x - i32::from(slot.width);
            x += dx.clamp(min_dx, max_dx.max(min_dx));
        }
        let x = x as u16;
        let style = Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD);
        paint_card(buf, board.slots()[index].built(), x, top, area, style);
        if matches!(board.gesture, Gesture::Swiping { .. })
            && let Some(rect) = visible_rect(x, top, slot.width, slot.height, area)
        {
            buf.set_style(rect, Style::default().add_modifier(Modifier::DIM));
        }
    }

    board.store_rects(rects);
    flex.content_height
}

/// The part of a card actually inside `area`, if any.
fn visible_rect(x: u16, top: i32, width: u16, height: u16, area: Rect) -> Option<Rect> {
    if x >= area.right() {
        return None;
    }
    let vis_top = top.max(i32::from(area.top()));
    let vis_bottom = (top + i32::from(height)).min(i32::from(area.bottom()));
    if vis_top >= vis_bottom {
        return None;
    }
    Some(Rect::new(
        x,
        vis_top as u16,
        width.min(area.right() - x),
        (vis_bottom - vis_top) as u16,
    ))
}

/// Paints one card with a hand-drawn border, clipping rows to `area`.
fn paint_card(buf: &mut Buffer, built: &BuiltCard, x: u16, top: i32, area: Rect, border: Style) {
    let (width, height) = built.size();
    if x >= area.right() {
        return;
    }
    let max_width = usize::from(area.right() - x);
    let span = usize::from(width.saturating_sub(2));

    for row in 0..height {
        let y = top + i32::from(row);
        if y < i32::from(area.top()) || y >= i32::from(area.bottom()) {
            continue;
        }
        let y = y as u16;
        if row == 0 {
            buf.set_stringn(x, y, format!("┌{}┐", "─".repeat(span)), max_width, border);
        } else if row == height - 1 {
            buf.set_stringn(x, y, format!("└{}┘", "─".repeat(span)), max_width, border);
        } else {
            buf.set_stringn(x, y, "│ ", max_width, border);
            if max_width > 2 {
                let content = &built.lines()[usize::from(row) - 1];
                buf.set_line(x + 2, y, content, (max_width - 2) as u16);
            }
            let right_x = x + width.saturating_sub(2);
            if right_x < area.right() {
                buf.set_stringn(right_x, y, " │", usize::from(area.right() - right_x), border);
            }
        }
    }
}

fn render_empty_notice(frame: &mut Frame, area: Rect) {
    let message = Line::from(Span::styled(
        "No cards left",
        Style::default().fg(Color::DarkGray),
    ));
    let notice_area = Rect::new(area.x, area.y + area.height / 2, area.width, 1);
    frame.render_widget(Paragraph::new(message).alignment(Alignment::Center), notice_area);
}
