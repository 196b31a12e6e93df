//! Relabel overlay for card display labels.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::OverlayUpdate;
use crate::effects::UiEffect;
use crate::mutations::{BoardMutation, StateMutation};

/// State for the relabel overlay.
#[derive(Debug, Clone)]
pub struct RelabelState {
    /// Index of the card being relabeled.
    pub index: usize,
    /// Current display label (shown as placeholder while input is empty).
    pub current: String,
    /// The input text for the new label.
    pub input: String,
    /// Error message to display (e.g., empty label).
    pub error: Option<String>,
}

impl RelabelState {
    /// Opens the relabel overlay for the card at `index`.
    pub fn open(index: usize, current: String) -> (Self, Vec<UiEffect>) {
        (
            Self {
                index,
                current,
                input: String::new(),
                error: None,
            },
            vec![],
        )
    }

    pub fn render(&self, frame: &mut Frame, area: Rect, status_y: u16) {
        render_relabel_overlay(frame, self, area, status_y)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Clear error on any input
        if !matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            self.error = None;
        }

        match key.code {
            KeyCode::Esc | KeyCode::Char('c') if key.code == KeyCode::Esc || ctrl => {
                OverlayUpdate::close()
            }
            KeyCode::Char('r') if ctrl => {
                // Drop the override and fall back to the card's own text
                OverlayUpdate::close().with_mutations(vec![StateMutation::Board(
                    BoardMutation::Relabel {
                        index: self.index,
                        label: None,
                    },
                )])
            }
            KeyCode::Enter => {
                let label = self.input.trim();
                if label.is_empty() {
                    self.error = Some("Label cannot be empty".to_string());
                    OverlayUpdate::stay()
                } else {
                    OverlayUpdate::close().with_mutations(vec![StateMutation::Board(
                        BoardMutation::Relabel {
                            index: self.index,
                            label: Some(label.to_string()),
                        },
                    )])
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
                OverlayUpdate::stay()
            }
            KeyCode::Char(c) if !ctrl => {
                self.input.push(c);
                OverlayUpdate::stay()
            }
            _ => OverlayUpdate::stay(),
        }
    }
}

fn render_relabel_overlay(frame: &mut Frame, state: &RelabelState, area: Rect, status_y: u16) {
    use super::render_utils::{
        InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
    };

    let overlay_width = 46;
    let overlay_height = 7;

    let hints = [
        InputHint::new("Enter", "apply"),
        InputHint::new("Ctrl+R", "reset"),
        InputHint::new("Esc", "cancel"),
    ];
    let layout = render_overlay(
        frame,
        area,
        status_y,
        &OverlayConfig {
            title: "Relabel Card",
            border_color: Color::Yellow,
            width: overlay_width,
            height: overlay_height,
            hints: &hints,
        },
    );

    // Input line with unicode-safe truncation
    let input_area = Rect::new(layout.body.x, layout.body.y, layout.body.width, 1);
    render_input_line(
        frame,
        input_area,
        &InputLine {
            value: &state.input,
            placeholder: Some(&state.current),
            prompt: "> ",
            prompt_color: Color::DarkGray,
            text_color: Color::Yellow,
            placeholder_color: Color::DarkGray,
            cursor_color: Color::Yellow,
        },
    );

    render_separator(frame, layout.body, 1);

    // Help text or error message
    let (help_text, help_style) = if let Some(error) = &state.error {
        (error.as_str(), Style::default().fg(Color::Red))
    } else {
        (
            "Type a display label for this card",
            Style::default().fg(Color::DarkGray),
        )
    };
    let help_line = Line::from(Span::styled(help_text, help_style));
    let help_para = Paragraph::new(help_line);
    let help_area = Rect::new(layout.body.x, layout.body.y + 2, layout.body.width, 1);
    frame.render_widget(help_para, help_area);

    render_separator(frame, layout.body, 3);
}
