//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.
//!
//! This is the single source of truth for how events modify state.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};

use crate::common::text::sanitize_for_display;
use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::features::board;
use crate::mutations::{BoardMutation, StateMutation};
use crate::overlays;
use crate::render;
use crate::state::{AppState, TuiState};

/// The main reducer function.
///
/// Takes the current state and an event, mutates state, and returns effects
/// for the runtime to execute.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    match event {
        UiEvent::Tick => vec![],
        UiEvent::Frame { width, height } => {
            handle_frame(&mut app.tui, width, height);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
    }
}

fn apply_mutations(tui: &mut TuiState, mutations: Vec<StateMutation>) {
    for mutation in mutations {
        match mutation {
            StateMutation::Board(mutation) => apply_board_mutation(tui, mutation),
        }
    }
}

fn apply_board_mutation(tui: &mut TuiState, mutation: BoardMutation) {
    match mutation {
        BoardMutation::Relabel { index, label } => tui.board.relabel(index, label),
    }
}

fn apply_overlay_update(app: &mut AppState, update: overlays::OverlayUpdate) -> Vec<UiEffect> {
    match update.transition {
        overlays::OverlayTransition::Stay => {}
        overlays::OverlayTransition::Close => {
            app.overlay = None;
        }
    }
    update.effects
}

fn open_overlay_request(app: &mut AppState, request: overlays::OverlayRequest) -> Vec<UiEffect> {
    match request {
        overlays::OverlayRequest::Relabel { index } => {
            let slot = &app.tui.board.slots()[index];
            let current = slot
                .label_override()
                .unwrap_or_else(|| app.tui.board.board().card(index).primary_text())
                .to_string();
            let (state, effects) = overlays::RelabelState::open(index, current);
            app.overlay = Some(overlays::Overlay::Relabel(state));
            effects
        }
    }
}

/// Handles per-frame state updates.
///
/// The board viewport tracks the terminal size minus the status line so
/// layout and scroll clamping stay in step with resizes.
fn handle_frame(tui: &mut TuiState, width: u16, height: u16) {
    let board_height = height.saturating_sub(render::STATUS_HEIGHT);
    tui.board.set_viewport(width, board_height);
}

// ============================================================================
// Terminal Event Handlers
// ============================================================================

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) => handle_key(app, key),
        Event::Mouse(mouse) => {
            // Overlays are modal: the board ignores the pointer while one is open
            if app.overlay.is_none() {
                board::handle_mouse(
                    &mut app.tui.board,
                    mouse,
                    app.tui.config.effective_swipe_threshold(),
                );
            }
            vec![]
        }
        Event::Paste(text) => {
            if let Some(overlays::Overlay::Relabel(relabel)) = app.overlay.as_mut() {
                relabel.input.push_str(&sanitize_for_display(&text));
                relabel.error = None;
            }
            vec![]
        }
        // The next Frame event picks up the new size
        Event::Resize(_, _) => vec![],
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    // Try to dispatch to the active overlay
    if let Some(overlay) = app.overlay.as_mut() {
        let mut update = overlay.handle_key(key);
        apply_mutations(&mut app.tui, std::mem::take(&mut update.mutations));
        return apply_overlay_update(app, update);
    }

    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => return vec![UiEffect::Quit],
        KeyCode::Char('c') if ctrl => return vec![UiEffect::Quit],
        _ => {}
    }

    // No overlay active - delegate to the board feature
    if let Some(request) = board::handle_key(&mut app.tui.board, key)
        && app.overlay.is_none()
    {
        return open_overlay_request(app, request);
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use crossterm::event::{MouseEvent, MouseEventKind};
    use lectern_core::Config;

    use super::*;

    fn app() -> AppState {
        let mut app = AppState::new(Config::default());
        let _ = update(&mut app, UiEvent::Frame {
            width: 60,
            height: 11,
        });
        app
    }

    fn press(app: &mut AppState, code: KeyCode) -> Vec<UiEffect> {
        update(app, UiEvent::Terminal(Event::Key(KeyEvent::from(code))))
    }

    fn press_ctrl(app: &mut AppState, c: char) -> Vec<UiEffect> {
        update(
            app,
            UiEvent::Terminal(Event::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))),
        )
    }

    fn type_text(app: &mut AppState, text: &str) {
        for c in text.chars() {
            let _ = press(app, KeyCode::Char(c));
        }
    }

    fn wheel(kind: MouseEventKind) -> UiEvent {
        UiEvent::Terminal(Event::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }))
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        assert_eq!(press(&mut app, KeyCode::Char('q')), vec![UiEffect::Quit]);
        assert_eq!(press(&mut app, KeyCode::Esc), vec![UiEffect::Quit]);
        assert_eq!(press_ctrl(&mut app, 'c'), vec![UiEffect::Quit]);
    }

    #[test]
    fn test_frame_event_sets_viewport() {
        let mut app = AppState::new(Config::default());
        let _ = update(&mut app, UiEvent::Frame {
            width: 80,
            height: 24,
        });
        assert_eq!(app.tui.board.viewport(), (80, 23));
    }

    #[test]
    fn test_tick_is_a_no_op() {
        let mut app = app();
        assert!(update(&mut app, UiEvent::Tick).is_empty());
    }

    #[test]
    fn test_relabel_flow_applies_override() {
        let mut app = app();
        app.tui.board.selected = Some(0);

        assert!(press(&mut app, KeyCode::Char('r')).is_empty());
        assert!(app.overlay.is_some());

        type_text(&mut app, "卡耐基梅隆大学");
        let effects = press(&mut app, KeyCode::Enter);

        assert!(effects.is_empty());
        assert!(app.overlay.is_none());
        assert_eq!(
            app.tui.board.slots()[0].label_override(),
            Some("卡耐基梅隆大学")
        );
    }

    #[test]
    fn test_overlay_intercepts_board_keys() {
        let mut app = app();
        app.tui.board.selected = Some(0);
        let _ = press(&mut app, KeyCode::Char('r'));
        let before = app.tui.board.board().len();

        // 'd' dismisses a card on the board, but here it must type into the overlay
        let _ = press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.tui.board.board().len(), before);
        match app.overlay.as_ref() {
            Some(overlays::Overlay::Relabel(relabel)) => assert_eq!(relabel.input, "d"),
            other => panic!("expected relabel overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_esc_closes_overlay_without_quitting() {
        let mut app = app();
        app.tui.board.selected = Some(2);
        let _ = press(&mut app, KeyCode::Char('r'));

        let effects = press(&mut app, KeyCode::Esc);

        assert!(effects.is_empty());
        assert!(app.overlay.is_none());
        assert_eq!(app.tui.board.slots()[2].label_override(), None);
    }

    #[test]
    fn test_ctrl_r_in_overlay_clears_override() {
        let mut app = app();
        app.tui.board.selected = Some(1);
        let _ = press(&mut app, KeyCode::Char('r'));
        type_text(&mut app, "Systems");
        let _ = press(&mut app, KeyCode::Enter);
        assert_eq!(app.tui.board.slots()[1].label_override(), Some("Systems"));

        let _ = press(&mut app, KeyCode::Char('r'));
        let _ = press_ctrl(&mut app, 'r');

        assert!(app.overlay.is_none());
        assert_eq!(app.tui.board.slots()[1].label_override(), None);
    }

    #[test]
    fn test_overlay_placeholder_shows_existing_override() {
        let mut app = app();
        app.tui.board.relabel(0, Some("CMU".to_string()));
        app.tui.board.selected = Some(0);

        let _ = press(&mut app, KeyCode::Char('r'));

        match app.overlay.as_ref() {
            Some(overlays::Overlay::Relabel(relabel)) => assert_eq!(relabel.current, "CMU"),
            other => panic!("expected relabel overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_relabel_without_selection_does_nothing() {
        let mut app = app();
        app.tui.board.selected = None;
        let _ = press(&mut app, KeyCode::Char('r'));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_paste_routes_into_overlay_input() {
        let mut app = app();
        app.tui.board.selected = Some(0);
        let _ = press(&mut app, KeyCode::Char('r'));

        let _ = update(
            &mut app,
            UiEvent::Terminal(Event::Paste("Operating\tSystems".to_string())),
        );

        match app.overlay.as_ref() {
            Some(overlays::Overlay::Relabel(relabel)) => {
                assert_eq!(relabel.input, "Operating    Systems");
            }
            other => panic!("expected relabel overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_paste_without_overlay_is_ignored() {
        let mut app = app();
        let _ = update(&mut app, UiEvent::Terminal(Event::Paste("junk".to_string())));
        assert!(app.overlay.is_none());
    }

    #[test]
    fn test_wheel_scrolls_the_board() {
        let mut app = app();
        let _ = update(&mut app, wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.tui.board.scroll, 2);
        let _ = update(&mut app, wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.tui.board.scroll, 0);
    }

    #[test]
    fn test_mouse_is_modal_while_overlay_open() {
        let mut app = app();
        app.tui.board.selected = Some(0);
        let _ = press(&mut app, KeyCode::Char('r'));

        let _ = update(&mut app, wheel(MouseEventKind::ScrollDown));

        assert_eq!(app.tui.board.scroll, 0);
    }

    #[test]
    fn test_board_keys_still_work_after_overlay_closes() {
        let mut app = app();
        app.tui.board.selected = Some(0);
        let _ = press(&mut app, KeyCode::Char('r'));
        let _ = press(&mut app, KeyCode::Esc);

        let _ = press(&mut app, KeyCode::Char('d'));

        assert_eq!(app.tui.board.board().len(), 7);
    }
}
