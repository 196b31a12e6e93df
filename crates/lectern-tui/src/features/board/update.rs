//! Keyboard and mouse handling for the board.
//!
//! Keys move the selection and mutate the board directly. Mouse events
//! drive the gesture state machine: press arms a card, movement commits to
//! a drag or a swipe, release settles it.

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};

use super::gesture::{Axis, Gesture};
use super::state::BoardState;
use crate::overlays::OverlayRequest;

/// Rows scrolled per mouse wheel click.
const WHEEL_SCROLL_STEP: i32 = 2;

/// Handles a key while no overlay is open.
///
/// Returns an overlay to open, if the key asks for one.
pub fn handle_key(board: &mut BoardState, key: KeyEvent) -> Option<OverlayRequest> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') => {
            board.select_prev();
            None
        }
        KeyCode::Right | KeyCode::Char('l') => {
            board.select_next();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            board.select_vertical(false);
            None
        }
        KeyCode::Down | KeyCode::Char('j') => {
            board.select_vertical(true);
            None
        }
        KeyCode::Char('H') => {
            if let Some(sel) = board.selected
                && sel > 0
            {
                board.move_card(sel, sel - 1);
            }
            None
        }
        KeyCode::Char('L') => {
            if let Some(sel) = board.selected
                && sel + 1 < board.board().len()
            {
                board.move_card(sel, sel + 1);
            }
            None
        }
        KeyCode::Char('d') | KeyCode::Delete | KeyCode::Backspace => {
            if let Some(sel) = board.selected {
                board.dismiss(sel);
            }
            None
        }
        KeyCode::Char('r') => board.selected.map(|index| OverlayRequest::Relabel { index }),
        KeyCode::PageUp => {
            board.scroll_by(-i32::from(board.viewport().1));
            None
        }
        KeyCode::PageDown => {
            board.scroll_by(i32::from(board.viewport().1));
            None
        }
        _ => None,
    }
}

/// Handles a mouse event while no overlay is open.
pub fn handle_mouse(board: &mut BoardState, mouse: MouseEvent, swipe_threshold: u16) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(index) = board.hit_test(mouse.column, mouse.row) {
                board.selected = Some(index);
                board.gesture = Gesture::Pending {
                    index,
                    origin: (mouse.column, mouse.row),
                };
            } else {
                board.gesture = Gesture::Idle;
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => match board.gesture {
            Gesture::Pending { index, origin } => {
                match Gesture::classify(origin, mouse.column, mouse.row) {
                    Some(Axis::Vertical) => {
                        board.gesture = Gesture::Dragging { index };
                        drag_over(board, mouse.column, mouse.row);
                    }
                    Some(Axis::Horizontal) => {
                        board.gesture = Gesture::Swiping {
                            index,
                            origin_x: origin.0,
                            dx: i32::from(mouse.column) - i32::from(origin.0),
                        };
                    }
                    None => {}
                }
            }
            Gesture::Dragging { .. } => drag_over(board, mouse.column, mouse.row),
            Gesture::Swiping { index, origin_x, .. } => {
                board.gesture = Gesture::Swiping {
                    index,
                    origin_x,
                    dx: i32::from(mouse.column) - i32::from(origin_x),
                };
            }
            Gesture::Idle => {}
        },
        MouseEventKind::Up(MouseButton::Left) => {
            if let Gesture::Swiping { index, dx, .. } = board.gesture
                && dx.abs() >= i32::from(swipe_threshold)
            {
                board.dismiss(index);
            }
            board.gesture = Gesture::Idle;
        }
        MouseEventKind::ScrollUp => board.scroll_by(-WHEEL_SCROLL_STEP),
        MouseEventKind::ScrollDown => board.scroll_by(WHEEL_SCROLL_STEP),
        _ => {}
    }
}

/// Splices the dragged card under the pointer when it crosses another card.
fn drag_over(board: &mut BoardState, column: u16, row: u16) {
    let Gesture::Dragging { index } = board.gesture else {
        return;
    };
    if let Some(target) = board.hit_test(column, row)
        && target != index
    {
        // The gesture follows the splice, like the selection.
        board.move_card(index, target);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;
    use lectern_core::{Board, Card};
    use ratatui::layout::Rect;

    use super::super::state::CardRect;
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    fn three_lessons() -> BoardState {
        let mut state = BoardState::new(Board::new(vec![
            Card::lesson("A", "first"),
            Card::lesson("B", "second"),
            Card::lesson("C", "third"),
        ]));
        state.set_viewport(30, 20);
        // Single-column layout: one rect per card, stacked vertically.
        state.store_rects(vec![
            CardRect { index: 0, area: Rect::new(1, 0, 24, 4) },
            CardRect { index: 1, area: Rect::new(1, 5, 24, 4) },
            CardRect { index: 2, area: Rect::new(1, 10, 24, 4) },
        ]);
        state
    }

    fn titles(state: &BoardState) -> Vec<&str> {
        state.board().cards().iter().map(Card::primary_text).collect()
    }

    #[test]
    fn test_arrow_keys_move_selection() {
        let mut board = three_lessons();
        assert_eq!(board.selected, Some(0));

        let _ = handle_key(&mut board, key(KeyCode::Right));
        assert_eq!(board.selected, Some(1));

        let _ = handle_key(&mut board, key(KeyCode::Left));
        assert_eq!(board.selected, Some(0));
    }

    #[test]
    fn test_shift_l_moves_card_later_and_selection_follows() {
        let mut board = three_lessons();

        let _ = handle_key(&mut board, key(KeyCode::Char('L')));

        assert_eq!(titles(&board), ["B", "A", "C"]);
        assert_eq!(board.selected, Some(1));
    }

    #[test]
    fn test_shift_h_at_front_is_a_no_op() {
        let mut board = three_lessons();

        let _ = handle_key(&mut board, key(KeyCode::Char('H')));

        assert_eq!(titles(&board), ["A", "B", "C"]);
        assert_eq!(board.selected, Some(0));
    }

    #[test]
    fn test_d_dismisses_the_selected_card() {
        let mut board = three_lessons();
        board.selected = Some(1);

        let _ = handle_key(&mut board, key(KeyCode::Char('d')));

        assert_eq!(titles(&board), ["A", "C"]);
        assert_eq!(board.selected, Some(1));
    }

    #[test]
    fn test_r_requests_the_relabel_overlay() {
        let mut board = three_lessons();
        board.selected = Some(2);

        let request = handle_key(&mut board, key(KeyCode::Char('r')));

        assert!(matches!(request, Some(OverlayRequest::Relabel { index: 2 })));
    }

    #[test]
    fn test_r_without_selection_does_nothing() {
        let mut board = BoardState::new(Board::default());

        let request = handle_key(&mut board, key(KeyCode::Char('r')));

        assert!(request.is_none());
    }

    #[test]
    fn test_press_on_card_selects_and_arms() {
        let mut board = three_lessons();

        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 6), 8);

        assert_eq!(board.selected, Some(1));
        assert!(matches!(
            board.gesture,
            Gesture::Pending { index: 1, origin: (3, 6) }
        ));
    }

    #[test]
    fn test_press_outside_cards_disarms() {
        let mut board = three_lessons();
        board.gesture = Gesture::Dragging { index: 0 };

        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 28, 2), 8);

        assert!(matches!(board.gesture, Gesture::Idle));
    }

    #[test]
    fn test_small_movement_stays_pending() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), 8);

        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 4, 1), 8);

        assert!(matches!(board.gesture, Gesture::Pending { .. }));
    }

    #[test]
    fn test_vertical_drag_splices_under_the_pointer() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), 8);

        // Pointer lands inside card 1's rect: order becomes B, A, C.
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 3, 6), 8);

        assert_eq!(titles(&board), ["B", "A", "C"]);
        assert!(matches!(board.gesture, Gesture::Dragging { index: 1 }));
        assert_eq!(board.selected, Some(1));
    }

    #[test]
    fn test_sideways_swipe_tracks_travel() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), 8);

        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 1), 8);

        assert!(matches!(
            board.gesture,
            Gesture::Swiping { index: 0, dx: 9, .. }
        ));
    }

    #[test]
    fn test_release_past_threshold_dismisses() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), 8);
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 1), 8);

        handle_mouse(&mut board, mouse(MouseEventKind::Up(MouseButton::Left), 12, 1), 8);

        assert_eq!(titles(&board), ["B", "C"]);
        assert!(matches!(board.gesture, Gesture::Idle));
    }

    #[test]
    fn test_release_under_threshold_snaps_back() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), 8);
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 8, 1), 8);

        handle_mouse(&mut board, mouse(MouseEventKind::Up(MouseButton::Left), 8, 1), 8);

        assert_eq!(titles(&board), ["A", "B", "C"]);
        assert!(matches!(board.gesture, Gesture::Idle));
    }

    #[test]
    fn test_leftward_swipe_also_dismisses() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 20, 1), 8);
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 10, 1), 8);

        handle_mouse(&mut board, mouse(MouseEventKind::Up(MouseButton::Left), 10, 1), 8);

        assert_eq!(titles(&board), ["B", "C"]);
    }

    #[test]
    fn test_keyboard_dismiss_mid_swipe_disarms_the_gesture() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 11), 8);
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 11), 8);
        assert!(matches!(board.gesture, Gesture::Swiping { index: 2, .. }));

        // 'd' removes the card the swipe holds; the release must not
        // replay the old index into a second dismissal.
        let _ = handle_key(&mut board, key(KeyCode::Char('d')));
        handle_mouse(&mut board, mouse(MouseEventKind::Up(MouseButton::Left), 12, 11), 8);

        assert_eq!(titles(&board), ["A", "B"]);
        assert!(matches!(board.gesture, Gesture::Idle));
    }

    #[test]
    fn test_reorder_mid_swipe_keeps_the_swipe_on_its_card() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 6), 8);
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 6), 8);
        assert!(matches!(board.gesture, Gesture::Swiping { index: 1, .. }));

        // Move the selection back to A and splice it past B mid-swipe.
        let _ = handle_key(&mut board, key(KeyCode::Left));
        let _ = handle_key(&mut board, key(KeyCode::Char('L')));
        handle_mouse(&mut board, mouse(MouseEventKind::Up(MouseButton::Left), 12, 6), 8);

        // The release dismisses B, the card the swipe holds, not A.
        assert_eq!(titles(&board), ["A", "C"]);
    }

    #[test]
    fn test_axis_never_changes_mid_gesture() {
        let mut board = three_lessons();
        handle_mouse(&mut board, mouse(MouseEventKind::Down(MouseButton::Left), 3, 1), 8);
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 1), 8);

        // Vertical movement after committing sideways keeps swiping.
        handle_mouse(&mut board, mouse(MouseEventKind::Drag(MouseButton::Left), 12, 11), 8);

        assert!(matches!(board.gesture, Gesture::Swiping { .. }));
        assert_eq!(titles(&board), ["A", "B", "C"]);
    }

    #[test]
    fn test_wheel_scrolls_the_board() {
        let mut board = three_lessons();
        board.set_viewport(30, 6);
        assert!(board.max_scroll() > 0);

        handle_mouse(&mut board, mouse(MouseEventKind::ScrollDown, 3, 3), 8);
        assert_eq!(board.scroll, 2);

        handle_mouse(&mut board, mouse(MouseEventKind::ScrollUp, 3, 3), 8);
        assert_eq!(board.scroll, 0);
    }
}
