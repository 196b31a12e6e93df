//! Board view state.
//!
//! `BoardState` owns the record sequence plus everything the screen needs:
//! a per-card cache of built content, the selection, scroll position, and
//! the in-flight pointer gesture. Every board mutation flows through the
//! sequence first and comes back as a `BoardChange`, which `apply` uses to
//! patch the cache without rebuilding untouched cards.

use std::cell::RefCell;

use lectern_core::{Board, BoardChange, Card};
use ratatui::layout::{Position, Rect};
use tracing::{debug, info};

use super::card::{self, BuiltCard};
use super::gesture::Gesture;
use super::layout::{self, CARD_GAP, FlexLayout};
use super::render::{BOARD_MARGIN, SCROLLBAR_WIDTH};

/// One card's view cache: built interior plus its display-only override.
///
/// The override travels with the card when it moves and dies with it when
/// it is dismissed.
#[derive(Debug, Clone)]
pub struct CardSlot {
    built: BuiltCard,
    label_override: Option<String>,
}

impl CardSlot {
    fn bind(card: &Card) -> Self {
        Self {
            built: card::build_card(card, None),
            label_override: None,
        }
    }

    pub fn built(&self) -> &BuiltCard {
        &self.built
    }

    pub fn label_override(&self) -> Option<&str> {
        self.label_override.as_deref()
    }
}

/// Screen rectangle of a rendered card, for mouse hit-testing.
#[derive(Debug, Clone, Copy)]
pub struct CardRect {
    pub index: usize,
    pub area: Rect,
}

/// View state for the board feature slice.
#[derive(Debug)]
pub struct BoardState {
    board: Board,
    /// View cache, index-aligned with the board at all times.
    slots: Vec<CardSlot>,
    /// Selected card, kept in bounds by `apply`.
    pub selected: Option<usize>,
    /// Scroll offset in content rows.
    pub scroll: u16,
    /// Board area size (terminal minus the status line).
    viewport: (u16, u16),
    pub gesture: Gesture,
    /// Visible card rectangles. Set during render, used for mouse hit
    /// testing on the following events.
    rects: RefCell<Vec<CardRect>>,
}

impl BoardState {
    pub fn new(board: Board) -> Self {
        let slots = board.cards().iter().map(CardSlot::bind).collect();
        let selected = (!board.is_empty()).then_some(0);
        Self {
            board,
            slots,
            selected,
            scroll: 0,
            viewport: (0, 0),
            gesture: Gesture::Idle,
            rects: RefCell::new(Vec::new()),
        }
    }

    pub fn seeded() -> Self {
        Self::new(Board::seeded())
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    pub fn viewport(&self) -> (u16, u16) {
        self.viewport
    }

    pub fn set_viewport(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.clamp_scroll();
    }

    // ========================================================================
    // Mutations
    // ========================================================================

    /// Moves the card at `from` to `to` and patches the view cache.
    pub fn move_card(&mut self, from: usize, to: usize) {
        let change = self.board.move_card(from, to);
        debug!(from, to, "card moved");
        self.apply(change);
    }

    /// Removes the card at `index` from the board.
    pub fn dismiss(&mut self, index: usize) {
        let (card, change) = self.board.remove_card(index);
        info!(
            kind = card.kind().label(),
            title = card.primary_text(),
            "card dismissed"
        );
        self.apply(change);
    }

    /// Rebinds the card at `index` with an optional label override.
    pub fn relabel(&mut self, index: usize, label: Option<String>) {
        let change = self.board.relabel_card(index, label);
        debug!(index, "card relabeled");
        self.apply(change);
    }

    /// Applies a board change to the view cache. The selection and any
    /// armed gesture follow their card across shifted indices; a removal
    /// disarms the gesture outright.
    fn apply(&mut self, change: BoardChange) {
        match change {
            BoardChange::Moved { from, to } => {
                let slot = self.slots.remove(from);
                self.slots.insert(to, slot);
                if let Some(sel) = self.selected {
                    self.selected = Some(shifted(sel, from, to));
                }
                if let Some(held) = self.gesture.held_index() {
                    self.gesture = self.gesture.with_index(shifted(held, from, to));
                }
                self.clamp_scroll();
                self.scroll_selected_into_view();
            }
            BoardChange::Removed { index } => {
                self.slots.remove(index);
                // Whatever index the gesture held is stale now.
                self.gesture = Gesture::Idle;
                self.selected = match self.selected {
                    Some(_) if self.slots.is_empty() => None,
                    Some(sel) if sel == index => Some(sel.min(self.slots.len() - 1)),
                    Some(sel) if sel > index => Some(sel - 1),
                    other => other,
                };
                self.clamp_scroll();
                self.scroll_selected_into_view();
            }
            BoardChange::Relabeled { index, label } => {
                // The partial path: only this slot is rebuilt.
                let slot = &mut self.slots[index];
                slot.label_override = label;
                slot.built = card::build_card(self.board.card(index), slot.label_override.as_deref());
            }
        }
        debug_assert_eq!(self.slots.len(), self.board.len());
    }

    // ========================================================================
    // Selection
    // ========================================================================

    pub fn select_prev(&mut self) {
        match self.selected {
            Some(sel) if sel > 0 => self.selected = Some(sel - 1),
            None if !self.slots.is_empty() => self.selected = Some(0),
            _ => {}
        }
        self.scroll_selected_into_view();
    }

    pub fn select_next(&mut self) {
        match self.selected {
            Some(sel) if sel + 1 < self.slots.len() => self.selected = Some(sel + 1),
            None if !self.slots.is_empty() => self.selected = Some(0),
            _ => {}
        }
        self.scroll_selected_into_view();
    }

    /// Moves the selection to the nearest card in an adjacent row.
    ///
    /// Nearest means the closest row in the chosen direction, ties broken
    /// by horizontal distance.
    pub fn select_vertical(&mut self, down: bool) {
        let Some(sel) = self.selected else {
            if !self.slots.is_empty() {
                self.selected = Some(0);
                self.scroll_selected_into_view();
            }
            return;
        };
        let flex = self.layout();
        let current = flex.slots[sel];
        let target = flex
            .slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| {
                if down {
                    slot.y > current.y
                } else {
                    slot.y < current.y
                }
            })
            .min_by_key(|(_, slot)| {
                let row_distance = if down {
                    slot.y - current.y
                } else {
                    current.y - slot.y
                };
                let x_distance = (i32::from(slot.x) - i32::from(current.x)).abs();
                (row_distance, x_distance)
            })
            .map(|(index, _)| index);
        if let Some(index) = target {
            self.selected = Some(index);
            self.scroll_selected_into_view();
        }
    }

    // ========================================================================
    // Geometry and scrolling
    // ========================================================================

    /// Content width available to cards after the left margin and the
    /// scrollbar column.
    pub fn usable_width(&self) -> u16 {
        self.viewport.0.saturating_sub(BOARD_MARGIN + SCROLLBAR_WIDTH)
    }

    /// Lays out the current sequence for the current viewport.
    pub fn layout(&self) -> FlexLayout {
        let sizes: Vec<(u16, u16)> = self.slots.iter().map(|slot| slot.built.size()).collect();
        layout::flex_wrap(&sizes, self.usable_width(), CARD_GAP)
    }

    pub fn max_scroll(&self) -> u16 {
        self.layout().content_height.saturating_sub(self.viewport.1)
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let max = i32::from(self.max_scroll());
        let next = (i32::from(self.scroll) + delta).clamp(0, max);
        self.scroll = next as u16;
    }

    pub fn clamp_scroll(&mut self) {
        self.scroll = self.scroll.min(self.max_scroll());
    }

    fn scroll_selected_into_view(&mut self) {
        if self.viewport.1 == 0 {
            return;
        }
        let Some(sel) = self.selected else { return };
        let slot = self.layout().slots[sel];
        if slot.y < self.scroll {
            self.scroll = slot.y;
        } else if slot.y + slot.height > self.scroll + self.viewport.1 {
            self.scroll = slot.y + slot.height - self.viewport.1;
        }
    }

    // ========================================================================
    // Hit testing
    // ========================================================================

    /// Stores the rectangles painted this frame. Called from render.
    pub fn store_rects(&self, rects: Vec<CardRect>) {
        *self.rects.borrow_mut() = rects;
    }

    /// Finds the card under a screen position, if any.
    ///
    /// Later rectangles win, matching paint order.
    pub fn hit_test(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.rects
            .borrow()
            .iter()
            .rev()
            .find(|rect| rect.area.contains(position))
            .map(|rect| rect.index)
    }

    /// Sideways travel of an in-flight swipe, if one is active.
    pub fn swipe_dx(&self) -> Option<i32> {
        match self.gesture {
            Gesture::Swiping { dx, .. } => Some(dx),
            _ => None,
        }
    }
}

/// Where `index` lands after the card at `from` splices to `to`.
fn shifted(index: usize, from: usize, to: usize) -> usize {
    if index == from {
        to
    } else if from < to && index > from && index <= to {
        index - 1
    } else if to < from && index >= to && index < from {
        index + 1
    } else {
        index
    }
}

#[cfg(test)]
mod tests {
    use lectern_core::CardKind;

    use super::*;

    fn lettered(titles: &[&str]) -> BoardState {
        BoardState::new(Board::new(
            titles
                .iter()
                .map(|title| Card::lesson(*title, "test"))
                .collect(),
        ))
    }

    fn titles(state: &BoardState) -> Vec<&str> {
        state.board().cards().iter().map(Card::primary_text).collect()
    }

    #[test]
    fn test_new_selects_first_card() {
        let state = BoardState::seeded();
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_new_empty_board_has_no_selection() {
        let state = BoardState::new(Board::default());
        assert_eq!(state.selected, None);
    }

    #[test]
    fn test_selection_follows_moved_card() {
        let mut state = lettered(&["A", "B", "C"]);
        state.selected = Some(0);

        state.move_card(0, 2);

        assert_eq!(titles(&state), ["B", "C", "A"]);
        assert_eq!(state.selected, Some(2));
    }

    #[test]
    fn test_selection_shifts_when_move_crosses_it() {
        let mut state = lettered(&["A", "B", "C"]);
        state.selected = Some(1);

        state.move_card(0, 2);

        // B now sits at index 0.
        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_selection_shifts_for_move_towards_front() {
        let mut state = lettered(&["A", "B", "C"]);
        state.selected = Some(0);

        state.move_card(2, 0);

        assert_eq!(titles(&state), ["C", "A", "B"]);
        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_dismiss_clamps_selection_to_last_card() {
        let mut state = lettered(&["A", "B", "C"]);
        state.selected = Some(2);

        state.dismiss(2);

        assert_eq!(state.selected, Some(1));
    }

    #[test]
    fn test_dismiss_decrements_selection_above_removal() {
        let mut state = lettered(&["A", "B", "C"]);
        state.selected = Some(2);

        state.dismiss(0);

        assert_eq!(state.selected, Some(1));
        assert_eq!(titles(&state), ["B", "C"]);
    }

    #[test]
    fn test_dismissing_last_card_clears_selection() {
        let mut state = lettered(&["A"]);

        state.dismiss(0);

        assert_eq!(state.selected, None);
        assert!(state.board().is_empty());
    }

    #[test]
    fn test_dismiss_disarms_an_armed_gesture() {
        let mut state = lettered(&["A", "B", "C"]);
        state.gesture = Gesture::Swiping { index: 2, origin_x: 3, dx: 9 };

        state.dismiss(2);

        assert_eq!(state.gesture, Gesture::Idle);
    }

    #[test]
    fn test_gesture_follows_its_card_across_a_move() {
        let mut state = lettered(&["A", "B", "C"]);
        state.gesture = Gesture::Swiping { index: 1, origin_x: 3, dx: -4 };

        state.move_card(0, 2);

        // B now sits at index 0; the swipe still holds B.
        assert_eq!(
            state.gesture,
            Gesture::Swiping { index: 0, origin_x: 3, dx: -4 }
        );
    }

    #[test]
    fn test_relabel_rebuilds_only_the_target_slot() {
        let mut state = BoardState::seeded();
        let untouched_before = format!("{:?}", state.slots()[1].built());

        state.relabel(0, Some("卡耐基梅隆大学".to_string()));

        let untouched_after = format!("{:?}", state.slots()[1].built());
        assert_eq!(untouched_before, untouched_after);
        assert_eq!(state.slots()[0].label_override(), Some("卡耐基梅隆大学"));
    }

    #[test]
    fn test_relabel_none_restores_record_text() {
        let mut state = BoardState::seeded();
        state.relabel(0, Some("override".to_string()));

        state.relabel(0, None);

        assert_eq!(state.slots()[0].label_override(), None);
        assert_eq!(state.board().card(0).primary_text(), "Carnegie Mellon University");
    }

    #[test]
    fn test_override_travels_with_moved_card() {
        let mut state = lettered(&["A", "B", "C"]);
        state.relabel(0, Some("renamed".to_string()));

        state.move_card(0, 2);

        assert_eq!(state.slots()[2].label_override(), Some("renamed"));
        assert_eq!(state.slots()[0].label_override(), None);
    }

    #[test]
    fn test_override_dies_with_dismissed_card() {
        let mut state = lettered(&["A", "B"]);
        state.relabel(0, Some("renamed".to_string()));

        state.dismiss(0);

        assert_eq!(state.slots()[0].label_override(), None);
    }

    #[test]
    fn test_seeded_slot_kinds_align_with_board() {
        let state = BoardState::seeded();
        for (index, slot) in state.slots().iter().enumerate() {
            let expected = card::card_size(state.board().kind_at(index));
            assert_eq!(slot.built().size(), expected);
        }
        assert_eq!(state.board().count(CardKind::College), 3);
    }

    #[test]
    fn test_scroll_by_clamps_to_content() {
        let mut state = BoardState::seeded();
        state.set_viewport(60, 8);
        let max = state.max_scroll();
        assert!(max > 0);

        state.scroll_by(1000);
        assert_eq!(state.scroll, max);

        state.scroll_by(-1000);
        assert_eq!(state.scroll, 0);
    }

    #[test]
    fn test_select_vertical_finds_nearest_in_next_row() {
        // Viewport 60 wide leaves 58 usable columns: the college card (30)
        // and one lesson (24) share the first row, the rest wrap below.
        let mut state = BoardState::seeded();
        state.set_viewport(60, 30);
        state.selected = Some(0);

        state.select_vertical(true);

        let flex = state.layout();
        let target = state.selected.unwrap();
        assert!(flex.slots[target].y > flex.slots[0].y);
        assert_eq!(flex.slots[target].x, 0);
    }

    #[test]
    fn test_select_vertical_up_from_top_row_stays() {
        let mut state = BoardState::seeded();
        state.set_viewport(60, 30);
        state.selected = Some(0);

        state.select_vertical(false);

        assert_eq!(state.selected, Some(0));
    }

    #[test]
    fn test_hit_test_prefers_later_rects() {
        let state = BoardState::seeded();
        state.store_rects(vec![
            CardRect { index: 0, area: Rect::new(0, 0, 10, 4) },
            CardRect { index: 1, area: Rect::new(5, 0, 10, 4) },
        ]);

        assert_eq!(state.hit_test(7, 1), Some(1));
        assert_eq!(state.hit_test(2, 1), Some(0));
        assert_eq!(state.hit_test(40, 1), None);
    }
}
