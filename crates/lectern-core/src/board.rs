//! The board: an ordered, mutable sequence of cards.
//!
//! The board is owned by the hosting surface for one screen session and
//! mutated in place. Every mutation returns a [`BoardChange`] describing
//! the display refresh it requires; the change is `#[must_use]` so a
//! mutation can never silently leave the view stale.
//!
//! Index arguments are a hard contract: passing an index at or past
//! `len()` is a programmer error and panics.

use crate::card::{Card, CardKind};

/// Display-refresh notification returned by each board mutation.
///
/// The host applies the change to its per-card view cache. Indices refer
/// to positions after the mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use = "board changes must be applied to the view cache"]
pub enum BoardChange {
    /// The card previously at `from` now sits at `to`; everything between
    /// shifted by one position.
    Moved { from: usize, to: usize },
    /// The card at `index` is gone; higher indices shifted down by one.
    Removed { index: usize },
    /// The card at `index` needs a rebind. `Some(label)` overrides its
    /// primary display field without touching the record; `None` restores
    /// the record's own text.
    Relabeled { index: usize, label: Option<String> },
}

/// Ordered sequence of cards backing one board session.
#[derive(Debug, Clone, Default)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    pub fn new(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    /// The demo board: three colleges and their courses.
    pub fn seeded() -> Self {
        Self::new(vec![
            Card::college(
                "Carnegie Mellon University",
                "https://bkimg.cdn.bcebos.com/pic/18d8bc3eb13533fa2d5b5093a2d3fd1f40345b9a?x-bce-process=image/watermark,image_d2F0ZXIvYmFpa2UxNTA=,g_7,xp_5,yp_5",
            ),
            Card::lesson("CMU 15-213", "Computer Systems: A Programmer's Perspective"),
            Card::lesson("CMU 15-445", "Database Systems"),
            Card::college(
                "Stanford University",
                "https://upload.wikimedia.org/wikipedia/zh/thumb/5/55/Stanford_University_logo.svg/400px-Stanford_University_logo.svg.png",
            ),
            Card::lesson("Stanford CS143", "Compilers"),
            Card::lesson("Stanford CS144", "Computer Network"),
            Card::college(
                "Massachusetts Institute of Technology",
                "https://upload.wikimedia.org/wikipedia/zh/thumb/4/44/MIT_Seal.svg/400px-MIT_Seal.svg.png",
            ),
            Card::lesson("MIT6.824", "Distributed System"),
        ])
    }

    /// Current number of cards, read straight from the sequence.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the card at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn card(&self, index: usize) -> &Card {
        assert!(
            index < self.cards.len(),
            "card index {index} out of bounds (len {})",
            self.cards.len()
        );
        &self.cards[index]
    }

    /// Returns the rendering category of the card at `index`.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn kind_at(&self, index: usize) -> CardKind {
        self.card(index).kind()
    }

    /// Number of cards of the given kind.
    pub fn count(&self, kind: CardKind) -> usize {
        self.cards.iter().filter(|card| card.kind() == kind).count()
    }

    /// Moves the card at `from` to position `to`, preserving the relative
    /// order of every other card (remove then reinsert, not a swap).
    ///
    /// `from == to` is permitted and still reports a change; the gesture
    /// layer may emit it during jitter and the refresh is idempotent.
    ///
    /// # Panics
    /// Panics if `from` or `to` is `>= len()`.
    pub fn move_card(&mut self, from: usize, to: usize) -> BoardChange {
        let len = self.cards.len();
        assert!(from < len, "move_card: from index {from} out of bounds (len {len})");
        assert!(to < len, "move_card: to index {to} out of bounds (len {len})");

        if from != to {
            let card = self.cards.remove(from);
            self.cards.insert(to, card);
        }
        BoardChange::Moved { from, to }
    }

    /// Removes and returns the card at `index`. Cards above it shift down
    /// by one; indices held elsewhere are stale after this call.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    #[must_use = "the removed card and the board change must be handled"]
    pub fn remove_card(&mut self, index: usize) -> (Card, BoardChange) {
        assert!(
            index < self.cards.len(),
            "remove_card: index {index} out of bounds (len {})",
            self.cards.len()
        );
        let card = self.cards.remove(index);
        (card, BoardChange::Removed { index })
    }

    /// Requests a rebind of the card at `index` with an optional label
    /// override. The board data itself is untouched; the override is
    /// display state owned by the view.
    ///
    /// # Panics
    /// Panics if `index >= len()`.
    pub fn relabel_card(&self, index: usize, label: Option<String>) -> BoardChange {
        assert!(
            index < self.cards.len(),
            "relabel_card: index {index} out of bounds (len {})",
            self.cards.len()
        );
        BoardChange::Relabeled { index, label }
    }
}
