//! Card records for the course board.
//!
//! A card is either a college header or a lesson entry. The rendering
//! category is derived from the variant, so a card can never carry a
//! mismatched tag.

/// One entry on the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Card {
    /// A course entry: title plus a one-line description.
    Lesson { title: String, description: String },
    /// A college header: display name plus an avatar reference.
    ///
    /// The avatar reference is carried as an opaque string and never
    /// fetched; renderers show its host as plain text.
    College { name: String, avatar_url: String },
}

/// Rendering category of a card, derived from its variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CardKind {
    College,
    Lesson,
}

impl CardKind {
    /// Lowercase singular label for status summaries.
    pub fn label(self) -> &'static str {
        match self {
            CardKind::College => "college",
            CardKind::Lesson => "lesson",
        }
    }
}

impl Card {
    pub fn lesson(title: impl Into<String>, description: impl Into<String>) -> Self {
        Card::Lesson {
            title: title.into(),
            description: description.into(),
        }
    }

    pub fn college(name: impl Into<String>, avatar_url: impl Into<String>) -> Self {
        Card::College {
            name: name.into(),
            avatar_url: avatar_url.into(),
        }
    }

    /// Returns the rendering category for this card.
    pub fn kind(&self) -> CardKind {
        match self {
            Card::Lesson { .. } => CardKind::Lesson,
            Card::College { .. } => CardKind::College,
        }
    }

    /// The primary display field: the college name or the lesson title.
    ///
    /// This is the field a label override replaces at render time.
    pub fn primary_text(&self) -> &str {
        match self {
            Card::Lesson { title, .. } => title,
            Card::College { name, .. } => name,
        }
    }

    /// The secondary display field: the lesson description or the avatar
    /// reference of a college.
    pub fn secondary_text(&self) -> &str {
        match self {
            Card::Lesson { description, .. } => description,
            Card::College { avatar_url, .. } => avatar_url,
        }
    }
}
