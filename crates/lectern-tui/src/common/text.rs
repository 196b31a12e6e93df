//! Text utilities for TUI rendering.
//!
//! Card interiors are fixed-width, so most call sites want text cut or
//! padded to an exact number of terminal columns.

use std::borrow::Cow;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncates a string with ellipsis if it exceeds max_width (unicode-aware).
///
/// Uses unicode width for accurate terminal column calculation, handling
/// wide characters (CJK, emoji) correctly.
pub fn truncate_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut truncated = String::new();
    for ch in text.chars() {
        let next_width = truncated.width() + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        truncated.push(ch);
    }
    truncated.push('…');
    truncated
}

/// Truncates from the start with a leading ellipsis, keeping the tail.
///
/// Input lines keep the cursor at the end, so the newest characters are
/// the ones worth showing.
pub fn truncate_start_with_ellipsis(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width <= 1 {
        return "…".to_string();
    }
    let mut kept: Vec<char> = Vec::new();
    let mut used = 0;
    for ch in text.chars().rev() {
        let next_width = used + ch.width().unwrap_or(0);
        if next_width + 1 > max_width {
            break;
        }
        kept.push(ch);
        used = next_width;
    }
    let mut truncated = String::from("…");
    truncated.extend(kept.into_iter().rev());
    truncated
}

/// Truncates and right-pads `text` to exactly `width` terminal columns.
///
/// A wide character that would straddle the cut point is dropped and the
/// slack filled with spaces. Widths below the one-column ellipsis floor
/// come back as the bare marker.
pub fn fit_to_width(text: &str, width: usize) -> String {
    let mut fitted = truncate_with_ellipsis(text, width);
    let used = fitted.width();
    if used < width {
        fitted.push_str(&" ".repeat(width - used));
    }
    fitted
}

/// Sanitizes pasted or external text for display.
///
/// Removes ANSI escapes (by dropping `\x1b` to break sequences) and expands
/// tabs to four spaces, since `unicode_width` counts control characters as
/// zero columns while terminals do not.
pub fn sanitize_for_display(s: &str) -> Cow<'_, str> {
    if s.contains('\x1b') || s.contains('\t') {
        Cow::Owned(s.replace('\x1b', "").replace('\t', "    "))
    } else {
        Cow::Borrowed(s)
    }
}
