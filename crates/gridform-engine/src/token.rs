//! Colon-delimited token parsing and grouping-key helpers.
//!
//! Composite values arrive packed into single text cells: headers carry
//! `"<id>:<name>"`, teacher entries carry `"<code>:<label>"`. These helpers
//! isolate that wire convention so the transforms never split text
//! themselves.

use gridform_model::Cell;

/// Separator used for internal grouping keys. Chosen to be absent from
/// real cell data; the joined key is never emitted.
const KEY_SEPARATOR: char = '\u{1f}';

/// Split an encoded token on the first colon.
///
/// Returns `(id, rest)` where `rest` is everything after the first colon
/// with any further colons preserved, or `""` when no colon is present.
pub fn split_token(text: &str) -> (&str, &str) {
    match text.split_once(':') {
        Some((id, rest)) => (id, rest),
        None => (text, ""),
    }
}

/// Join a fixed-length run of cells into an internal grouping key.
pub fn group_key(cells: &[Cell]) -> String {
    let mut key = String::new();
    for (idx, cell) in cells.iter().enumerate() {
        if idx > 0 {
            key.push(KEY_SEPARATOR);
        }
        key.push_str(&cell.to_text());
    }
    key
}
