//! Line-feed spacing
//!
//! The rewrite is purely textual: one space goes in front of every `\n`.
//! Nothing else in the source is touched, `\r` included.

use std::borrow::Cow;

/// Returns `source` with a space inserted before every line feed.
///
/// Input without a line feed is returned borrowed. The pass is not
/// idempotent: running it on its own output adds another space per line.
pub fn transform(source: &str) -> Cow<'_, str> {
    if !source.contains('\n') {
        return Cow::Borrowed(source);
    }

    let mut spaced = String::with_capacity(source.len() + added_bytes(source));
    for ch in source.chars() {
        if ch == '\n' {
            spaced.push(' ');
        }
        spaced.push(ch);
    }
    Cow::Owned(spaced)
}

/// Number of bytes [`transform`] adds to `source`
pub fn added_bytes(source: &str) -> usize {
    source.bytes().filter(|&b| b == b'\n').count()
}
