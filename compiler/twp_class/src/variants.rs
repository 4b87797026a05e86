//! Variant splitting.
//!
//! A class token is a chain of modifier segments followed by a root:
//!
//! ```text
//! md:hover:[&>*]:bg-red-500
//! ^^ ^^^^^ ^^^^^ ^^^^^^^^^^
//! modifiers...   root
//! ```
//!
//! Segments are separated by `:` at the top level only. A `:` inside
//! `[...]` (arbitrary variants/values) or inside a quoted span
//! (`content-['a:b']`) is part of the segment.
//!
//! # Scanning Rules
//!
//! - Bracket depth: `[` increments, `]` decrements (floored at 0). Bracket
//!   kinds are not distinguished.
//! - Quotes: `'` or `"` opens a quoted span that only the same character
//!   closes. Inside a quoted span, `\` escapes the following byte.
//! - A trailing empty buffer is not pushed (`hover:` has one segment).
//!   Interior empty segments are kept so joining with `:` stays lossless.
//!
//! Only ASCII bytes are inspected, so every split point is a char boundary.

use smallvec::SmallVec;
use std::ops::Range;

/// Segments of a token, borrowed from the token.
///
/// Four inline slots cover nearly every real-world token
/// (`dark:md:hover:bg-x` is already an outlier).
pub type Segments<'a> = SmallVec<[&'a str; 4]>;

/// Split `token` on top-level `:` characters.
///
/// Never fails. Unbalanced brackets or an unterminated quote simply keep
/// the scanner in the nested state until the end of the token.
pub fn split_variants(token: &str) -> Segments<'_> {
    segment_ranges(token)
        .into_iter()
        .map(|range| &token[range])
        .collect()
}

/// Byte ranges of each segment within `token`.
pub(crate) fn segment_ranges(token: &str) -> SmallVec<[Range<usize>; 4]> {
    let bytes = token.as_bytes();
    let mut ranges = SmallVec::new();
    let mut depth: u32 = 0;
    let mut quote: Option<u8> = None;
    let mut start = 0;
    let mut pos = 0;

    while pos < bytes.len() {
        let byte = bytes[pos];
        if let Some(open) = quote {
            if byte == b'\\' {
                // Skip the escaped byte; `\'` cannot close the span.
                pos += 2;
                continue;
            }
            if byte == open {
                quote = None;
            }
        } else {
            match byte {
                b'\'' | b'"' => quote = Some(byte),
                b'[' => depth += 1,
                b']' => depth = depth.saturating_sub(1),
                b':' if depth == 0 => {
                    ranges.push(start..pos);
                    start = pos + 1;
                }
                _ => {}
            }
        }
        pos += 1;
    }

    if start < bytes.len() {
        ranges.push(start..bytes.len());
    }
    ranges
}
