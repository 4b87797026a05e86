//! Token prefixing.

use std::borrow::Cow;

use crate::variants::segment_ranges;

/// Leading marker for CSS-important utilities (`!bg-red-500`).
pub const IMPORTANT_MARKER: char = '!';

/// Apply `prefix` to the root segment of `token`.
///
/// Modifier segments keep their text, order, and `:` separators. A leading
/// `!` stays in front of the whole token, outside the prefix:
///
/// ```text
/// prefix_token("hover:bg-red-500", "tw-")  == "hover:tw-bg-red-500"
/// prefix_token("!bg-red-500", "tw-")       == "!tw-bg-red-500"
/// prefix_token("tw-bg-red-500", "tw-")     == "tw-bg-red-500"
/// ```
///
/// Idempotent: `prefix_token(prefix_token(t, p), p) == prefix_token(t, p)`.
/// A token counts as already prefixed when `prefix` starts at a segment
/// boundary and runs up to (or into) the root. For ordinary prefixes like
/// `tw-` that is "the root starts with the prefix"; for variant-style
/// prefixes like `tw:` it also covers `tw:flex`, whose root is `flex`.
///
/// Returns the input borrowed when nothing changes.
pub fn prefix_token<'a>(token: &'a str, prefix: &str) -> Cow<'a, str> {
    if prefix.is_empty() {
        return Cow::Borrowed(token);
    }

    let (marker_len, body) = match token.strip_prefix(IMPORTANT_MARKER) {
        Some(rest) => (token.len() - rest.len(), rest),
        None => (0, token),
    };

    let segments = segment_ranges(body);
    let Some(root) = segments.last() else {
        return Cow::Borrowed(token);
    };

    let already_prefixed = segments.iter().any(|segment| {
        segment.start <= root.start
            && segment.start + prefix.len() >= root.start
            && body[segment.start..].starts_with(prefix)
    });
    if already_prefixed {
        return Cow::Borrowed(token);
    }

    let split_at = marker_len + root.start;
    let mut out = String::with_capacity(token.len() + prefix.len());
    out.push_str(&token[..split_at]);
    out.push_str(prefix);
    out.push_str(&token[split_at..]);
    Cow::Owned(out)
}
