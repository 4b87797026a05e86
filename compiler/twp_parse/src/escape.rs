//! Escape cooking for JavaScript string and template literals.
//!
//! Cooking is lenient: an unknown escape yields the escaped character
//! itself and a malformed `\x`/`\u` sequence is kept verbatim. Class
//! strings almost never contain escapes; the only goal here is that a
//! literal's decoded value matches what the runtime would see.

use std::borrow::Cow;

/// Decode the body of a string or template literal (between delimiters).
///
/// Fast path: without a backslash the source slice is returned as is.
pub(crate) fn cook(raw: &str) -> Cow<'_, str> {
    if !raw.contains('\\') {
        return Cow::Borrowed(raw);
    }

    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        let Some(esc) = chars.next() else {
            out.push('\\');
            break;
        };
        match esc {
            'n' => out.push('\n'),
            't' => out.push('\t'),
            'r' => out.push('\r'),
            'b' => out.push('\u{8}'),
            'f' => out.push('\u{c}'),
            'v' => out.push('\u{b}'),
            '0' if !chars.peek().is_some_and(char::is_ascii_digit) => out.push('\0'),
            // Line continuation.
            '\n' | '\u{2028}' | '\u{2029}' => {}
            '\r' => {
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
            }
            'x' => {
                let digits: String = chars.clone().take(2).collect();
                match hex_char(&digits, 2) {
                    Some(ch) => {
                        chars.nth(1);
                        out.push(ch);
                    }
                    None => out.push_str("\\x"),
                }
            }
            'u' => cook_unicode(&mut chars, &mut out),
            other => out.push(other),
        }
    }
    Cow::Owned(out)
}

/// `\uXXXX` or `\u{X...}`, the `\u` already consumed.
fn cook_unicode(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, out: &mut String) {
    if chars.peek() == Some(&'{') {
        let lookahead: String = chars.clone().skip(1).take_while(|&c| c != '}').collect();
        let closed = chars.clone().nth(1 + lookahead.chars().count()) == Some('}');
        if closed && !lookahead.is_empty() && lookahead.len() <= 6 {
            if let Some(ch) = hex_char(&lookahead, lookahead.len()) {
                // `{`, the digits, then `}`.
                chars.nth(lookahead.len() + 1);
                out.push(ch);
                return;
            }
        }
        out.push_str("\\u");
        return;
    }

    let digits: String = chars.clone().take(4).collect();
    match hex_char(&digits, 4) {
        Some(ch) => {
            chars.nth(3);
            out.push(ch);
        }
        None => out.push_str("\\u"),
    }
}

/// Parse exactly `width` hex digits into a scalar value.
///
/// Lone surrogates have no `char` representation and are rejected.
fn hex_char(digits: &str, width: usize) -> Option<char> {
    if digits.len() != width || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(digits, 16).ok().and_then(char::from_u32)
}
