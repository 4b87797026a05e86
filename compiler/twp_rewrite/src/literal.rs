//! Source text for rewritten string literals.

use std::fmt::Write;

use twp_ir::Quote;

/// A JavaScript string literal holding `value`, delimited by `quote`.
///
/// Escapes the backslash, the delimiter, line terminators, and other
/// control characters; everything else is written as is.
pub(crate) fn js_string(value: &str, quote: char) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push(quote);
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if c == quote => {
                out.push('\\');
                out.push(c);
            }
            c if c.is_control() => {
                let _ = write!(out, "\\u{{{:x}}}", u32::from(c));
            }
            c => out.push(c),
        }
    }
    out.push(quote);
    out
}

/// A markup or JSX attribute string with the same delimiter as the source.
///
/// Attribute strings have no escapes; `value` comes from the original
/// text plus prefixes, so it never contains the delimiter.
pub(crate) fn attribute_string(value: &str, quote: Quote) -> String {
    match quote.as_char() {
        Some(q) => format!("{q}{value}{q}"),
        None => value.to_owned(),
    }
}

/// A fresh attribute value for `value`: `"..."`, `'...'` when the text
/// holds a double quote, or a `{"..."}` container when it holds both.
pub(crate) fn attribute_value(value: &str) -> String {
    match (value.contains('"'), value.contains('\'')) {
        (false, _) => format!("\"{value}\""),
        (true, false) => format!("'{value}'"),
        (true, true) => format!("{{{}}}", js_string(value, '"')),
    }
}
