//! Grammar Modules
//!
//! Each module extends `Parser` with the scanning rules for one kind of
//! construct:
//!
//! - [`code`]: JavaScript skipping (strings, comments, templates, regexes,
//!   bracket balancing)
//! - [`jsx`]: JSX elements and their children
//! - [`markup`]: HTML-like documents
//! - [`tag`]: opening-tag attributes, shared by markup and JSX
//! - [`expr`]: the expression subset inside `{...}` attribute values
//!
//! Code and text are skipped, never parsed. Only attribute values get a
//! tree, and only as deep as the rewriter needs.

mod code;
mod expr;
mod jsx;
mod markup;
mod tag;

/// First byte of a JavaScript identifier.
#[inline]
fn is_ident_start(b: u8) -> bool {
    b.is_ascii_alphabetic() || b == b'_' || b == b'$' || b >= 0x80
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    is_ident_start(b) || b.is_ascii_digit()
}
