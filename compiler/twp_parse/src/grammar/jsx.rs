//! JSX elements.
//!
//! An element is scanned from its `<` to the end of its closing tag. The
//! opening tags of the element and of every descendant are recorded;
//! children text is skipped and `{...}` children are scanned as code.
//! Nesting is tracked with a depth counter, not recursion.

use super::is_ident_start;
use crate::{ParseError, ParseErrorKind, Parser};
use twp_ir::Span;

/// An opening tag that has been scanned.
struct OpenTag {
    name: String,
    span: Span,
    self_closing: bool,
}

impl Parser<'_> {
    /// Scan a JSX element starting at `<`, children included.
    ///
    /// Returns `false` with the cursor untouched if the `<` does not open a
    /// tag (a comparison or a TSX type parameter list such as `<T,>`).
    pub(crate) fn try_jsx_element(&mut self) -> Result<bool, ParseError> {
        let Some(open) = self.jsx_open_tag()? else {
            return Ok(false);
        };
        if !open.self_closing {
            self.jsx_children(&open)?;
        }
        Ok(true)
    }

    fn jsx_open_tag(&mut self) -> Result<Option<OpenTag>, ParseError> {
        let start = self.cursor.pos();
        let next = self.cursor.peek();
        if next == b'>' {
            // Fragment.
            self.cursor.advance_n(2);
            return Ok(Some(OpenTag {
                name: String::new(),
                span: self.span_from(start),
                self_closing: false,
            }));
        }
        if !is_ident_start(next) {
            return Ok(None);
        }

        self.cursor.advance();
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_tag_name_byte);
        let name = self.cursor.slice_from(name_start).to_owned();
        if self.is_type_parameter_list() {
            self.cursor.reset(start);
            return Ok(None);
        }

        let self_closing = self.parse_tag(start, &name)?;
        Ok(Some(OpenTag {
            name,
            span: self.span_from(start),
            self_closing,
        }))
    }

    /// After `<T`: `<T,>` and `<T extends U>` are generics, not tags.
    fn is_type_parameter_list(&mut self) -> bool {
        let after_name = self.cursor.pos();
        self.cursor.eat_whitespace();
        let verdict = if self.cursor.current() == b',' {
            true
        } else if self.cursor.pos() > after_name && self.cursor.starts_with("extends") {
            let word = self.cursor.pos();
            self.eat_ident();
            let is_keyword = self.cursor.slice_from(word) == "extends";
            self.cursor.eat_whitespace();
            is_keyword && self.cursor.current() != b'='
        } else {
            false
        };
        self.cursor.reset(after_name);
        verdict
    }

    fn jsx_children(&mut self, open: &OpenTag) -> Result<(), ParseError> {
        let mut depth = 1usize;
        loop {
            match self.cursor.skip_to2(b'<', b'{') {
                b'{' => self.skip_braced()?,
                b'<' if self.cursor.peek() == b'/' => {
                    self.cursor.advance_n(2);
                    if !self.cursor.skip_past_str(">") {
                        break;
                    }
                    depth -= 1;
                    if depth == 0 {
                        return Ok(());
                    }
                }
                b'<' => match self.jsx_open_tag()? {
                    Some(tag) if !tag.self_closing => depth += 1,
                    Some(_) => {}
                    None => self.cursor.advance(),
                },
                _ => break,
            }
        }
        Err(ParseError::new(
            open.span,
            ParseErrorKind::UnclosedElement {
                name: open.name.clone(),
            },
        ))
    }
}

/// Tag names: identifiers plus `-`, `.` (member tags), and `:` (namespaces).
pub(super) fn is_tag_name_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.' | b':' | b'$') || b >= 0x80
}
