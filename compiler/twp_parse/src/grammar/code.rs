//! JavaScript skipping.
//!
//! Code is never parsed, only walked: the scanner has to find where each
//! string, template, comment, regex, and JSX element ends, and keep bracket
//! depth so a caller can stop at the `}` or `,` that closes its context.
//!
//! Whether `/` starts a regex and whether `<` starts a tag both depend on the
//! previous significant token. After an operand (identifier, literal, `)`,
//! `]`) they are operators; anywhere else they begin an expression.

use super::{is_ident_continue, is_ident_start};
use crate::{ParseError, ParseErrorKind, Parser};
use twp_ir::Span;

/// Keywords after which an expression starts.
const EXPRESSION_KEYWORDS: &[&str] = &[
    "return",
    "typeof",
    "instanceof",
    "in",
    "of",
    "new",
    "delete",
    "void",
    "throw",
    "case",
    "do",
    "else",
    "yield",
    "await",
];

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Prev {
    Operand,
    Operator,
}

impl Parser<'_> {
    /// Scan a whole file of code, recording every JSX element.
    pub(crate) fn parse_script(&mut self) -> Result<(), ParseError> {
        if self.cursor.starts_with("#!") {
            self.cursor.eat_until_newline_or_eof();
        }
        self.scan_code(&[])?;
        Ok(())
    }

    /// Skip code until a byte in `stops` appears outside any bracket pair.
    ///
    /// The cursor is left on the stop byte. Returns `false` if EOF came
    /// first. With no stops the scan runs to EOF and unbalanced closers are
    /// ignored.
    pub(crate) fn scan_code(&mut self, stops: &[u8]) -> Result<bool, ParseError> {
        let mut depth = 0usize;
        let mut prev = Prev::Operator;
        loop {
            self.cursor.eat_whitespace();
            if self.cursor.is_eof() {
                return Ok(false);
            }
            let b = self.cursor.current();
            if depth == 0 && stops.contains(&b) {
                return Ok(true);
            }
            match b {
                b'"' | b'\'' => {
                    self.skip_string()?;
                    prev = Prev::Operand;
                }
                b'`' => {
                    self.skip_template()?;
                    prev = Prev::Operand;
                }
                b'/' => {
                    if self.skip_comment()? {
                        continue;
                    }
                    if prev == Prev::Operator && self.skip_regex() {
                        prev = Prev::Operand;
                    } else {
                        self.cursor.advance();
                        prev = Prev::Operator;
                    }
                }
                b'<' => {
                    if prev == Prev::Operator && self.kind.allows_jsx() && self.try_jsx_element()? {
                        prev = Prev::Operand;
                    } else {
                        self.cursor.advance();
                        prev = Prev::Operator;
                    }
                }
                b'(' | b'[' | b'{' => {
                    depth += 1;
                    self.cursor.advance();
                    prev = Prev::Operator;
                }
                b')' | b']' | b'}' => {
                    depth = depth.saturating_sub(1);
                    self.cursor.advance();
                    // A `}` usually ends a block, after which a statement
                    // (and so possibly a regex or tag) starts.
                    prev = if b == b'}' {
                        Prev::Operator
                    } else {
                        Prev::Operand
                    };
                }
                _ if is_ident_start(b) => {
                    let start = self.cursor.pos();
                    self.eat_ident();
                    prev = if EXPRESSION_KEYWORDS.contains(&self.cursor.slice_from(start)) {
                        Prev::Operator
                    } else {
                        Prev::Operand
                    };
                }
                _ if b.is_ascii_digit() => {
                    self.cursor
                        .eat_while(|b| b.is_ascii_alphanumeric() || b == b'.' || b == b'_');
                    prev = Prev::Operand;
                }
                _ => {
                    self.cursor.advance();
                    prev = Prev::Operator;
                }
            }
        }
    }

    /// Skip a `{...}` block starting at `{`, including the closing `}`.
    pub(crate) fn skip_braced(&mut self) -> Result<(), ParseError> {
        let open = self.cursor.pos();
        self.cursor.advance();
        if !self.scan_code(b"}")? {
            return Err(self.error(open, ParseErrorKind::UnterminatedExpression));
        }
        self.cursor.advance();
        Ok(())
    }

    /// Skip a `"..."` or `'...'` literal, returning its span with quotes.
    pub(crate) fn skip_string(&mut self) -> Result<Span, ParseError> {
        let start = self.cursor.pos();
        let quote = self.cursor.current();
        self.cursor.advance();
        loop {
            match self.cursor.skip_to3(quote, b'\\', b'\n') {
                b'\\' => {
                    self.cursor.advance();
                    if self.cursor.current() == b'\r' && self.cursor.peek() == b'\n' {
                        self.cursor.advance();
                    }
                    self.cursor.advance_char();
                }
                b if b == quote => {
                    self.cursor.advance();
                    return Ok(self.span_from(start));
                }
                _ => return Err(self.error(start, ParseErrorKind::UnterminatedString)),
            }
        }
    }

    /// Skip a template literal, scanning `${...}` holes as code.
    fn skip_template(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.pos();
        self.cursor.advance();
        loop {
            match self.cursor.skip_to3(b'`', b'\\', b'$') {
                b'`' => {
                    self.cursor.advance();
                    return Ok(());
                }
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                b'$' if self.cursor.peek() == b'{' => {
                    self.cursor.advance_n(2);
                    if !self.scan_code(b"}")? {
                        return Err(self.error(start, ParseErrorKind::UnterminatedTemplate));
                    }
                    self.cursor.advance();
                }
                b'$' => self.cursor.advance(),
                _ => return Err(self.error(start, ParseErrorKind::UnterminatedTemplate)),
            }
        }
    }

    /// Skip a `//` or `/* */` comment if one starts here.
    pub(crate) fn skip_comment(&mut self) -> Result<bool, ParseError> {
        if self.cursor.current() != b'/' {
            return Ok(false);
        }
        match self.cursor.peek() {
            b'/' => {
                self.cursor.eat_until_newline_or_eof();
                Ok(true)
            }
            b'*' => {
                let start = self.cursor.pos();
                self.cursor.advance_n(2);
                if !self.cursor.skip_past_str("*/") {
                    return Err(self.error(start, ParseErrorKind::UnterminatedComment));
                }
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Skip whitespace and comments.
    pub(crate) fn skip_trivia(&mut self) -> Result<(), ParseError> {
        loop {
            self.cursor.eat_whitespace();
            if !self.skip_comment()? {
                return Ok(());
            }
        }
    }

    /// Skip a regex literal starting at `/`.
    ///
    /// A regex cannot span lines. If no closing `/` appears on the line,
    /// the cursor is restored and `false` returned so the `/` is read as
    /// division.
    fn skip_regex(&mut self) -> bool {
        let start = self.cursor.pos();
        self.cursor.advance();
        let mut in_class = false;
        loop {
            match self.cursor.current() {
                b'\\' => {
                    self.cursor.advance();
                    if matches!(self.cursor.current(), b'\n' | b'\r') || self.cursor.is_eof() {
                        break;
                    }
                    self.cursor.advance_char();
                }
                b'[' => {
                    in_class = true;
                    self.cursor.advance();
                }
                b']' => {
                    in_class = false;
                    self.cursor.advance();
                }
                b'/' if !in_class => {
                    self.cursor.advance();
                    // Flags.
                    self.cursor.eat_while(is_ident_continue);
                    return true;
                }
                b'\n' | b'\r' => break,
                _ if self.cursor.is_eof() => break,
                _ => self.cursor.advance_char(),
            }
        }
        self.cursor.reset(start);
        false
    }

    /// Advance past an identifier or keyword.
    pub(crate) fn eat_ident(&mut self) {
        loop {
            let b = self.cursor.current();
            if b >= 0x80 {
                self.cursor.advance_char();
            } else if is_ident_continue(b) {
                self.cursor.advance();
            } else {
                return;
            }
        }
    }
}
