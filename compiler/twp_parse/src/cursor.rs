//! Byte cursor over the source text.
//!
//! The cursor advances byte-by-byte and reports `0x00` past the end, so
//! dispatch loops terminate on EOF without a separate bounds check at every
//! call site. Interior null bytes are told apart from EOF with
//! [`Cursor::is_eof`].
//!
//! All positions are `u32`: [`Cursor::new`] is only reachable after the
//! source length has been checked against `u32::MAX`.

#[derive(Clone, Copy, Debug)]
pub(crate) struct Cursor<'a> {
    source: &'a str,
    pos: u32,
    len: u32,
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "source length checked against u32::MAX before any cursor exists"
)]
impl<'a> Cursor<'a> {
    pub(crate) fn new(source: &'a str) -> Self {
        debug_assert!(u32::try_from(source.len()).is_ok());
        Self {
            source,
            pos: 0,
            len: source.len() as u32,
        }
    }

    /// Byte at the current position, `0x00` at EOF.
    #[inline]
    pub(crate) fn current(&self) -> u8 {
        self.byte_at(self.pos)
    }

    /// Byte one position ahead.
    #[inline]
    pub(crate) fn peek(&self) -> u8 {
        self.byte_at(self.pos + 1)
    }

    /// Byte two positions ahead.
    #[inline]
    pub(crate) fn peek2(&self) -> u8 {
        self.byte_at(self.pos + 2)
    }

    #[inline]
    fn byte_at(&self, pos: u32) -> u8 {
        self.source.as_bytes().get(pos as usize).copied().unwrap_or(0)
    }

    #[inline]
    pub(crate) fn advance(&mut self) {
        self.advance_n(1);
    }

    /// Advance by `n` bytes, clamped to the end of the source.
    #[inline]
    pub(crate) fn advance_n(&mut self, n: u32) {
        self.pos = self.pos.saturating_add(n).min(self.len);
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.pos >= self.len
    }

    #[inline]
    pub(crate) fn pos(&self) -> u32 {
        self.pos
    }

    /// Jump back to a position recorded earlier.
    #[inline]
    pub(crate) fn reset(&mut self, pos: u32) {
        debug_assert!(pos <= self.len);
        self.pos = pos;
    }

    /// Source text between two recorded positions.
    ///
    /// Positions always come from the scanner's own boundary tracking, which
    /// only stops on ASCII bytes or after whole characters.
    pub(crate) fn slice(&self, start: u32, end: u32) -> &'a str {
        &self.source[start as usize..end as usize]
    }

    /// Source text from `start` to the current position.
    pub(crate) fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos)
    }

    /// Whether the remaining input starts with `s`.
    #[inline]
    pub(crate) fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    /// ASCII case-insensitive `starts_with`.
    pub(crate) fn starts_with_ignore_case(&self, s: &str) -> bool {
        self.rest()
            .as_bytes()
            .get(..s.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(s.as_bytes()))
    }

    #[inline]
    fn rest(&self) -> &'a str {
        &self.source[self.pos as usize..]
    }

    /// Consume `s` if the remaining input starts with it.
    pub(crate) fn eat_str(&mut self, s: &str) -> bool {
        if self.starts_with(s) {
            self.advance_n(s.len() as u32);
            true
        } else {
            false
        }
    }

    /// Advance while `pred` holds for the current byte.
    ///
    /// `pred(0)` must return `false`, which all byte-class predicates do.
    #[inline]
    pub(crate) fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.pos += 1;
        }
    }

    /// Advance past spaces, tabs, and line breaks.
    #[inline]
    pub(crate) fn eat_whitespace(&mut self) {
        self.eat_while(|b| b.is_ascii_whitespace());
    }

    /// Advance past one full UTF-8 character.
    pub(crate) fn advance_char(&mut self) {
        let width = match self.current() {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        self.advance_n(width);
    }

    /// Advance just past the next occurrence of `needle`, or to EOF.
    /// Returns whether the needle was found.
    pub(crate) fn skip_past_str(&mut self, needle: &str) -> bool {
        match memchr::memmem::find(self.rest().as_bytes(), needle.as_bytes()) {
            Some(offset) => {
                self.pos += (offset + needle.len()) as u32;
                true
            }
            None => {
                self.pos = self.len;
                false
            }
        }
    }

    /// Advance to the first of `a`, `b`, or `c`, returning it, or `0` at EOF.
    pub(crate) fn skip_to3(&mut self, a: u8, b: u8, c: u8) -> u8 {
        match memchr::memchr3(a, b, c, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.len;
                0
            }
        }
    }

    /// Advance to the first of `a` or `b`, returning it, or `0` at EOF.
    pub(crate) fn skip_to2(&mut self, a: u8, b: u8) -> u8 {
        match memchr::memchr2(a, b, self.rest().as_bytes()) {
            Some(offset) => {
                self.pos += offset as u32;
                self.current()
            }
            None => {
                self.pos = self.len;
                0
            }
        }
    }

    /// Advance to the next line break (left at it) or EOF.
    pub(crate) fn eat_until_newline_or_eof(&mut self) {
        let rest = self.rest().as_bytes();
        match memchr::memchr2(b'\n', b'\r', rest) {
            Some(offset) => self.pos += offset as u32,
            None => self.pos = self.len,
        }
    }
}
