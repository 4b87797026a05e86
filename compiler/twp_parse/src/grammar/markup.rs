//! HTML-like documents: `.html`, `.vue`, `.svelte`, `.astro`.
//!
//! Text is skipped up to the next `<` or `{`. Comments, doctypes,
//! processing instructions, and closing tags are skipped whole. Nesting is
//! not tracked: every opening tag is recorded where it appears.

use super::jsx::is_tag_name_byte;
use crate::{ParseError, ParseErrorKind, Parser, SourceKind};

/// Elements whose content is raw text, not markup.
const RAW_TEXT_ELEMENTS: &[&str] = &["script", "style"];

impl Parser<'_> {
    pub(crate) fn parse_document(&mut self) -> Result<(), ParseError> {
        if self.kind == SourceKind::Astro {
            self.skip_frontmatter();
        }
        loop {
            match self.cursor.skip_to2(b'<', b'{') {
                b'<' => self.markup_tag()?,
                b'{' => self.markup_braces()?,
                _ => return Ok(()),
            }
        }
    }

    /// Astro's leading `---` code fence.
    fn skip_frontmatter(&mut self) {
        let start = self.cursor.pos();
        self.cursor.eat_whitespace();
        if !self.cursor.eat_str("---") {
            self.cursor.reset(start);
            return;
        }
        if self.cursor.skip_past_str("\n---") {
            self.cursor.eat_until_newline_or_eof();
        }
    }

    fn markup_tag(&mut self) -> Result<(), ParseError> {
        let start = self.cursor.pos();
        if self.cursor.eat_str("<!--") {
            if !self.cursor.skip_past_str("-->") {
                return Err(self.error(start, ParseErrorKind::UnterminatedComment));
            }
            return Ok(());
        }

        match self.cursor.peek() {
            // `</close>`, `<!DOCTYPE ...>`, `<?xml ...?>`
            b'/' | b'!' | b'?' => {
                self.cursor.advance_n(2);
                self.cursor.skip_past_str(">");
            }
            b if b.is_ascii_alphabetic() => {
                self.cursor.advance();
                let name_start = self.cursor.pos();
                self.cursor.eat_while(is_tag_name_byte);
                let name = self.cursor.slice_from(name_start);
                let self_closing = self.parse_tag(start, name)?;
                if !self_closing {
                    if let Some(raw) = RAW_TEXT_ELEMENTS
                        .iter()
                        .find(|raw| raw.eq_ignore_ascii_case(name))
                    {
                        self.skip_raw_text(raw);
                    }
                }
            }
            // A literal `<` in text.
            _ => self.cursor.advance(),
        }
        Ok(())
    }

    /// Skip to the closing tag of a raw-text element, leaving the cursor
    /// on its `</`.
    fn skip_raw_text(&mut self, name: &str) {
        while self.cursor.skip_past_str("</") {
            if self.cursor.starts_with_ignore_case(name) {
                self.cursor.reset(self.cursor.pos() - 2);
                return;
            }
        }
    }

    /// `{...}` in text: template syntax whose meaning depends on the dialect.
    fn markup_braces(&mut self) -> Result<(), ParseError> {
        match self.kind {
            // `{expr}`, `{#if cond}`, `{items.map(i => <li />)}`
            SourceKind::Svelte | SourceKind::Astro => self.skip_braced(),
            // `{{ interpolation }}`
            SourceKind::Vue if self.cursor.peek() == b'{' => {
                self.cursor.advance_n(2);
                self.cursor.skip_past_str("}}");
                Ok(())
            }
            _ => {
                self.cursor.advance();
                Ok(())
            }
        }
    }
}
