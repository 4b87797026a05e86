//! Opening-tag attributes, shared by markup and JSX.

use crate::{ParseError, ParseErrorKind, Parser};
use twp_ir::{AttrValue, Attribute, Element, Quote, Span, StringLit};

impl Parser<'_> {
    /// Scan the attributes of an opening tag whose name has just been read,
    /// up to and including `>` or `/>`, and record the element.
    ///
    /// Returns whether the tag is self-closing.
    pub(crate) fn parse_tag(&mut self, start: u32, name: &str) -> Result<bool, ParseError> {
        let mut attributes = Vec::new();
        let self_closing = loop {
            self.cursor.eat_whitespace();
            match self.cursor.current() {
                b'>' => {
                    self.cursor.advance();
                    break false;
                }
                b'/' if self.cursor.peek() == b'>' => {
                    self.cursor.advance_n(2);
                    break true;
                }
                // `{...props}`, and Svelte's `{name}` shorthand.
                b'{' if self.kind.has_expression_containers() => self.skip_braced()?,
                _ if self.cursor.is_eof() => {
                    return Err(self.error(
                        start,
                        ParseErrorKind::UnterminatedTag {
                            name: name.to_owned(),
                        },
                    ));
                }
                b'/' if !self.kind.is_markup() && matches!(self.cursor.peek(), b'*' | b'/') => {
                    self.skip_comment()?;
                }
                _ => {
                    if let Some(attribute) = self.parse_attribute()? {
                        attributes.push(attribute);
                    }
                }
            }
        };

        self.unit.elements.push(Element {
            name: name.to_owned(),
            span: self.span_from(start),
            attributes,
        });
        Ok(self_closing)
    }

    fn parse_attribute(&mut self) -> Result<Option<Attribute>, ParseError> {
        let name_start = self.cursor.pos();
        self.cursor.eat_while(is_attr_name_byte);
        if self.cursor.pos() == name_start {
            // Stray byte such as a lone `/` or quote.
            self.cursor.advance_char();
            return Ok(None);
        }
        let name = self.cursor.slice_from(name_start).to_owned();
        let name_span = self.span_from(name_start);

        let after_name = self.cursor.pos();
        self.cursor.eat_whitespace();
        if self.cursor.current() != b'=' {
            self.cursor.reset(after_name);
            return Ok(Some(Attribute {
                name,
                name_span,
                value: None,
                span: name_span,
            }));
        }
        self.cursor.advance();
        self.cursor.eat_whitespace();

        let value = self.parse_attribute_value(&name)?;
        Ok(Some(Attribute {
            name,
            name_span,
            value,
            span: self.span_from(name_start),
        }))
    }

    fn parse_attribute_value(&mut self, name: &str) -> Result<Option<AttrValue>, ParseError> {
        let start = self.cursor.pos();
        match self.cursor.current() {
            quote @ (b'"' | b'\'') => {
                self.cursor.advance();
                let (needle, quote) = if quote == b'"' {
                    ("\"", Quote::Double)
                } else {
                    ("'", Quote::Single)
                };
                if !self.cursor.skip_past_str(needle) {
                    return Err(self.error(
                        start,
                        ParseErrorKind::UnterminatedAttributeValue {
                            name: name.to_owned(),
                        },
                    ));
                }
                let value = self.cursor.slice(start + 1, self.cursor.pos() - 1);
                Ok(Some(AttrValue::Literal(StringLit {
                    span: self.span_from(start),
                    quote,
                    value: value.to_owned(),
                })))
            }
            b'{' if self.kind.has_expression_containers() => {
                let (span, expr) = self.parse_container()?;
                Ok(Some(AttrValue::Expression { span, expr }))
            }
            // `icon=<Icon />`: the element is recorded, the attribute has
            // no class-bearing value.
            b'<' if self.kind.allows_jsx() => {
                if self.try_jsx_element()? {
                    Ok(None)
                } else {
                    Err(expected_value(start, name))
                }
            }
            _ if self.kind.is_markup() => self.parse_unquoted_value(start, name),
            _ => Err(expected_value(start, name)),
        }
    }

    /// `name=value` in markup: runs to whitespace, `>`, or `/>`.
    fn parse_unquoted_value(
        &mut self,
        start: u32,
        name: &str,
    ) -> Result<Option<AttrValue>, ParseError> {
        loop {
            let b = self.cursor.current();
            if self.cursor.is_eof()
                || b.is_ascii_whitespace()
                || b == b'>'
                || (b == b'/' && self.cursor.peek() == b'>')
            {
                break;
            }
            self.cursor.advance_char();
        }
        if self.cursor.pos() == start {
            return Err(expected_value(start, name));
        }
        Ok(Some(AttrValue::Literal(StringLit {
            span: self.span_from(start),
            quote: Quote::None,
            value: self.cursor.slice_from(start).to_owned(),
        })))
    }
}

fn expected_value(at: u32, name: &str) -> ParseError {
    ParseError::new(
        Span::new(at, at),
        ParseErrorKind::ExpectedAttributeValue {
            name: name.to_owned(),
        },
    )
}

fn is_attr_name_byte(b: u8) -> bool {
    !b.is_ascii_whitespace()
        && !matches!(
            b,
            0 | b'=' | b'>' | b'/' | b'"' | b'\'' | b'<' | b'{' | b'}'
        )
}
