//! Expressions inside `{...}` attribute values.
//!
//! Only the subset that can carry a class string gets structure: string
//! and template literals, identifiers, member access, calls, `&&`/`||`/`??`,
//! conditionals, arrays, spreads, and parentheses. Everything else is
//! skipped as code and recorded as `Opaque`.
//!
//! Each parse function returns `Ok(None)` when the input is valid code but
//! outside that subset. The nearest enclosing region with a known end (the
//! `{...}` container, one call argument, one array element, one template
//! hole) then rescans itself as code.

use super::{is_ident_continue, is_ident_start};
use crate::escape::cook;
use crate::stack::ensure_sufficient_stack;
use crate::{ParseError, ParseErrorKind, Parser};
use twp_ir::{ExprId, ExprKind, LogicalOp, Quote, Span, TemplateLit};

type ExprResult = Result<Option<ExprId>, ParseError>;

impl Parser<'_> {
    /// Parse `{expr}` starting at `{`, returning the span of the braces.
    pub(crate) fn parse_container(&mut self) -> Result<(Span, ExprId), ParseError> {
        let open = self.cursor.pos();
        self.cursor.advance();
        let expr = self.parse_expr_until(b"}")?;
        if self.cursor.current() != b'}' {
            return Err(self.error(open, ParseErrorKind::UnterminatedExpression));
        }
        self.cursor.advance();
        Ok((self.span_from(open), expr))
    }

    /// Parse one expression that must be followed by a byte in `stops`.
    ///
    /// Falls back to skipping code up to the stop byte and recording the
    /// region as `Opaque`. Elements and expressions from the abandoned
    /// attempt are discarded; the rescan records the elements again. The
    /// cursor is left on the stop byte, or at EOF.
    fn parse_expr_until(&mut self, stops: &[u8]) -> Result<ExprId, ParseError> {
        self.skip_trivia()?;
        let start = self.cursor.pos();
        let elements = self.unit.elements.len();
        let exprs = self.unit.arena.len();

        if let Some(expr) = self.parse_expr()? {
            self.skip_trivia()?;
            if !self.cursor.is_eof() && stops.contains(&self.cursor.current()) {
                return Ok(expr);
            }
        }

        tracing::trace!(start, "expression outside the modelled subset, skipping");
        self.cursor.reset(start);
        self.unit.elements.truncate(elements);
        self.unit.arena.truncate(exprs);
        self.scan_code(stops)?;
        Ok(self.alloc(ExprKind::Opaque, self.span_from(start)))
    }

    fn parse_expr(&mut self) -> ExprResult {
        ensure_sufficient_stack(|| self.parse_conditional())
    }

    /// `test ? consequent : alternate`
    fn parse_conditional(&mut self) -> ExprResult {
        let Some(test) = self.parse_logical_or()? else {
            return Ok(None);
        };
        self.skip_trivia()?;
        if !self.at_conditional_question() {
            return Ok(Some(test));
        }
        self.cursor.advance();
        self.skip_trivia()?;
        let Some(consequent) = self.parse_expr()? else {
            return Ok(None);
        };
        self.skip_trivia()?;
        if self.cursor.current() != b':' {
            return Ok(None);
        }
        self.cursor.advance();
        self.skip_trivia()?;
        let Some(alternate) = self.parse_expr()? else {
            return Ok(None);
        };
        let span = self.expr_span(test).merge(self.expr_span(alternate));
        Ok(Some(self.alloc(
            ExprKind::Conditional {
                test,
                consequent,
                alternate,
            },
            span,
        )))
    }

    /// `?` that is neither `??` nor optional chaining (`?.x`, but `?.5` is
    /// a conditional).
    fn at_conditional_question(&self) -> bool {
        self.cursor.current() == b'?'
            && self.cursor.peek() != b'?'
            && !(self.cursor.peek() == b'.' && !self.cursor.peek2().is_ascii_digit())
    }

    /// `a || b`, `a ?? b`
    fn parse_logical_or(&mut self) -> ExprResult {
        let Some(mut left) = self.parse_logical_and()? else {
            return Ok(None);
        };
        loop {
            self.skip_trivia()?;
            let op = match (self.cursor.current(), self.cursor.peek()) {
                (b'|', b'|') => LogicalOp::Or,
                (b'?', b'?') => LogicalOp::Nullish,
                _ => break,
            };
            // `||=` and `??=`
            if self.cursor.peek2() == b'=' {
                break;
            }
            self.cursor.advance_n(2);
            self.skip_trivia()?;
            let Some(right) = self.parse_logical_and()? else {
                return Ok(None);
            };
            left = self.alloc_logical(op, left, right);
        }
        Ok(Some(left))
    }

    /// `a && b`
    fn parse_logical_and(&mut self) -> ExprResult {
        let Some(mut left) = self.parse_unary()? else {
            return Ok(None);
        };
        loop {
            self.skip_trivia()?;
            if !(self.cursor.starts_with("&&") && self.cursor.peek2() != b'=') {
                break;
            }
            self.cursor.advance_n(2);
            self.skip_trivia()?;
            let Some(right) = self.parse_unary()? else {
                return Ok(None);
            };
            left = self.alloc_logical(LogicalOp::And, left, right);
        }
        Ok(Some(left))
    }

    fn alloc_logical(&mut self, op: LogicalOp, left: ExprId, right: ExprId) -> ExprId {
        let span = self.expr_span(left).merge(self.expr_span(right));
        self.alloc(ExprKind::Logical { op, left, right }, span)
    }

    /// Spread and prefix operators.
    fn parse_unary(&mut self) -> ExprResult {
        self.skip_trivia()?;
        let start = self.cursor.pos();
        let spread = self.cursor.eat_str("...");
        if !spread
            && !self.eat_prefix_operator()
            && !self.eat_keyword("typeof")
            && !self.eat_keyword("void")
            && !self.eat_keyword("await")
        {
            return self.parse_postfix();
        }

        self.skip_trivia()?;
        let Some(operand) = ensure_sufficient_stack(|| self.parse_unary())? else {
            return Ok(None);
        };
        let span = Span::new(start, self.expr_span(operand).end);
        let kind = if spread {
            ExprKind::Spread(operand)
        } else {
            ExprKind::Opaque
        };
        Ok(Some(self.alloc(kind, span)))
    }

    fn eat_prefix_operator(&mut self) -> bool {
        let op = self.cursor.current();
        // `!=`, `-=` and friends are binary.
        if matches!(op, b'!' | b'-' | b'+' | b'~') && self.cursor.peek() != b'=' {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Consume `word` if it appears here as a whole identifier.
    fn eat_keyword(&mut self, word: &str) -> bool {
        if !self.cursor.starts_with(word) {
            return false;
        }
        let start = self.cursor.pos();
        self.eat_ident();
        if self.cursor.slice_from(start) == word {
            true
        } else {
            self.cursor.reset(start);
            false
        }
    }

    /// Member access, calls, indexing, and TypeScript's non-null `!`.
    fn parse_postfix(&mut self) -> ExprResult {
        let Some(mut expr) = self.parse_primary()? else {
            return Ok(None);
        };
        loop {
            self.skip_trivia()?;
            let start = self.expr_span(expr).start;
            expr = match (self.cursor.current(), self.cursor.peek()) {
                (b'.', b'.') => break,
                (b'.', _) => {
                    self.cursor.advance();
                    self.skip_trivia()?;
                    let Some(property) = self.parse_property_name() else {
                        return Ok(None);
                    };
                    self.alloc(
                        ExprKind::Member {
                            object: expr,
                            property,
                        },
                        self.span_from(start),
                    )
                }
                (b'?', b'.') if !self.cursor.peek2().is_ascii_digit() => {
                    self.cursor.advance_n(2);
                    self.skip_trivia()?;
                    let next = match self.cursor.current() {
                        b'(' => self.parse_call(expr)?,
                        b'[' => self.parse_index(start)?,
                        _ => {
                            let property = self.parse_property_name();
                            let span = self.span_from(start);
                            property.map(|property| {
                                self.alloc(
                                    ExprKind::Member {
                                        object: expr,
                                        property,
                                    },
                                    span,
                                )
                            })
                        }
                    };
                    let Some(next) = next else {
                        return Ok(None);
                    };
                    next
                }
                (b'(', _) => {
                    let Some(call) = self.parse_call(expr)? else {
                        return Ok(None);
                    };
                    call
                }
                (b'[', _) => {
                    let Some(index) = self.parse_index(start)? else {
                        return Ok(None);
                    };
                    index
                }
                (b'!', next) if next != b'=' => {
                    self.cursor.advance();
                    self.alloc(ExprKind::Opaque, self.span_from(start))
                }
                _ => break,
            };
        }
        Ok(Some(expr))
    }

    fn parse_property_name(&mut self) -> Option<String> {
        let start = self.cursor.pos();
        if self.cursor.current() == b'#' {
            self.cursor.advance();
        }
        if !is_ident_start(self.cursor.current()) {
            return None;
        }
        self.eat_ident();
        Some(self.cursor.slice_from(start).to_owned())
    }

    /// `callee(args...)` starting at `(`.
    fn parse_call(&mut self, callee: ExprId) -> ExprResult {
        let start = self.expr_span(callee).start;
        self.cursor.advance();
        let mut args = Vec::new();
        loop {
            self.skip_trivia()?;
            if self.cursor.current() == b')' {
                self.cursor.advance();
                break;
            }
            args.push(self.parse_expr_until(b",)")?);
            match self.cursor.current() {
                b',' => self.cursor.advance(),
                b')' => {}
                _ => return Ok(None),
            }
        }
        Ok(Some(self.alloc(
            ExprKind::Call { callee, args },
            self.span_from(start),
        )))
    }

    /// `object[index]` starting at `[`. Never class-bearing.
    fn parse_index(&mut self, start: u32) -> ExprResult {
        self.cursor.advance();
        self.parse_expr_until(b"]")?;
        if self.cursor.current() != b']' {
            return Ok(None);
        }
        self.cursor.advance();
        Ok(Some(self.alloc(ExprKind::Opaque, self.span_from(start))))
    }

    fn parse_primary(&mut self) -> ExprResult {
        let start = self.cursor.pos();
        let b = self.cursor.current();
        match b {
            b'"' | b'\'' => {
                let span = self.skip_string()?;
                let raw = self.cursor.slice(span.start + 1, span.end - 1);
                let quote = if b == b'"' {
                    Quote::Double
                } else {
                    Quote::Single
                };
                let value = cook(raw).into_owned();
                Ok(Some(self.alloc(ExprKind::Str { quote, value }, span)))
            }
            b'`' => self.parse_template(),
            b'(' => self.parse_paren(),
            b'[' => self.parse_array(),
            b'{' => {
                self.skip_braced()?;
                Ok(Some(self.alloc(ExprKind::Opaque, self.span_from(start))))
            }
            b'<' if self.kind.allows_jsx() => {
                if !self.try_jsx_element()? {
                    return Ok(None);
                }
                Ok(Some(self.alloc(ExprKind::Opaque, self.span_from(start))))
            }
            _ if b.is_ascii_digit() => {
                self.cursor
                    .eat_while(|b| is_ident_continue(b) || b == b'.');
                Ok(Some(self.alloc(ExprKind::Opaque, self.span_from(start))))
            }
            _ if is_ident_start(b) => {
                self.eat_ident();
                let name = self.cursor.slice_from(start);
                // Function and class expressions, `new` calls.
                if matches!(name, "function" | "class" | "async" | "new") {
                    return Ok(None);
                }
                Ok(Some(self.alloc(
                    ExprKind::Ident(name.to_owned()),
                    self.span_from(start),
                )))
            }
            _ => Ok(None),
        }
    }

    /// `(expr)`. An empty or comma-separated list is an arrow function's
    /// parameters and falls back.
    fn parse_paren(&mut self) -> ExprResult {
        let start = self.cursor.pos();
        self.cursor.advance();
        self.skip_trivia()?;
        let Some(inner) = self.parse_expr()? else {
            return Ok(None);
        };
        self.skip_trivia()?;
        if self.cursor.current() != b')' {
            return Ok(None);
        }
        self.cursor.advance();
        Ok(Some(self.alloc(ExprKind::Paren(inner), self.span_from(start))))
    }

    /// `[a, , b]`. Holes are dropped.
    fn parse_array(&mut self) -> ExprResult {
        let start = self.cursor.pos();
        self.cursor.advance();
        let mut elements = Vec::new();
        loop {
            self.skip_trivia()?;
            match self.cursor.current() {
                b']' => {
                    self.cursor.advance();
                    break;
                }
                b',' => {
                    self.cursor.advance();
                    continue;
                }
                _ => {}
            }
            elements.push(self.parse_expr_until(b",]")?);
            match self.cursor.current() {
                b',' => self.cursor.advance(),
                b']' => {}
                _ => return Ok(None),
            }
        }
        Ok(Some(self.alloc(
            ExprKind::Array(elements),
            self.span_from(start),
        )))
    }

    /// `` `a${x}b` `` with cooked quasis.
    fn parse_template(&mut self) -> ExprResult {
        let start = self.cursor.pos();
        self.cursor.advance();
        let mut quasis = Vec::new();
        let mut exprs = Vec::new();
        let mut segment = self.cursor.pos();
        loop {
            match self.cursor.skip_to3(b'`', b'\\', b'$') {
                b'`' => {
                    quasis.push(cook(self.cursor.slice_from(segment)).into_owned());
                    self.cursor.advance();
                    break;
                }
                b'\\' => {
                    self.cursor.advance();
                    self.cursor.advance_char();
                }
                b'$' if self.cursor.peek() == b'{' => {
                    quasis.push(cook(self.cursor.slice_from(segment)).into_owned());
                    self.cursor.advance_n(2);
                    exprs.push(self.parse_expr_until(b"}")?);
                    if self.cursor.current() != b'}' {
                        return Err(self.error(start, ParseErrorKind::UnterminatedTemplate));
                    }
                    self.cursor.advance();
                    segment = self.cursor.pos();
                }
                b'$' => self.cursor.advance(),
                _ => return Err(self.error(start, ParseErrorKind::UnterminatedTemplate)),
            }
        }
        Ok(Some(self.alloc(
            ExprKind::Template(TemplateLit { quasis, exprs }),
            self.span_from(start),
        )))
    }

    fn expr_span(&self, id: ExprId) -> Span {
        self.unit.arena.get(id).span
    }
}

#[cfg(test)]
mod tests;
