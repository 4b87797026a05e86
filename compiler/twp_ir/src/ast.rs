//! Syntax tree for class-bearing source.
//!
//! The tree is deliberately shallow. It records every element's attributes
//! and, inside `{...}` attribute values, just enough expression structure for
//! the rewriter to find class strings:
//!
//! ```text
//! <div className={clsx("p-4", open && `flex`)} id="x">
//! └─ Element div
//!    ├─ Attribute className = Expression
//!    │  └─ Call clsx
//!    │     ├─ Str "p-4"
//!    │     └─ Logical &&
//!    │        ├─ Ident open
//!    │        └─ Template [flex]
//!    └─ Attribute id = Literal "x"
//! ```
//!
//! Anything the rewriter never inspects (object literals, arrow functions,
//! arithmetic, nested markup) is kept as [`ExprKind::Opaque`] with its span.
//! Nodes are immutable once built; rewrites are expressed elsewhere as
//! replacements keyed by span.

use std::fmt;

use crate::expr_id::{ExprArena, ExprId};
use crate::span::Span;

/// One parsed source file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SourceUnit {
    /// Every element opening tag, in source order. Nesting is not recorded.
    pub elements: Vec<Element>,
    /// Storage for every expression referenced from attributes.
    pub arena: ExprArena,
}

impl SourceUnit {
    pub fn new() -> Self {
        Self::default()
    }
}

/// An element opening tag: `<name attr... >` or `<name attr... />`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Element {
    pub name: String,
    /// From `<` to the closing `>` of the opening tag.
    pub span: Span,
    pub attributes: Vec<Attribute>,
}

/// A single attribute of an element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attribute {
    pub name: String,
    pub name_span: Span,
    /// `None` for bare boolean attributes (`<input disabled>`).
    pub value: Option<AttrValue>,
    /// From the first byte of the name to the last byte of the value.
    pub span: Span,
}

/// Right-hand side of `name=...`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AttrValue {
    /// `name="..."`, `name='...'`, or unquoted `name=value` in markup.
    ///
    /// Attribute strings have no escape sequences: `value` is the raw text
    /// between the quotes.
    Literal(StringLit),
    /// `name={expr}`. `span` covers the braces.
    Expression { span: Span, expr: ExprId },
}

impl AttrValue {
    /// The value's source text: quotes or braces included.
    pub fn span(&self) -> Span {
        match self {
            AttrValue::Literal(lit) => lit.span,
            AttrValue::Expression { span, .. } => *span,
        }
    }
}

/// Quote style of a string literal.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Quote {
    Double,
    Single,
    /// Unquoted markup attribute value.
    None,
}

impl Quote {
    /// The delimiter character, if any.
    pub const fn as_char(self) -> Option<char> {
        match self {
            Quote::Double => Some('"'),
            Quote::Single => Some('\''),
            Quote::None => None,
        }
    }
}

/// A string literal and its decoded value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StringLit {
    /// Including the quotes.
    pub span: Span,
    pub quote: Quote,
    pub value: String,
}

/// A template literal: `` `a${x}b` `` has quasis `["a", "b"]` and one
/// expression.
///
/// Invariant: `quasis.len() == exprs.len() + 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TemplateLit {
    /// Cooked text segments between interpolations.
    pub quasis: Vec<String>,
    pub exprs: Vec<ExprId>,
}

impl TemplateLit {
    /// A template with no `${...}` holes.
    pub fn is_static(&self) -> bool {
        self.exprs.is_empty()
    }

    /// The full text of a static template, `None` if it interpolates.
    pub fn static_text(&self) -> Option<String> {
        self.is_static().then(|| self.quasis.concat())
    }
}

/// Short-circuit operators.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum LogicalOp {
    /// `&&`
    And,
    /// `||`
    Or,
    /// `??`
    Nullish,
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LogicalOp::And => "&&",
            LogicalOp::Or => "||",
            LogicalOp::Nullish => "??",
        })
    }
}

/// Expression node.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExprKind {
    /// `"..."` or `'...'`, with escapes decoded.
    Str { quote: Quote, value: String },
    Template(TemplateLit),
    Ident(String),
    /// `object.property`, `object?.property`
    Member { object: ExprId, property: String },
    /// `callee(args...)`
    Call { callee: ExprId, args: Vec<ExprId> },
    Logical {
        op: LogicalOp,
        left: ExprId,
        right: ExprId,
    },
    /// `test ? consequent : alternate`
    Conditional {
        test: ExprId,
        consequent: ExprId,
        alternate: ExprId,
    },
    /// `[a, b]`
    Array(Vec<ExprId>),
    /// `...argument`
    Spread(ExprId),
    /// Parenthesized expression. Kept so a replacement never swallows the
    /// parentheses.
    Paren(ExprId),
    /// Anything else. The rewriter never looks inside.
    Opaque,
}

impl ExprKind {
    /// Short label for debug dumps.
    pub fn label(&self) -> &'static str {
        match self {
            ExprKind::Str { .. } => "Str",
            ExprKind::Template(_) => "Template",
            ExprKind::Ident(_) => "Ident",
            ExprKind::Member { .. } => "Member",
            ExprKind::Call { .. } => "Call",
            ExprKind::Logical { .. } => "Logical",
            ExprKind::Conditional { .. } => "Conditional",
            ExprKind::Array(_) => "Array",
            ExprKind::Spread(_) => "Spread",
            ExprKind::Paren(_) => "Paren",
            ExprKind::Opaque => "Opaque",
        }
    }
}
