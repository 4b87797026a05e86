//! twp IR - syntax tree types
//!
//! The data the rewriter consumes:
//! - Spans for source locations
//! - Elements and attributes of markup/JSX opening tags
//! - Expressions inside `{...}` attribute values, stored in an arena
//! - A visitor for traversal
//!
//! # Design Philosophy
//!
//! - **Flat expressions**: no `Box<Expr>`, children are `ExprId(u32)`
//! - **Immutable tree**: rewrites never touch nodes; they produce
//!   replacements keyed by span
//! - **Opaque by default**: only constructs that can carry a class string
//!   get structure, everything else is a span

mod ast;
mod expr_id;
mod span;
pub mod visitor;

pub use ast::{
    AttrValue, Attribute, Element, Expr, ExprKind, LogicalOp, Quote, SourceUnit, StringLit,
    TemplateLit,
};
pub use expr_id::{ExprArena, ExprId};
pub use span::Span;
pub use visitor::Visitor;
