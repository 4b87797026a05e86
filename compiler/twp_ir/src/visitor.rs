//! Tree Visitor Pattern
//!
//! Generic traversal over a [`SourceUnit`]. The visitor can mutate its own
//! state during traversal; the tree stays immutable.
//!
//! Default implementations call the `walk_*` functions, which visit children
//! depth-first, left to right. Override a `visit_*` method to act on a node
//! and call the matching `walk_*` to keep descending, or skip it to prune.
//!
//! # Example
//!
//! ```text
//! struct CountStrings {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountStrings {
//!     fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
//!         if let ExprKind::Str { .. } = expr.kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr, arena);
//!     }
//! }
//! ```

use crate::ast::{AttrValue, Attribute, Element, Expr, ExprKind, SourceUnit};
use crate::expr_id::{ExprArena, ExprId};

/// Tree visitor trait.
pub trait Visitor<'ast> {
    /// Visit a whole source unit.
    fn visit_unit(&mut self, unit: &'ast SourceUnit) {
        walk_unit(self, unit);
    }

    /// Visit an element opening tag.
    fn visit_element(&mut self, element: &'ast Element, arena: &'ast ExprArena) {
        walk_element(self, element, arena);
    }

    /// Visit an attribute.
    fn visit_attribute(&mut self, attribute: &'ast Attribute, arena: &'ast ExprArena) {
        walk_attribute(self, attribute, arena);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        walk_expr(self, expr, arena);
    }

    /// Visit an expression by ID.
    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        self.visit_expr(arena.get(id), arena);
    }
}

/// Walk every element in source order.
pub fn walk_unit<'ast, V: Visitor<'ast> + ?Sized>(visitor: &mut V, unit: &'ast SourceUnit) {
    for element in &unit.elements {
        visitor.visit_element(element, &unit.arena);
    }
}

/// Walk an element's attributes in source order.
pub fn walk_element<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    element: &'ast Element,
    arena: &'ast ExprArena,
) {
    for attribute in &element.attributes {
        visitor.visit_attribute(attribute, arena);
    }
}

/// Walk into an attribute's `{...}` value. Literal values have no children.
pub fn walk_attribute<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    attribute: &'ast Attribute,
    arena: &'ast ExprArena,
) {
    if let Some(AttrValue::Expression { expr, .. }) = &attribute.value {
        visitor.visit_expr_id(*expr, arena);
    }
}

/// Walk an expression's children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    match &expr.kind {
        ExprKind::Str { .. } | ExprKind::Ident(_) | ExprKind::Opaque => {}

        ExprKind::Template(template) => {
            for &id in &template.exprs {
                visitor.visit_expr_id(id, arena);
            }
        }
        ExprKind::Member { object, .. } => visitor.visit_expr_id(*object, arena),
        ExprKind::Spread(inner) | ExprKind::Paren(inner) => visitor.visit_expr_id(*inner, arena),
        ExprKind::Call { callee, args } => {
            visitor.visit_expr_id(*callee, arena);
            for &arg in args {
                visitor.visit_expr_id(arg, arena);
            }
        }
        ExprKind::Logical { left, right, .. } => {
            visitor.visit_expr_id(*left, arena);
            visitor.visit_expr_id(*right, arena);
        }
        ExprKind::Conditional {
            test,
            consequent,
            alternate,
        } => {
            visitor.visit_expr_id(*test, arena);
            visitor.visit_expr_id(*consequent, arena);
            visitor.visit_expr_id(*alternate, arena);
        }
        ExprKind::Array(elements) => {
            for &element in elements {
                visitor.visit_expr_id(element, arena);
            }
        }
    }
}
