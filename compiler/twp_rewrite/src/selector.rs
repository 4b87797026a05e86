//! Node selection.
//!
//! Walks a parsed unit once and produces one [`Replacement`] per eligible
//! node whose class text changes. Eligible nodes live inside the value of a
//! target attribute:
//!
//! - the attribute's string value;
//! - a `{...}` container holding a string or a template without holes;
//! - inside the container, the arguments of a class helper call
//!   (`clsx("p-4", ok && "m-2")`), wherever the call appears.
//!
//! Nothing outside a target attribute is read.

use std::borrow::Cow;
use std::fmt;

use twp_ir::visitor::walk_expr;
use twp_ir::{
    AttrValue, Attribute, Expr, ExprArena, ExprKind, LogicalOp, Quote, SourceUnit, Span, Visitor,
};

use crate::config::{TransformConfig, HELPER_NAMES};
use crate::literal::{attribute_string, attribute_value, js_string};

/// The shape of node a replacement rewrites.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TargetKind {
    /// `class="..."`, `className={"..."}`
    AttributeLiteral,
    /// ``className={`...`}``, replaced container and all.
    StaticTemplateLiteral,
    /// `clsx("...")`
    CallArgumentLiteral,
    /// ``clsx(`...`)``
    CallArgumentTemplate,
    /// `clsx(cond && "...")`
    CallArgumentLogicalRight,
}

impl TargetKind {
    pub fn name(self) -> &'static str {
        match self {
            TargetKind::AttributeLiteral => "attribute-literal",
            TargetKind::StaticTemplateLiteral => "static-template-literal",
            TargetKind::CallArgumentLiteral => "call-argument-literal",
            TargetKind::CallArgumentTemplate => "call-argument-template",
            TargetKind::CallArgumentLogicalRight => "call-argument-logical-right",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Replace the source bytes in `span` with `text`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Replacement {
    pub kind: TargetKind,
    pub span: Span,
    pub text: String,
}

/// Every replacement for `unit`, in source order.
pub fn select(unit: &SourceUnit, config: &TransformConfig) -> Vec<Replacement> {
    let mut selector = Selector {
        config,
        replacements: Vec::new(),
    };
    selector.visit_unit(unit);
    selector.replacements
}

struct Selector<'a> {
    config: &'a TransformConfig,
    replacements: Vec<Replacement>,
}

impl Selector<'_> {
    fn push(&mut self, kind: TargetKind, span: Span, text: String) {
        tracing::trace!(%kind, %span, %text, "replacement");
        self.replacements.push(Replacement { kind, span, text });
    }

    /// The rewritten class text of a string or hole-free template, if it
    /// changed.
    fn rewrite_static(&self, expr: &Expr) -> Option<Rewritten> {
        match &expr.kind {
            ExprKind::Str { quote, value } => match self.config.rewrite(value) {
                Cow::Owned(value) => Some(Rewritten::Str(value, *quote)),
                Cow::Borrowed(_) => None,
            },
            ExprKind::Template(template) => {
                let text = template.static_text()?;
                match self.config.rewrite(&text) {
                    Cow::Owned(value) => Some(Rewritten::Template(value)),
                    Cow::Borrowed(_) => None,
                }
            }
            _ => None,
        }
    }

    fn rewrite_argument(&mut self, arg: &Expr, arena: &ExprArena) {
        let arg = peel_parens(arg, arena);
        if let ExprKind::Logical {
            op: LogicalOp::And,
            right,
            ..
        } = arg.kind
        {
            let right = peel_parens(arena.get(right), arena);
            if let Some(rewritten) = self.rewrite_static(right) {
                self.push(
                    TargetKind::CallArgumentLogicalRight,
                    right.span,
                    rewritten.into_js(),
                );
            }
            return;
        }
        match self.rewrite_static(arg) {
            Some(rewritten @ Rewritten::Str(..)) => {
                self.push(TargetKind::CallArgumentLiteral, arg.span, rewritten.into_js());
            }
            Some(rewritten @ Rewritten::Template(_)) => {
                self.push(TargetKind::CallArgumentTemplate, arg.span, rewritten.into_js());
            }
            None => {}
        }
    }
}

/// New class text and the literal form it came from.
enum Rewritten {
    Str(String, Quote),
    Template(String),
}

impl Rewritten {
    /// As a JS string literal. Templates become double-quoted strings.
    fn into_js(self) -> String {
        match self {
            Rewritten::Str(value, quote) => js_string(&value, quote.as_char().unwrap_or('"')),
            Rewritten::Template(value) => js_string(&value, '"'),
        }
    }
}

impl<'ast> Visitor<'ast> for Selector<'_> {
    fn visit_attribute(&mut self, attribute: &'ast Attribute, arena: &'ast ExprArena) {
        if !self.config.is_target_attribute(&attribute.name) {
            return;
        }
        match &attribute.value {
            None => {}
            Some(AttrValue::Literal(lit)) => {
                if let Cow::Owned(value) = self.config.rewrite(&lit.value) {
                    self.push(
                        TargetKind::AttributeLiteral,
                        lit.span,
                        attribute_string(&value, lit.quote),
                    );
                }
            }
            Some(AttrValue::Expression { span, expr }) => {
                let expr = arena.get(*expr);
                let inner = peel_parens(expr, arena);
                match self.rewrite_static(inner) {
                    Some(rewritten @ Rewritten::Str(..)) => {
                        self.push(TargetKind::AttributeLiteral, inner.span, rewritten.into_js());
                    }
                    Some(Rewritten::Template(value)) => {
                        self.push(
                            TargetKind::StaticTemplateLiteral,
                            *span,
                            attribute_value(&value),
                        );
                    }
                    None => self.visit_expr(expr, arena),
                }
            }
        }
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        if let ExprKind::Call { callee, args } = &expr.kind {
            if is_helper(arena.get(*callee)) {
                for &arg in args {
                    self.rewrite_argument(arena.get(arg), arena);
                }
            }
        }
        walk_expr(self, expr, arena);
    }
}

/// The expression inside any number of parentheses. Replacements use the
/// inner span so the parentheses stay in the output.
fn peel_parens<'ast>(mut expr: &'ast Expr, arena: &'ast ExprArena) -> &'ast Expr {
    while let ExprKind::Paren(inner) = expr.kind {
        expr = arena.get(inner);
    }
    expr
}

fn is_helper(callee: &Expr) -> bool {
    matches!(&callee.kind, ExprKind::Ident(name) if HELPER_NAMES.contains(&name.as_str()))
}

#[cfg(test)]
mod tests;
