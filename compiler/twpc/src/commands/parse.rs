//! The `parse` command: dump the tree the rewriter sees for a file.

use std::fmt::Write as _;

use twp_ir::visitor::{walk_element, walk_expr};
use twp_ir::{AttrValue, Attribute, Element, Expr, ExprArena, ExprKind, SourceUnit, Visitor};
use twp_parse::{parse, SourceKind};
use twp_rewrite::{select, TransformConfig, DEFAULT_ATTRIBUTES};

use super::read_file;
use crate::diagnostics::{render_parse_error, use_colors};

/// Indented dump of elements, attributes, and attribute expressions.
///
/// Attributes the rewriter targets by default are marked with `*`.
struct TreeDump {
    out: String,
    depth: usize,
}

impl TreeDump {
    fn line(&mut self, text: &str) {
        let _ = writeln!(self.out, "{:indent$}{text}", "", indent = self.depth * 2);
    }
}

impl<'ast> Visitor<'ast> for TreeDump {
    fn visit_element(&mut self, element: &'ast Element, arena: &'ast ExprArena) {
        let name = if element.name.is_empty() {
            "<>"
        } else {
            &element.name
        };
        self.line(&format!("element {name} {}", element.span));
        self.depth += 1;
        walk_element(self, element, arena);
        self.depth -= 1;
    }

    fn visit_attribute(&mut self, attribute: &'ast Attribute, arena: &'ast ExprArena) {
        let mark = if DEFAULT_ATTRIBUTES.contains(&attribute.name.as_str()) {
            "*"
        } else {
            " "
        };
        let value = match &attribute.value {
            None => String::new(),
            Some(value @ AttrValue::Literal(lit)) => format!(" = {:?} {}", lit.value, value.span()),
            Some(value @ AttrValue::Expression { .. }) => format!(" = {{...}} {}", value.span()),
        };
        self.line(&format!("{mark}{}{value}", attribute.name));
        if let Some(AttrValue::Expression { expr, .. }) = &attribute.value {
            self.depth += 1;
            self.visit_expr_id(*expr, arena);
            self.depth -= 1;
        }
    }

    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        let detail = match &expr.kind {
            ExprKind::Str { value, .. } => format!(" {value:?}"),
            ExprKind::Template(template) => match template.static_text() {
                Some(text) => format!(" {text:?}"),
                None => format!(" ({} holes)", template.exprs.len()),
            },
            ExprKind::Ident(name) => format!(" {name}"),
            ExprKind::Member { property, .. } => format!(" .{property}"),
            ExprKind::Logical { op, .. } => format!(" {op}"),
            _ => String::new(),
        };
        self.line(&format!("{}{detail} {}", expr.kind.label(), expr.span));
        self.depth += 1;
        walk_expr(self, expr, arena);
        self.depth -= 1;
    }
}

fn dump_unit(unit: &SourceUnit) -> String {
    let mut dump = TreeDump {
        out: String::new(),
        depth: 0,
    };
    dump.visit_unit(unit);
    dump.out
}

/// Run the parse command on one file. Returns the process exit code.
pub fn dump_file(path: &str) -> i32 {
    let Some(kind) = SourceKind::from_path(std::path::Path::new(path)) else {
        eprintln!("unsupported file type: '{path}'");
        return 1;
    };
    let source = match read_file(path) {
        Ok(source) => source,
        Err(message) => {
            eprintln!("{message}");
            return 1;
        }
    };
    let unit = match parse(&source, kind) {
        Ok(unit) => unit,
        Err(error) => {
            eprint!("{}", render_parse_error(path, &source, &error, use_colors()));
            return 1;
        }
    };

    println!("{path} ({})", kind.name());
    print!("{}", dump_unit(&unit));

    // Preview with a placeholder prefix.
    let replacements = select(&unit, &TransformConfig::new("tw-"));
    if !replacements.is_empty() {
        println!();
        println!("eligible nodes (prefix tw-):");
        for replacement in replacements {
            println!(
                "  {} {} -> {}",
                replacement.kind, replacement.span, replacement.text
            );
        }
    }
    0
}
