//! Span-splicing printer.
//!
//! Output is the source with each replacement's span swapped for its text.
//! Bytes outside every replaced span are copied unchanged, so formatting,
//! comments, and unrelated code survive exactly.

use std::ops::Range;

use twp_ir::Span;

use crate::selector::{Replacement, TargetKind};

/// One applied replacement: where it was in the source and where its text
/// landed in the output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Edit {
    pub kind: TargetKind,
    pub original: Span,
    pub output: Range<usize>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Printed {
    pub code: String,
    /// In source order.
    pub edits: Vec<Edit>,
}

/// Apply `replacements` to `source`.
///
/// Replacements may come in any order. One that overlaps an earlier one,
/// falls outside the source, or would write the text already there is
/// skipped.
pub fn print(source: &str, replacements: &[Replacement]) -> Printed {
    let mut order: Vec<&Replacement> = replacements.iter().collect();
    order.sort_by_key(|r| (r.span.start, r.span.end));

    let mut code = String::with_capacity(source.len() + replacements.len() * 8);
    let mut edits = Vec::with_capacity(replacements.len());
    let mut copied = 0usize;
    for replacement in order {
        let range = replacement.span.to_range();
        if range.start < copied {
            tracing::warn!(
                span = %replacement.span,
                kind = %replacement.kind,
                "overlapping replacement skipped"
            );
            continue;
        }
        let Some(original) = source.get(range.clone()) else {
            tracing::warn!(span = %replacement.span, "replacement outside the source skipped");
            continue;
        };
        if original == replacement.text {
            continue;
        }

        code.push_str(&source[copied..range.start]);
        let at = code.len();
        code.push_str(&replacement.text);
        edits.push(Edit {
            kind: replacement.kind,
            original: replacement.span,
            output: at..code.len(),
        });
        copied = range.end;
    }
    code.push_str(&source[copied..]);

    Printed { code, edits }
}
