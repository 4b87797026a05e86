//! Parse error rendering with source snippets.

use std::io::IsTerminal;
use std::ops::Range;

use ariadne::{Color, Config, IndexType, Label, Report, ReportKind, Source};
use twp_parse::ParseError;

/// Whether stderr is a terminal (for color output).
pub(crate) fn use_colors() -> bool {
    std::io::stderr().is_terminal()
}

/// Render a parse error of the file at `path` as a report.
pub(crate) fn render_parse_error(
    path: &str,
    source: &str,
    error: &ParseError,
    color: bool,
) -> String {
    let range = label_range(source, error.span.to_range());
    let report = Report::build(ReportKind::Error, path, range.start)
        .with_config(
            Config::default()
                .with_color(color)
                .with_index_type(IndexType::Byte),
        )
        .with_message(&error.kind)
        .with_label(
            Label::new((path, range))
                .with_message(error.label())
                .with_color(Color::Red),
        )
        .with_note("the file was left unchanged")
        .finish();

    let mut out = Vec::new();
    if report.write((path, Source::from(source)), &mut out).is_err() {
        return format!("error: {path}: {error}\n");
    }
    String::from_utf8_lossy(&out).into_owned()
}

/// Clamp a span to the source and widen an empty one to the character
/// after it, so the label has something to point at.
fn label_range(source: &str, range: Range<usize>) -> Range<usize> {
    let start = range.start.min(source.len());
    let end = range.end.min(source.len());
    if end > start {
        return start..end;
    }
    let next = source
        .get(start..)
        .and_then(|rest| rest.chars().next())
        .map_or(0, char::len_utf8);
    start..start + next
}
