//! The per-file transform: parse, select, print.

use thiserror::Error;
use twp_parse::{parse, ParseError, SourceKind};

use crate::config::TransformConfig;
use crate::printer::{print, Edit};
use crate::selector::select;

/// Result of transforming one source unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransformOutput {
    /// Nothing to rewrite. The caller keeps the source as is.
    Unchanged,
    Rewritten { code: String, edits: Vec<Edit> },
}

impl TransformOutput {
    pub fn is_changed(&self) -> bool {
        matches!(self, TransformOutput::Rewritten { .. })
    }

    /// The output text, borrowing `source` when unchanged.
    pub fn code<'a>(&'a self, source: &'a str) -> &'a str {
        match self {
            TransformOutput::Unchanged => source,
            TransformOutput::Rewritten { code, .. } => code,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TransformError {
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Rewrite the class names in one source unit.
///
/// Fails only if the source cannot be parsed; no partial output is
/// produced. A configuration that cannot change anything returns
/// [`TransformOutput::Unchanged`] without parsing.
#[tracing::instrument(level = "debug", skip_all, fields(kind = kind.name(), len = source.len()))]
pub fn transform(
    source: &str,
    kind: SourceKind,
    config: &TransformConfig,
) -> Result<TransformOutput, TransformError> {
    if config.is_noop() {
        tracing::debug!("no-op configuration");
        return Ok(TransformOutput::Unchanged);
    }

    let unit = parse(source, kind)?;
    let replacements = select(&unit, config);
    if replacements.is_empty() {
        tracing::debug!(elements = unit.elements.len(), "nothing to rewrite");
        return Ok(TransformOutput::Unchanged);
    }

    let printed = print(source, &replacements);
    tracing::debug!(
        elements = unit.elements.len(),
        edits = printed.edits.len(),
        "rewritten"
    );
    if printed.edits.is_empty() {
        return Ok(TransformOutput::Unchanged);
    }
    Ok(TransformOutput::Rewritten {
        code: printed.code,
        edits: printed.edits,
    })
}
