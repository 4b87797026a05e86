//! Parse errors.
//!
//! A parse error is fatal for its source unit: the transform of that unit
//! is aborted and no partial output is produced. Every error carries the
//! span where scanning gave up (WHERE) and a kind (WHAT).

use thiserror::Error;
use twp_ir::Span;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{kind}")]
pub struct ParseError {
    /// WHERE the error occurred. Usually starts at the construct that was
    /// left open and ends at EOF.
    pub span: Span,
    /// WHAT went wrong.
    pub kind: ParseErrorKind,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ParseErrorKind {
    #[error("source is {len} bytes; files larger than 4 GiB are not supported")]
    SourceTooLarge { len: usize },
    #[error("unterminated string literal")]
    UnterminatedString,
    #[error("unterminated template literal")]
    UnterminatedTemplate,
    #[error("unterminated comment")]
    UnterminatedComment,
    #[error("unterminated tag `<{name}`")]
    UnterminatedTag { name: String },
    #[error("unterminated value for attribute `{name}`")]
    UnterminatedAttributeValue { name: String },
    #[error("expected a value after `{name}=`")]
    ExpectedAttributeValue { name: String },
    #[error("unterminated `{{...}}` expression")]
    UnterminatedExpression,
    #[error("element `<{name}>` is never closed")]
    UnclosedElement { name: String },
}

impl ParseError {
    pub fn new(span: Span, kind: ParseErrorKind) -> Self {
        ParseError { span, kind }
    }

    /// Short label for the primary span in rendered diagnostics.
    pub fn label(&self) -> &'static str {
        match self.kind {
            ParseErrorKind::SourceTooLarge { .. } => "file starts here",
            ParseErrorKind::UnterminatedString
            | ParseErrorKind::UnterminatedTemplate
            | ParseErrorKind::UnterminatedComment
            | ParseErrorKind::UnterminatedAttributeValue { .. } => "opened here",
            ParseErrorKind::UnterminatedTag { .. } => "tag opened here",
            ParseErrorKind::ExpectedAttributeValue { .. } => "value expected here",
            ParseErrorKind::UnterminatedExpression => "expression opened here",
            ParseErrorKind::UnclosedElement { .. } => "element opened here",
        }
    }
}
