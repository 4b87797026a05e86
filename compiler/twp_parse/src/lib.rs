//! Tolerant scanner for class-bearing source files.
//!
//! Produces the shallow [`SourceUnit`] tree: every element opening tag with
//! its attributes, plus expression structure inside `{...}` attribute values.
//! Text, scripts, and code outside tags are skipped, not parsed; the scanner
//! only needs to know where strings, comments, templates, regexes, and nested
//! tags begin and end so it never mistakes their contents for markup.
//!
//! Two scanning modes:
//! - **Markup** (`.html`, `.vue`, `.svelte`, `.astro`): a document of text
//!   and tags. `<script>`/`<style>` bodies are skipped as raw text.
//! - **Code** (`.js`, `.jsx`, `.mjs`, `.cjs`, `.tsx`, `.ts`): JavaScript
//!   with embedded JSX. `.ts` sources never contain JSX, so they are
//!   scanned without tag detection.
//!
//! Any structural error is fatal for the unit and reported as a
//! [`ParseError`].

mod cursor;
mod error;
mod escape;
mod grammar;
mod stack;

use std::path::Path;

use twp_ir::{Expr, ExprId, ExprKind, SourceUnit, Span};

use crate::cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// The dialect of a source file, chosen by extension.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SourceKind {
    Html,
    Vue,
    Svelte,
    Astro,
    /// JavaScript or TypeScript with JSX.
    Jsx,
    /// TypeScript without JSX.
    Script,
}

impl SourceKind {
    /// Every extension with a known kind.
    pub const EXTENSIONS: &'static [&'static str] = &[
        "html", "htm", "vue", "svelte", "astro", "js", "jsx", "mjs", "cjs", "tsx", "ts", "mts",
        "cts",
    ];

    pub fn from_extension(ext: &str) -> Option<Self> {
        let kind = match ext {
            "html" | "htm" => SourceKind::Html,
            "vue" => SourceKind::Vue,
            "svelte" => SourceKind::Svelte,
            "astro" => SourceKind::Astro,
            "js" | "jsx" | "mjs" | "cjs" | "tsx" => SourceKind::Jsx,
            "ts" | "mts" | "cts" => SourceKind::Script,
            _ => return None,
        };
        Some(kind)
    }

    pub fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
    }

    pub fn name(self) -> &'static str {
        match self {
            SourceKind::Html => "html",
            SourceKind::Vue => "vue",
            SourceKind::Svelte => "svelte",
            SourceKind::Astro => "astro",
            SourceKind::Jsx => "jsx",
            SourceKind::Script => "script",
        }
    }

    /// Whether the file is a markup document rather than code.
    pub fn is_markup(self) -> bool {
        matches!(
            self,
            SourceKind::Html | SourceKind::Vue | SourceKind::Svelte | SourceKind::Astro
        )
    }

    /// Whether `<` in expression position can open a tag.
    fn allows_jsx(self) -> bool {
        matches!(self, SourceKind::Jsx | SourceKind::Astro)
    }

    /// Whether `attr={expr}` and `{...}` in text are JavaScript.
    fn has_expression_containers(self) -> bool {
        matches!(
            self,
            SourceKind::Jsx | SourceKind::Svelte | SourceKind::Astro
        )
    }
}

/// Parse one source unit.
///
/// # Errors
/// Returns the first structural error: an unterminated string, template,
/// comment, tag, attribute value, or `{...}` expression, or an element that
/// is never closed.
#[tracing::instrument(level = "debug", skip(source), fields(len = source.len()))]
pub fn parse(source: &str, kind: SourceKind) -> Result<SourceUnit, ParseError> {
    if u32::try_from(source.len()).is_err() {
        return Err(ParseError::new(
            Span::DUMMY,
            ParseErrorKind::SourceTooLarge { len: source.len() },
        ));
    }

    let mut parser = Parser::new(source, kind);
    if kind.is_markup() {
        parser.parse_document()?;
    } else {
        parser.parse_script()?;
    }
    let unit = parser.finish();
    tracing::debug!(
        elements = unit.elements.len(),
        exprs = unit.arena.len(),
        "parsed source unit"
    );
    Ok(unit)
}

/// Parser state.
pub(crate) struct Parser<'a> {
    cursor: Cursor<'a>,
    kind: SourceKind,
    unit: SourceUnit,
}

impl<'a> Parser<'a> {
    fn new(source: &'a str, kind: SourceKind) -> Self {
        Parser {
            cursor: Cursor::new(source),
            kind,
            unit: SourceUnit::new(),
        }
    }

    fn finish(mut self) -> SourceUnit {
        // Elements nested in attribute expressions are recorded before the
        // element that owns the attribute.
        self.unit.elements.sort_by_key(|element| element.span.start);
        self.unit
    }

    #[inline]
    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.cursor.pos())
    }

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.unit.arena.alloc(Expr::new(kind, span))
    }

    fn error(&self, start: u32, kind: ParseErrorKind) -> ParseError {
        ParseError::new(self.span_from(start), kind)
    }
}

#[cfg(test)]
mod tests;
