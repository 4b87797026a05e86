//! Utility-root vocabulary.
//!
//! The fixed set of utility names and name prefixes the default classifier
//! recognizes. A root matches when it equals an entry, or when one of its
//! hyphen-delimited prefixes does: `bg-red-500` matches via `bg`,
//! `pointer-events-none` via `pointer-events`.
//!
//! The table is built once on first use and never mutated.

use rustc_hash::FxHashSet;
use std::sync::LazyLock;

/// Known utility roots, grouped by family.
pub const UTILITY_ROOTS: &[&str] = &[
    // Layout
    "container", "columns", "break", "box", "block", "inline", "flex", "grid", "table",
    "flow-root", "contents", "list-item", "hidden", "float", "clear", "isolate", "isolation",
    "object", "overflow", "overscroll", "static", "fixed", "absolute", "relative", "sticky",
    "inset", "top", "right", "bottom", "left", "start", "end", "visible", "invisible",
    "collapse", "z", "aspect",
    // Flexbox & grid
    "basis", "grow", "shrink", "order", "col", "row", "grid-cols", "grid-rows", "grid-flow",
    "auto-cols", "auto-rows", "gap", "justify", "content", "items", "self", "place",
    // Spacing
    "p", "px", "py", "ps", "pe", "pt", "pr", "pb", "pl", "m", "mx", "my", "ms", "me", "mt",
    "mr", "mb", "ml", "space",
    // Sizing
    "w", "min-w", "max-w", "h", "min-h", "max-h", "size",
    // Typography
    "font", "text", "antialiased", "subpixel-antialiased", "italic", "not-italic", "tracking",
    "leading", "line-clamp", "list", "underline", "overline", "line-through", "no-underline",
    "decoration", "uppercase", "lowercase", "capitalize", "normal-case", "truncate", "indent",
    "align", "whitespace", "hyphens", "normal-nums", "ordinal", "slashed-zero", "lining-nums",
    "oldstyle-nums", "proportional-nums", "tabular-nums", "diagonal-fractions",
    "stacked-fractions", "underline-offset", "text-wrap", "sr-only", "not-sr-only",
    // Backgrounds & gradients
    "bg", "from", "via", "to",
    // Borders
    "rounded", "border", "divide", "outline", "ring",
    // Effects & filters
    "shadow", "opacity", "mix-blend", "bg-blend", "blur", "brightness", "contrast",
    "drop-shadow", "grayscale", "hue-rotate", "invert", "saturate", "sepia", "backdrop",
    // Tables
    "border-collapse", "border-separate", "border-spacing", "caption",
    // Transitions & animation
    "transition", "duration", "ease", "delay", "animate",
    // Transforms
    "transform", "scale", "rotate", "translate", "skew", "origin",
    // Interactivity
    "accent", "appearance", "cursor", "caret", "pointer-events", "resize", "scroll", "snap",
    "touch", "select", "will-change",
    // SVG
    "fill", "stroke",
    // Variant markers that take the prefix too
    "group", "peer",
];

static VOCABULARY: LazyLock<FxHashSet<&'static str>> =
    LazyLock::new(|| UTILITY_ROOTS.iter().copied().collect());

/// Whether `root` names a known utility, either exactly or through one of
/// its hyphen-delimited prefixes.
pub fn is_vocabulary_root(root: &str) -> bool {
    let vocabulary = &*VOCABULARY;
    if vocabulary.contains(root) {
        return true;
    }
    root.match_indices('-')
        .any(|(pos, _)| pos > 0 && vocabulary.contains(&root[..pos]))
}
