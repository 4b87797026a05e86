//! twp class - token-level rewrite engine
//!
//! Everything needed to turn `hover:bg-red-500` into `hover:tw-bg-red-500`
//! without looking at a syntax tree:
//!
//! - [`split_variants`]: split a token into modifier segments and a root
//! - [`Classifier`]: decide whether a token is a utility class
//! - [`prefix_token`]: apply the prefix to the root, exactly once
//! - [`rewrite_class_string`]: apply the above to a whitespace-separated list
//!
//! # Pipeline
//!
//! ```text
//! "flex hover:bg-red-500 !p-4 Card"
//!     │ split on whitespace
//!     ▼
//! ["flex", "hover:bg-red-500", "!p-4", "Card"]
//!     │ Classifier::is_utility
//!     ▼
//! [yes, yes, yes, no]
//!     │ prefix_token
//!     ▼
//! "tw-flex hover:tw-bg-red-500 !tw-p-4 Card"
//! ```
//!
//! All functions are total: malformed tokens (unbalanced brackets, open
//! quotes) produce a best-effort result rather than an error, since class
//! strings are untrusted free text.

mod classify;
mod prefix;
mod rewrite;
mod variants;
mod vocabulary;

pub use classify::{Classifier, DefaultClassifier, FnClassifier};
pub use prefix::{prefix_token, IMPORTANT_MARKER};
pub use rewrite::rewrite_class_string;
pub use variants::{split_variants, Segments};
pub use vocabulary::{is_vocabulary_root, UTILITY_ROOTS};
