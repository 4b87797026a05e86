//! twp rewrite - class prefixing over parsed sources
//!
//! The per-file pipeline:
//! - [`twp_parse::parse`] builds the tree for one source unit
//! - [`select`] walks it and produces replacements for eligible nodes
//! - [`print`] splices the replacements into the source
//!
//! [`transform`] runs all three. It is synchronous, does no I/O, and keeps
//! no state between calls, so hosts can run it on as many files in
//! parallel as they like with one shared [`TransformConfig`].
//!
//! # Example
//!
//! ```
//! use twp_parse::SourceKind;
//! use twp_rewrite::{transform, TransformConfig, TransformOutput};
//!
//! let config = TransformConfig::new("tw-");
//! let output = transform(r#"<p class="flex">"#, SourceKind::Html, &config).unwrap();
//! let TransformOutput::Rewritten { code, .. } = output else {
//!     unreachable!()
//! };
//! assert_eq!(code, r#"<p class="tw-flex">"#);
//! ```

mod config;
mod literal;
mod printer;
mod selector;
mod transform;

pub use config::{TransformConfig, DEFAULT_ATTRIBUTES, HELPER_NAMES};
pub use printer::{print, Edit, Printed};
pub use selector::{select, Replacement, TargetKind};
pub use transform::{transform, TransformError, TransformOutput};
