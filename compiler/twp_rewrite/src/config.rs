//! Transform configuration.
//!
//! One [`TransformConfig`] is resolved at the start of a build cycle and
//! passed by shared reference into every per-file transform of that cycle.
//! It is never mutated while transforms run, so concurrent transforms need
//! no synchronization.

use std::borrow::Cow;
use std::fmt;
use std::sync::Arc;

use rustc_hash::FxHashSet;
use twp_class::{rewrite_class_string, Classifier, DefaultClassifier};

/// Attribute names rewritten when none are configured.
pub const DEFAULT_ATTRIBUTES: &[&str] = &["class", "className", "tw"];

/// Callee names recognized as class-list helpers.
///
/// Only bare identifiers match: `utils.cn(...)` and aliased imports are
/// not recognized.
pub const HELPER_NAMES: &[&str] = &[
    "clsx",
    "classnames",
    "classNames",
    "cn",
    "cx",
    "twMerge",
    "twJoin",
];

#[derive(Clone)]
pub struct TransformConfig {
    prefix: String,
    attributes: FxHashSet<String>,
    classifier: Arc<dyn Classifier>,
}

impl TransformConfig {
    /// Configuration with the given prefix, the default attribute names,
    /// and the default classifier. An empty prefix disables rewriting.
    pub fn new(prefix: impl Into<String>) -> Self {
        TransformConfig {
            prefix: prefix.into(),
            attributes: DEFAULT_ATTRIBUTES.iter().map(|&name| name.to_owned()).collect(),
            classifier: Arc::new(DefaultClassifier),
        }
    }

    /// Replace the target attribute names.
    #[must_use]
    pub fn with_attributes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.attributes = names.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the default heuristic with a caller-supplied classifier.
    #[must_use]
    pub fn with_classifier(mut self, classifier: impl Classifier + 'static) -> Self {
        self.classifier = Arc::new(classifier);
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Whether this configuration can never change a file.
    pub fn is_noop(&self) -> bool {
        self.prefix.is_empty() || self.attributes.is_empty()
    }

    pub fn is_target_attribute(&self, name: &str) -> bool {
        self.attributes.contains(name)
    }

    /// Target attribute names, sorted.
    pub fn attributes(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.attributes.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn classifier(&self) -> &dyn Classifier {
        &*self.classifier
    }

    /// Rewrite one class string with this configuration's prefix and
    /// classifier. Borrowed when nothing changed.
    pub fn rewrite<'a>(&self, classes: &'a str) -> Cow<'a, str> {
        rewrite_class_string(classes, &self.prefix, &*self.classifier)
    }
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig::new("")
    }
}

impl fmt::Debug for TransformConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransformConfig")
            .field("prefix", &self.prefix)
            .field("attributes", &self.attributes())
            .finish_non_exhaustive()
    }
}
