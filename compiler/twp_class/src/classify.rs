//! Token classification.
//!
//! The rewriter is parameterized over a [`Classifier`]: a single pure
//! predicate over a raw token. [`DefaultClassifier`] is the lexical
//! heuristic; [`FnClassifier`] wraps a caller-supplied closure that fully
//! replaces it.
//!
//! Implementations must be pure. The rewriter may call them any number of
//! times for the same token, and pipeline idempotence depends on getting
//! the same answer each time.

use std::fmt;

use crate::prefix::IMPORTANT_MARKER;
use crate::variants::split_variants;
use crate::vocabulary::is_vocabulary_root;

/// Decides whether a token is a rewritable utility class.
///
/// `Send + Sync` so one configuration can be shared by per-file transforms
/// running on a thread pool.
pub trait Classifier: Send + Sync {
    fn is_utility(&self, token: &str) -> bool;
}

/// Lexical heuristic over the utility vocabulary.
///
/// 1. Reject empty tokens and tokens with any uppercase letter
///    (`MyClass`, `styles.Button`, CSS-module references).
/// 2. Drop a leading `!`, split into variant segments, take the last one
///    as the root.
/// 3. Accept if the root is in the vocabulary, exactly or by a
///    hyphen-delimited prefix.
///
/// Uppercase rejection also skips legitimate arbitrary values such as
/// `text-[#FFF]`. That is the documented trade-off of the heuristic.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DefaultClassifier;

impl Classifier for DefaultClassifier {
    fn is_utility(&self, token: &str) -> bool {
        if token.is_empty() || token.chars().any(char::is_uppercase) {
            return false;
        }
        let body = token.strip_prefix(IMPORTANT_MARKER).unwrap_or(token);
        split_variants(body)
            .last()
            .is_some_and(|root| is_vocabulary_root(root))
    }
}

/// Caller-supplied override. Receives the raw token; its answer is final.
pub struct FnClassifier<F>(F);

impl<F> FnClassifier<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    pub fn new(predicate: F) -> Self {
        FnClassifier(predicate)
    }
}

impl<F> Classifier for FnClassifier<F>
where
    F: Fn(&str) -> bool + Send + Sync,
{
    #[inline]
    fn is_utility(&self, token: &str) -> bool {
        (self.0)(token)
    }
}

impl<F> fmt::Debug for FnClassifier<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnClassifier(..)")
    }
}
