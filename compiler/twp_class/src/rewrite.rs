//! Class-string rewriting.

use std::borrow::Cow;

use crate::classify::Classifier;
use crate::prefix::prefix_token;

/// Rewrite a whitespace-separated class list.
///
/// Each token the classifier accepts is prefixed; every other token is kept
/// verbatim. Tokens are rejoined with single spaces, so irregular or leading
/// and trailing whitespace is normalized away.
///
/// An empty prefix disables rewriting entirely, including the whitespace
/// normalization. The input is returned borrowed whenever the rewritten
/// text would be identical to it.
pub fn rewrite_class_string<'a>(
    input: &'a str,
    prefix: &str,
    classifier: &dyn Classifier,
) -> Cow<'a, str> {
    if prefix.is_empty() {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + prefix.len() * 4);
    for token in input.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        if classifier.is_utility(token) {
            out.push_str(&prefix_token(token, prefix));
        } else {
            out.push_str(token);
        }
    }

    if out == input {
        Cow::Borrowed(input)
    } else {
        Cow::Owned(out)
    }
}
