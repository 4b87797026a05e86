//! The `class` command: show how individual tokens are handled.

use std::fmt::Write as _;

use twp_class::{prefix_token, split_variants, Classifier, DefaultClassifier, IMPORTANT_MARKER};

use super::prefix::validate_prefix;

/// Explain the split, classification, and prefixed form of one token.
fn explain(token: &str, prefix: &str) -> String {
    let mut out = String::new();
    let body = token.strip_prefix(IMPORTANT_MARKER).unwrap_or(token);
    let segments = split_variants(body);
    let (root, modifiers) = match segments.split_last() {
        Some((root, modifiers)) => (*root, modifiers),
        None => ("", &[][..]),
    };
    let utility = DefaultClassifier.is_utility(token);

    let _ = writeln!(out, "{token}");
    let _ = writeln!(out, "  modifiers: {}", modifiers.join(" | "));
    let _ = writeln!(out, "  root:      {root}");
    let _ = writeln!(out, "  important: {}", body.len() != token.len());
    let _ = writeln!(out, "  utility:   {utility}");
    let result = if utility {
        prefix_token(token, prefix)
    } else {
        token.into()
    };
    let _ = writeln!(out, "  result:    {result}");
    out
}

/// Run the class command. Returns the process exit code.
pub fn explain_tokens(args: &[String]) -> i32 {
    let mut prefix = None;
    let mut tokens = Vec::new();
    for arg in args {
        if let Some(value) = arg.strip_prefix("--prefix=") {
            prefix = Some(value);
        } else {
            tokens.push(arg.as_str());
        }
    }
    let Some(prefix) = prefix else {
        eprintln!("Usage: twp class <token>... --prefix=<prefix>");
        return 1;
    };
    if let Err(message) = validate_prefix(prefix) {
        eprintln!("error: {message}");
        return 1;
    }
    if tokens.is_empty() {
        eprintln!("Usage: twp class <token>... --prefix=<prefix>");
        return 1;
    }
    for token in tokens {
        print!("{}", explain(token, prefix));
    }
    0
}
