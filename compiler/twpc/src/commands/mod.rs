//! Command handlers for the `twp` CLI.
//!
//! Each submodule implements one command. Shared helpers live here.

mod class;
mod parse;
mod prefix;

pub use class::explain_tokens;
pub use parse::dump_file;
pub use prefix::{
    parse_prefix_args, prefix_file, prefix_paths, run_prefix, validate_prefix, FileResult,
    PrefixOptions, Summary,
};

/// Read a file from disk, with a user-friendly message on failure.
pub(crate) fn read_file(path: &str) -> Result<String, String> {
    std::fs::read_to_string(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
        std::io::ErrorKind::PermissionDenied => format!("permission denied reading '{path}'"),
        std::io::ErrorKind::InvalidData => format!("'{path}' contains invalid UTF-8 data"),
        _ => format!("error reading '{path}': {e}"),
    })
}
