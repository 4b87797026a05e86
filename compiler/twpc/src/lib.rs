//! twpc - the `twp` command-line front end
//!
//! Applies the class-prefix transform to files, directories, or stdin.
//! Files are transformed in parallel; each file is its own failure unit.

pub mod commands;
mod diagnostics;
mod tracing_setup;

pub use tracing_setup::init_tracing;
