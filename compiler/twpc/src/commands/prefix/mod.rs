//! The `prefix` command: rewrite class names in source files.
//!
//! Supports single files, directories, and stdin. Directory contents are
//! transformed in parallel, one rayon task per file.

#![allow(
    clippy::struct_excessive_bools,
    reason = "PrefixOptions has standard CLI config bool fields"
)]

use std::any::Any;
use std::io::Read;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use rayon::prelude::*;
use twp_parse::SourceKind;
use twp_rewrite::{transform, TransformConfig, TransformError, TransformOutput};

use super::read_file;
use crate::diagnostics::{render_parse_error, use_colors};

/// Kind assumed for stdin without an explicit extension.
const DEFAULT_STDIN_EXTENSION: &str = "tsx";

/// Configuration for the prefix command.
#[derive(Debug)]
pub struct PrefixOptions {
    pub config: TransformConfig,
    /// Report files that would change, exit 1 if any, write nothing.
    pub check: bool,
    /// Print a diff instead of writing.
    pub diff: bool,
    /// Read one unit of this kind from stdin and write it to stdout.
    pub stdin: Option<SourceKind>,
    pub paths: Vec<PathBuf>,
}

/// Outcome for a single file.
#[derive(Debug, PartialEq, Eq)]
pub enum FileResult {
    Unchanged,
    Rewritten,
    /// Would be rewritten (check or diff mode).
    WouldRewrite,
    /// The file could not be read, parsed, or written. Contains the
    /// rendered message.
    Failed(String),
}

/// Totals over a run.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary {
    pub rewritten: usize,
    pub unchanged: usize,
    pub errors: usize,
}

impl Summary {
    fn record(&mut self, result: &FileResult) {
        match result {
            FileResult::Rewritten | FileResult::WouldRewrite => self.rewritten += 1,
            FileResult::Unchanged => self.unchanged += 1,
            FileResult::Failed(_) => self.errors += 1,
        }
    }

    fn merge(&mut self, other: &Summary) {
        self.rewritten += other.rewritten;
        self.unchanged += other.unchanged;
        self.errors += other.errors;
    }
}

/// A prefix is spliced into attribute values and JS strings verbatim, so
/// it must not be able to end either.
pub fn validate_prefix(prefix: &str) -> Result<(), String> {
    if prefix.is_empty() {
        return Err("--prefix must not be empty".to_string());
    }
    if let Some(c) = prefix
        .chars()
        .find(|&c| c.is_whitespace() || matches!(c, '"' | '\'' | '`' | '\\'))
    {
        return Err(format!("--prefix must not contain {c:?}"));
    }
    Ok(())
}

/// Parse the arguments following `twp prefix`.
pub fn parse_prefix_args(args: &[String]) -> Result<PrefixOptions, String> {
    let mut prefix = None;
    let mut attributes = Vec::new();
    let mut check = false;
    let mut diff = false;
    let mut stdin = None;
    let mut paths = Vec::new();

    for arg in args {
        if let Some(value) = arg.strip_prefix("--prefix=") {
            prefix = Some(value);
        } else if let Some(value) = arg.strip_prefix("--attr=") {
            attributes.push(value);
        } else if let Some(value) = arg.strip_prefix("--stdin=") {
            stdin = Some(value);
        } else {
            match arg.as_str() {
                "--check" => check = true,
                "--diff" => diff = true,
                "--stdin" => stdin = Some(DEFAULT_STDIN_EXTENSION),
                arg if arg.starts_with('-') => return Err(format!("unknown option: {arg}")),
                path => paths.push(PathBuf::from(path)),
            }
        }
    }

    let Some(prefix) = prefix else {
        return Err("missing --prefix=<prefix>".to_string());
    };
    validate_prefix(prefix)?;
    if attributes.iter().any(|name| name.is_empty()) {
        return Err("--attr must name an attribute".to_string());
    }

    let stdin = match stdin {
        Some(ext) => {
            let ext = ext.trim_start_matches('.');
            let Some(kind) = SourceKind::from_extension(ext) else {
                return Err(format!("unsupported --stdin file type: {ext}"));
            };
            if !paths.is_empty() {
                return Err("cannot specify paths with --stdin".to_string());
            }
            if check || diff {
                return Err("cannot use --check or --diff with --stdin".to_string());
            }
            Some(kind)
        }
        None => None,
    };
    if stdin.is_none() && paths.is_empty() {
        paths.push(PathBuf::from("."));
    }

    let mut config = TransformConfig::new(prefix);
    if !attributes.is_empty() {
        config = config.with_attributes(attributes);
    }
    Ok(PrefixOptions {
        config,
        check,
        diff,
        stdin,
        paths,
    })
}

/// Transform one file and, unless checking or diffing, write it back.
pub fn prefix_file(path: &Path, options: &PrefixOptions) -> FileResult {
    let display = path.display().to_string();
    let Some(kind) = SourceKind::from_path(path) else {
        return FileResult::Failed(format!("unsupported file type: '{display}'\n"));
    };
    let source = match read_file(&display) {
        Ok(source) => source,
        Err(message) => return FileResult::Failed(format!("{message}\n")),
    };

    let code = match transform_unit(&display, &source, kind, &options.config) {
        Ok(TransformOutput::Unchanged) => return FileResult::Unchanged,
        Ok(TransformOutput::Rewritten { code, edits }) => {
            tracing::debug!(path = %path.display(), edits = edits.len(), "rewritten");
            code
        }
        Err(message) => return FileResult::Failed(message),
    };

    if options.diff {
        print_diff(&display, &source, &code);
        return FileResult::WouldRewrite;
    }
    if options.check {
        return FileResult::WouldRewrite;
    }
    if let Err(e) = std::fs::write(path, &code) {
        return FileResult::Failed(format!("error writing '{display}': {e}\n"));
    }
    FileResult::Rewritten
}

/// Run the transform, turning a parse error or a panic into a message.
fn transform_unit(
    path: &str,
    source: &str,
    kind: SourceKind,
    config: &TransformConfig,
) -> Result<TransformOutput, String> {
    match catch_unwind(AssertUnwindSafe(|| transform(source, kind, config))) {
        Ok(Ok(output)) => Ok(output),
        Ok(Err(TransformError::Parse(error))) => {
            Err(render_parse_error(path, source, &error, use_colors()))
        }
        Err(payload) => Err(format!(
            "error: transform of '{path}' panicked: {}\n",
            panic_message(payload.as_ref())
        )),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message
    } else {
        "unknown panic"
    }
}

/// Transform every path: files directly, directories recursively.
pub fn prefix_paths(options: &PrefixOptions) -> Summary {
    let mut summary = Summary::default();
    for path in &options.paths {
        if path.is_file() {
            let result = prefix_file(path, options);
            report(path, &result, options);
            summary.record(&result);
        } else if path.is_dir() {
            summary.merge(&prefix_directory(path, options));
        } else {
            eprintln!("Path not found: {}", path.display());
            summary.errors += 1;
        }
    }
    summary
}

/// Transform all supported files under `dir` in parallel.
fn prefix_directory(dir: &Path, options: &PrefixOptions) -> Summary {
    let mut files = Vec::new();
    visit_source_files(dir, &mut |path| files.push(path.to_path_buf()));
    tracing::debug!(dir = %dir.display(), files = files.len(), "collected");

    let rewritten = AtomicUsize::new(0);
    let unchanged = AtomicUsize::new(0);
    let errors = AtomicUsize::new(0);

    files.par_iter().for_each(|path| {
        let result = prefix_file(path, options);
        report(path, &result, options);
        let counter = match result {
            FileResult::Rewritten | FileResult::WouldRewrite => &rewritten,
            FileResult::Unchanged => &unchanged,
            FileResult::Failed(_) => &errors,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    });

    Summary {
        rewritten: rewritten.load(Ordering::Relaxed),
        unchanged: unchanged.load(Ordering::Relaxed),
        errors: errors.load(Ordering::Relaxed),
    }
}

fn report(path: &Path, result: &FileResult, options: &PrefixOptions) {
    match result {
        FileResult::Rewritten => println!("Rewritten: {}", path.display()),
        FileResult::WouldRewrite if options.check => {
            println!("Would rewrite: {}", path.display());
        }
        FileResult::Failed(message) => eprint!("{message}"),
        FileResult::WouldRewrite | FileResult::Unchanged => {}
    }
}

/// Visit every supported source file under `dir`, skipping hidden entries,
/// `node_modules`, and `target`.
fn visit_source_files<F: FnMut(&Path)>(dir: &Path, callback: &mut F) {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            eprintln!("Error reading directory '{}': {e}", dir.display());
            return;
        }
    };

    let mut paths: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
    paths.sort();
    for path in paths {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            if name.starts_with('.') || name == "target" || name == "node_modules" {
                continue;
            }
        }

        if path.is_dir() {
            visit_source_files(&path, callback);
        } else if SourceKind::from_path(&path).is_some() {
            callback(&path);
        }
    }
}

/// Transform stdin to stdout. Returns whether it succeeded.
fn prefix_stdin(kind: SourceKind, config: &TransformConfig) -> bool {
    let mut source = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut source) {
        eprintln!("Error reading from stdin: {e}");
        return false;
    }
    match transform_unit("<stdin>", &source, kind, config) {
        Ok(output) => {
            print!("{}", output.code(&source));
            true
        }
        Err(message) => {
            eprint!("{message}");
            false
        }
    }
}

/// Print a line diff between the original and rewritten content.
///
/// Rewrites never add or remove lines, so lines are compared pairwise.
fn print_diff(path: &str, original: &str, rewritten: &str) {
    print!("{}", line_diff(path, original, rewritten));
}

fn line_diff(path: &str, original: &str, rewritten: &str) -> String {
    use std::fmt::Write as _;

    let mut out = String::new();
    let _ = writeln!(out, "--- {path}");
    let _ = writeln!(out, "+++ {path}");
    let before: Vec<&str> = original.lines().collect();
    let after: Vec<&str> = rewritten.lines().collect();
    let max_lines = before.len().max(after.len());

    let mut i = 0;
    while i < max_lines {
        if before.get(i) == after.get(i) {
            i += 1;
            continue;
        }
        let start = i.saturating_sub(2);
        let mut end = (i + 3).min(max_lines);
        // Extend the hunk over adjacent changes.
        while end < max_lines && before.get(end) != after.get(end) {
            end = (end + 3).min(max_lines);
        }
        let _ = writeln!(
            out,
            "@@ -{},{} +{},{} @@",
            start + 1,
            end - start,
            start + 1,
            end - start
        );
        for j in start..end {
            match (before.get(j), after.get(j)) {
                (Some(old), Some(new)) if old == new => {
                    let _ = writeln!(out, " {old}");
                }
                (old, new) => {
                    if let Some(old) = old {
                        let _ = writeln!(out, "-{old}");
                    }
                    if let Some(new) = new {
                        let _ = writeln!(out, "+{new}");
                    }
                }
            }
        }
        i = end;
    }
    out
}

/// Run the prefix command. Returns the process exit code.
pub fn run_prefix(args: &[String]) -> i32 {
    if args.iter().any(|arg| arg == "--help" || arg == "-h") {
        print_prefix_help();
        return 0;
    }
    let options = match parse_prefix_args(args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("error: {message}");
            eprintln!("Run 'twp prefix --help' for usage");
            return 1;
        }
    };

    if let Some(kind) = options.stdin {
        return i32::from(!prefix_stdin(kind, &options.config));
    }

    let summary = prefix_paths(&options);
    if options.paths.len() > 1 || options.paths.iter().any(|p| p.is_dir()) {
        let verb = if options.check || options.diff {
            "would rewrite"
        } else {
            "rewritten"
        };
        println!(
            "\n{} {verb}, {} unchanged, {} failed",
            summary.rewritten, summary.unchanged, summary.errors
        );
    }

    if summary.errors > 0 || (options.check && summary.rewritten > 0) {
        return 1;
    }
    0
}

fn print_prefix_help() {
    println!("Prefix utility classes in source files");
    println!();
    println!("Usage: twp prefix <paths...> --prefix=<prefix> [options]");
    println!();
    println!("Arguments:");
    println!("  paths            Files or directories to rewrite (default: .)");
    println!();
    println!("Options:");
    println!("  --prefix=<p>     Prefix to add, e.g. tw-");
    println!("  --attr=<name>    Attribute to rewrite (repeatable; default: class, className, tw)");
    println!("  --check          Exit 1 if any file would change, write nothing");
    println!("  --diff           Show a diff instead of writing");
    println!("  --stdin[=<ext>]  Read from stdin, write to stdout (default type: tsx)");
    println!("  --help           Show this help message");
    println!();
    println!("Supported files: {}", SourceKind::EXTENSIONS.join(", "));
    println!("Skipped: hidden entries, node_modules/, target/");
}
