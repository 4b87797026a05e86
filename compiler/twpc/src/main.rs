//! twprefix CLI

use twpc::commands::{dump_file, explain_tokens, run_prefix};

fn main() {
    twpc::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let command = &args[1];
    let code = match command.as_str() {
        "prefix" => run_prefix(&args[2..]),
        "class" => explain_tokens(&args[2..]),
        "parse" => {
            if args.len() < 3 {
                eprintln!("Usage: twp parse <file>");
                std::process::exit(1);
            }
            dump_file(&args[2])
        }
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "version" | "--version" | "-V" => {
            println!("twp {}", env!("CARGO_PKG_VERSION"));
            0
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            1
        }
    };
    std::process::exit(code);
}

fn print_usage() {
    println!("twprefix: prefix utility classes in markup and JSX sources");
    println!();
    println!("Usage: twp <command> [options]");
    println!();
    println!("Commands:");
    println!("  prefix <paths...> --prefix=<p>  Rewrite files in place (see `twp prefix --help`)");
    println!("  class <token>... --prefix=<p>   Explain how tokens are split, classified, prefixed");
    println!("  parse <file>                    Dump the tree the rewriter sees");
    println!("  help                            Show this help message");
    println!("  version                         Show the version");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=twp_rewrite=trace) for tracing output.");
}
