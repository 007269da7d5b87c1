//! nestc CLI
//!
//! Structural printer for nested sequences.

use nestc::commands::{run_ndim, run_print, NdimOptions, PrintOptions};
use nestc::CliError;

fn main() {
    nestc::init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = &args[1];

    let result: Result<(), CliError> = match command.as_str() {
        "print" => PrintOptions::parse(&args[2..])
            .and_then(|options| run_print(&options, &mut std::io::stdout().lock())),
        "ndim" => NdimOptions::parse(&args[2..])
            .and_then(|options| run_ndim(&options, &mut std::io::stdout().lock())),
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        "version" | "--version" | "-V" => {
            println!("nestc {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!("nestc - structural printer for nested sequences");
    println!();
    println!("Usage: nestc <command> [FILE] [options]");
    println!();
    println!("Commands:");
    println!("  print [FILE]    Print the structural rendering of a document");
    println!("  ndim [FILE]     Print the dimension of a document");
    println!("  help            Show this help message");
    println!("  version         Show version information");
    println!();
    println!("FILE defaults to stdin; `-` also reads stdin. Input is literal");
    println!("notation such as [[1, 2], (3, 'x')] unless it is JSON.");
    println!();
    println!("Input options:");
    println!("  --json              Parse input as JSON (implied by a .json FILE)");
    println!();
    println!("Print options:");
    println!("  --sep=<text>        Separator between siblings (default: \", \")");
    println!("  --threshold=<n>     Summarize containers with more than n children");
    println!("  --edge-items=<n>    Children kept at each end when summarizing");
    println!("  --config=<path>     JSON file with separator/summary settings");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=nest_fmt=debug) to trace rendering.");
}
