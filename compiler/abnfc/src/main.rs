//! ABNF grammar checker CLI.

use abnfc::commands::{list_productions, run_check};
use abnfc::parse_check_args;
use abnfc::tracing_setup::init_tracing;

/// A check failed or a file could not be read.
const EXIT_FAILURE: i32 = 1;
/// The command line itself was wrong.
const EXIT_USAGE: i32 = 2;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    if args.len() < 2 {
        print_usage();
        std::process::exit(EXIT_USAGE);
    }

    let command = &args[1];
    tracing::debug!(%command, "dispatching");

    match command.as_str() {
        "check" => {
            let (config, paths) = match parse_check_args(&args[2..]) {
                Ok(parsed) => parsed,
                Err(e) => {
                    eprintln!("error: {e}");
                    eprintln!(
                        "Usage: abnf check [--rfc7405] [--rule=<production>] [--strict] [--quiet] <file>..."
                    );
                    std::process::exit(EXIT_USAGE);
                }
            };

            if !run_check(&paths, config) {
                std::process::exit(EXIT_FAILURE);
            }
        }
        "productions" => {
            let core_only = args[2..].iter().any(|arg| arg == "--core");
            if let Err(e) = list_productions(&mut std::io::stdout().lock(), core_only) {
                eprintln!("error: {e}");
                std::process::exit(EXIT_FAILURE);
            }
        }
        "help" | "--help" | "-h" => {
            print_usage();
        }
        "version" | "--version" | "-V" => {
            println!("abnf {}", env!("CARGO_PKG_VERSION"));
            println!("RFC 5234 / RFC 7405 grammar recognizer");
        }
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(EXIT_USAGE);
        }
    }
}

fn print_usage() {
    println!("abnf: check ABNF (RFC 5234) grammar files");
    println!();
    println!("Usage: abnf <command> [options]");
    println!();
    println!("Commands:");
    println!("  check <file>...      Recognize grammar files and report matched bytes");
    println!("  productions [--core] List productions usable with --rule");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Check options:");
    println!("  --rfc7405            Accept %s\"...\" and %i\"...\" strings (RFC 7405)");
    println!("  --rule=<production>  Production to recognize (default: rulelist)");
    println!("  --strict             Fail unless the whole file is recognized");
    println!("  --quiet, -q          Print only the recognized byte count");
    println!();
    println!("Exit status: 0 success, 1 check or read failure, 2 usage error.");
    println!();
    println!("Logging:");
    println!("  RUST_LOG=abnf_core=trace abnf check grammar.abnf");
    println!();
    println!("Examples:");
    println!("  abnf check grammar.abnf");
    println!("  abnf check --strict --rfc7405 *.abnf");
    println!("  abnf check --rule=rulename -q name.txt");
}
