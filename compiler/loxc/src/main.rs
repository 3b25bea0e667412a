//! Lox CLI
//!
//! Tree-walking interpreter for Lox.

use loxc::commands::{run_file, run_prompt};
use loxc::{init_tracing, RunConfig, Stage, TreeNotation};

use lox_parse::RecoveryMode;

/// Exit code for malformed command lines.
const EXIT_USAGE: i32 = 64;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().collect();

    // Flags valid for every command.
    let recovery = if args.iter().any(|a| a == "--recover") {
        RecoveryMode::Synchronize
    } else {
        RecoveryMode::Abort
    };

    let Some(command) = args.get(1) else {
        std::process::exit(run_prompt(RunConfig::default().with_recovery(recovery)));
    };

    let code = match command.as_str() {
        "run" => {
            let Some(path) = file_argument(&args) else {
                eprintln!("Usage: lox run <file.lox> [--recover]");
                std::process::exit(EXIT_USAGE);
            };
            run_file(path, RunConfig::new(Stage::Execute).with_recovery(recovery))
        }
        "tokens" => {
            let Some(path) = file_argument(&args) else {
                eprintln!("Usage: lox tokens <file.lox>");
                std::process::exit(EXIT_USAGE);
            };
            run_file(path, RunConfig::new(Stage::Scan))
        }
        "parse" => {
            let mut expression = false;
            let mut notation = TreeNotation::SExpr;
            for arg in args.iter().skip(2) {
                match arg.as_str() {
                    "--expr" | "-e" => expression = true,
                    "--rpn" => notation = TreeNotation::Rpn,
                    _ => {}
                }
            }

            let Some(path) = file_argument(&args) else {
                eprintln!("Usage: lox parse <file.lox> [--expr] [--rpn] [--recover]");
                eprintln!();
                eprintln!("Options:");
                eprintln!("  --expr, -e   Parse the file as a single expression");
                eprintln!("  --rpn        Print the expression in reverse Polish notation");
                eprintln!("  --recover    Keep parsing after a bad statement");
                std::process::exit(EXIT_USAGE);
            };

            if notation == TreeNotation::Rpn && !expression {
                eprintln!("error: --rpn requires --expr");
                std::process::exit(EXIT_USAGE);
            }

            let config = RunConfig::new(Stage::Parse)
                .with_recovery(recovery)
                .with_expression(expression)
                .with_notation(notation);
            run_file(path, config)
        }
        "repl" => run_prompt(RunConfig::default().with_recovery(recovery)),
        "help" | "--help" | "-h" => {
            print_usage();
            0
        }
        "--version" | "-V" => {
            println!("lox {}", env!("CARGO_PKG_VERSION"));
            0
        }
        "--recover" => run_prompt(RunConfig::default().with_recovery(recovery)),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            EXIT_USAGE
        }
    };

    std::process::exit(code);
}

/// The first non-flag argument after the command.
fn file_argument(args: &[String]) -> Option<&str> {
    args.iter()
        .skip(2)
        .find(|arg| !arg.starts_with('-'))
        .map(String::as_str)
}

fn print_usage() {
    println!("Lox - a tree-walking interpreter");
    println!();
    println!("Usage: lox <command> [options]");
    println!();
    println!("Commands:");
    println!("  run <file>      Run a Lox program");
    println!("  tokens <file>   Print the token stream");
    println!("  parse <file>    Print the syntax tree (--expr, --rpn)");
    println!("  repl            Start the interactive prompt (the default)");
    println!("  help            Show this message");
    println!();
    println!("Options:");
    println!("  --recover       Report every bad statement instead of stopping at the first");
    println!();
    println!("Exit codes: 65 syntax error, 70 runtime error, 66 unreadable file.");
}
