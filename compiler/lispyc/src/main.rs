//! Lispy CLI
//!
//! Interactive prompt and file loader.

use lispyc::cli::{parse_args, print_usage, Command};
use lispyc::commands::{parse_file, run_files};
use lispyc::init_tracing;
use lispyc::repl::run_repl;

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let invocation = match parse_args(&args) {
        Ok(invocation) => invocation,
        Err(msg) => {
            eprintln!("error: {msg}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    match invocation.command {
        Command::Repl => {
            if let Err(err) = run_repl(invocation.options) {
                eprintln!("error: {err}");
                std::process::exit(1);
            }
        }
        Command::Run(files) => {
            if !run_files(&files, invocation.options) {
                std::process::exit(1);
            }
        }
        Command::Parse(file) => parse_file(&file),
        Command::Help => print_usage(),
        Command::Version => {
            println!("Lispy {}", env!("CARGO_PKG_VERSION"));
        }
    }
}
