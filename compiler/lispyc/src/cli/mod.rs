//! Command-line argument parsing.
//!
//! Arguments are matched by hand. Flags may appear anywhere; the first
//! positional argument selects the command, and a bare file name runs it.

use lispy_eval::{Interpreter, DEFAULT_MAX_CALL_DEPTH};

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt.
    Repl,
    /// Load each file in order.
    Run(Vec<String>),
    /// Print the syntax tree of a file.
    Parse(String),
    Help,
    Version,
}

/// Settings shared by every command that evaluates code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunOptions {
    pub with_prelude: bool,
    /// `None` is unlimited.
    pub max_call_depth: Option<usize>,
}

impl Default for RunOptions {
    fn default() -> Self {
        Self {
            with_prelude: true,
            max_call_depth: Some(DEFAULT_MAX_CALL_DEPTH),
        }
    }
}

impl RunOptions {
    /// Build an interpreter writing to stdout with these settings.
    pub fn interpreter(self) -> Interpreter {
        Interpreter::builder()
            .with_prelude(self.with_prelude)
            .max_call_depth(self.max_call_depth)
            .build()
    }
}

/// A parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub command: Command,
    pub options: RunOptions,
}

/// Parse the arguments following the program name.
///
/// The error is a one-line message for stderr.
pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Invocation, String> {
    let mut options = RunOptions::default();
    let mut positional: Vec<&str> = Vec::new();

    for arg in args.iter().map(AsRef::as_ref) {
        match arg {
            "--help" | "-h" => return Ok(invocation(Command::Help, options)),
            "--version" | "-V" => return Ok(invocation(Command::Version, options)),
            "--no-prelude" => options.with_prelude = false,
            _ => {
                if let Some(value) = arg.strip_prefix("--max-depth=") {
                    options.max_call_depth = parse_max_depth(value)?;
                } else if arg.starts_with('-') && arg.len() > 1 {
                    return Err(format!("unknown option '{arg}'"));
                } else {
                    positional.push(arg);
                }
            }
        }
    }

    let command = match positional.split_first() {
        None => Command::Repl,
        Some((&"help", _)) => Command::Help,
        Some((&"version", _)) => Command::Version,
        Some((&"run", files)) => {
            if files.is_empty() {
                return Err("missing file path (usage: lispy run <file>...)".to_string());
            }
            Command::Run(owned(files))
        }
        Some((&"parse", rest)) => match rest {
            [file] => Command::Parse((*file).to_string()),
            [] => return Err("missing file path (usage: lispy parse <file>)".to_string()),
            _ => return Err("parse takes exactly one file".to_string()),
        },
        Some(_) => Command::Run(owned(&positional)),
    };

    Ok(invocation(command, options))
}

fn invocation(command: Command, options: RunOptions) -> Invocation {
    Invocation { command, options }
}

fn owned(args: &[&str]) -> Vec<String> {
    args.iter().map(|s| (*s).to_string()).collect()
}

/// `0` lifts the limit.
fn parse_max_depth(value: &str) -> Result<Option<usize>, String> {
    match value.parse::<usize>() {
        Ok(0) => Ok(None),
        Ok(n) => Ok(Some(n)),
        Err(_) => Err(format!(
            "invalid --max-depth value '{value}': expected a non-negative integer"
        )),
    }
}

/// Print usage to stdout.
pub fn print_usage() {
    println!("Lispy {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: lispy [options] [command]");
    println!();
    println!("Commands:");
    println!("  (none)               Start the interactive prompt");
    println!("  run <file>...        Load and evaluate each file in order");
    println!("  <file>...            Same as run");
    println!("  parse <file>         Print the concrete syntax tree of a file");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --no-prelude         Start without the standard library prelude");
    println!("  --max-depth=<n>      Limit nested function calls (0 = unlimited)");
    println!("  -h, --help           Show this help message");
    println!("  -V, --version        Show version information");
    println!();
    println!("Environment:");
    println!("  RUST_LOG             Enable tracing (e.g. RUST_LOG=lispy_eval=debug)");
    println!("  LISPY_LOG_TREE       Render traces as an indented tree");
}
