//! Command handlers for the `lispy` binary.
//!
//! File reading failures are reported on stderr and exit the process;
//! evaluation failures are Lispy error values and are printed like any
//! other result.

mod parse;
mod run;

pub use parse::{parse_file, render_tree};
pub use run::{load_files, run_files};

/// Read a source file, or report why not and exit.
pub(super) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}
