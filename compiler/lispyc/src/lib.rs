//! Lispy CLI - the `lispy` interpreter binary.
//!
//! ```text
//! lispy                   interactive REPL
//! lispy run <file>...     load files in order
//! lispy parse <file>      print the concrete syntax tree
//! ```
//!
//! Argument parsing lives in [`cli`] so it can be tested without spawning
//! the binary; [`commands`] and [`repl`] do the work.

pub mod cli;
pub mod commands;
pub mod repl;
mod tracing_setup;

pub use tracing_setup::init_tracing;
