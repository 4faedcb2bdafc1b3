//! Interactive prompt with line editing and persistent history.

use std::path::PathBuf;

use lispy_eval::Interpreter;
use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RustylineResult};

use crate::cli::RunOptions;

const HISTORY_FILE: &str = ".lispy_history";

pub const PROMPT: &str = "lispy> ";

/// Line editor backed by rustyline.
pub struct Repl {
    editor: DefaultEditor,
}

impl Repl {
    /// Create the editor and load any saved history.
    pub fn new() -> RustylineResult<Self> {
        let mut editor = DefaultEditor::new()?;
        // No history yet is fine.
        let _ = editor.load_history(&Self::history_file_path());
        Ok(Self { editor })
    }

    fn history_file_path() -> PathBuf {
        match dirs_home() {
            Some(home) => home.join(HISTORY_FILE),
            None => PathBuf::from(HISTORY_FILE),
        }
    }

    pub fn read_line(&mut self, prompt: &str) -> RustylineResult<String> {
        self.editor.readline(prompt)
    }

    pub fn add_history(&mut self, line: &str) {
        let _ = self.editor.add_history_entry(line);
    }

    /// Save history to disk.
    pub fn finalize(&mut self) {
        if let Err(err) = self.editor.save_history(&Self::history_file_path()) {
            tracing::debug!(%err, "could not save history");
        }
    }
}

/// Home directory, if the platform has one.
fn dirs_home() -> Option<PathBuf> {
    #[cfg(unix)]
    {
        std::env::var("HOME").ok().map(PathBuf::from)
    }
    #[cfg(windows)]
    {
        std::env::var("USERPROFILE").ok().map(PathBuf::from)
    }
    #[cfg(not(any(unix, windows)))]
    {
        None
    }
}

/// Evaluate one line of input.
///
/// Blank lines produce nothing; otherwise the result's printed form,
/// preceded by the parser's positioned error when the line does not parse.
pub fn eval_line(interpreter: &mut Interpreter, line: &str) -> Option<String> {
    if line.trim().is_empty() {
        return None;
    }
    match interpreter.evaluate_with_diagnostics(line) {
        (value, Some(err)) => Some(format!("{err}\n{value}")),
        (value, None) => Some(value.to_string()),
    }
}

/// Run the prompt until end of input or Ctrl+C.
pub fn run_repl(options: RunOptions) -> RustylineResult<()> {
    let mut repl = Repl::new()?;
    let mut interpreter = options.interpreter();

    println!("Lispy Version {}", env!("CARGO_PKG_VERSION"));
    println!("Press Ctrl+c to Exit");
    println!();

    loop {
        match repl.read_line(PROMPT) {
            Ok(line) => {
                if let Some(output) = eval_line(&mut interpreter, &line) {
                    repl.add_history(&line);
                    println!("{output}");
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(err) => {
                repl.finalize();
                return Err(err);
            }
        }
    }

    repl.finalize();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lispy_eval::silent_handler;
    use pretty_assertions::assert_eq;

    fn interpreter() -> Interpreter {
        Interpreter::builder().print_handler(silent_handler()).build()
    }

    #[test]
    fn test_history_file_path() {
        let path = Repl::history_file_path();
        assert!(path.to_string_lossy().ends_with(HISTORY_FILE));
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let mut interp = interpreter();
        assert_eq!(eval_line(&mut interp, ""), None);
        assert_eq!(eval_line(&mut interp, "   \t"), None);
    }

    #[test]
    fn test_lines_share_the_global_scope() {
        let mut interp = interpreter();
        assert_eq!(eval_line(&mut interp, "def {x} 100").as_deref(), Some("()"));
        assert_eq!(eval_line(&mut interp, "+ x 1").as_deref(), Some("101"));
        assert_eq!(
            eval_line(&mut interp, "(fun {add a b} {+ a b})").as_deref(),
            Some("()")
        );
        assert_eq!(eval_line(&mut interp, "add 2 3").as_deref(), Some("5"));
    }

    #[test]
    fn test_errors_are_printed_as_values() {
        let mut interp = interpreter();
        assert_eq!(
            eval_line(&mut interp, "/ 10 0").as_deref(),
            Some("Error: Division By Zero!")
        );
    }

    #[test]
    fn test_parse_errors_show_position() {
        let mut interp = interpreter();
        let output = eval_line(&mut interp, "(+ 1").unwrap_or_default();
        let mut lines = output.lines();
        let diagnostic = lines.next().unwrap_or_default();
        assert!(diagnostic.starts_with("<stdin>:1:5: error: "), "{output}");
        assert_eq!(lines.next(), Some("Error: Failed to parse input: '(+ 1'"));
        assert_eq!(lines.next(), None);
    }
}
