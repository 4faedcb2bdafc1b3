//! The `run` command: load source files into one interpreter, in order.

use lispy_eval::Interpreter;

use crate::cli::RunOptions;

/// Load each file into a fresh interpreter.
///
/// Returns `false` if any file could not be loaded.
pub fn run_files(paths: &[String], options: RunOptions) -> bool {
    let mut interpreter = options.interpreter();
    load_files(&mut interpreter, paths) == 0
}

/// Load `paths` in order, announcing each and printing load failures.
///
/// Later files see the definitions of earlier ones. Returns the number of
/// files that failed to load; errors raised by individual forms are
/// printed by the interpreter and do not count.
pub fn load_files(interpreter: &mut Interpreter, paths: &[String]) -> usize {
    let mut failures = 0;
    for path in paths {
        interpreter.print_handler().println(&format!("Loading: {path}"));
        let result = interpreter.load_file(path);
        if result.is_error() {
            tracing::debug!(path = %path, error = %result, "load failed");
            interpreter.print_handler().println(&result.to_string());
            failures += 1;
        }
    }
    failures
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use lispy_eval::buffer_handler;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_file(dir: &tempfile::TempDir, name: &str, source: &str) -> String {
        let path = dir.path().join(name);
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(source.as_bytes()).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_files_share_one_scope() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_file(&dir, "first.lspy", "(def {square} (\\ {x} {* x x}))");
        let second = write_file(&dir, "second.lspy", "(print (square 7))");

        let handler = buffer_handler();
        let mut interpreter = Interpreter::builder()
            .print_handler(handler.clone())
            .build();
        let failures = load_files(&mut interpreter, &[first.clone(), second.clone()]);

        assert_eq!(failures, 0);
        assert_eq!(
            handler.get_output(),
            format!("Loading: {first}\nLoading: {second}\n49\n")
        );
    }

    #[test]
    fn test_missing_file_is_counted() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.lspy").display().to_string();

        let handler = buffer_handler();
        let mut interpreter = Interpreter::builder()
            .print_handler(handler.clone())
            .build();
        let failures = load_files(&mut interpreter, &[missing.clone()]);

        assert_eq!(failures, 1);
        let output = handler.get_output();
        assert!(output.starts_with(&format!("Loading: {missing}\n")), "{output}");
        assert!(output.contains("Error: Could not load Library"), "{output}");
    }

    #[test]
    fn test_form_errors_do_not_fail_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_file(&dir, "oops.lspy", "(/ 1 0)\n(print \"after\")");

        let handler = buffer_handler();
        let mut interpreter = Interpreter::builder()
            .print_handler(handler.clone())
            .with_prelude(false)
            .build();

        assert_eq!(load_files(&mut interpreter, &[path.clone()]), 0);
        assert_eq!(
            handler.get_output(),
            format!("Loading: {path}\nError: Division By Zero!\n\"after\"\n")
        );
    }
}
