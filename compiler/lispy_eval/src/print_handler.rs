//! Output sink for `print` and for errors reported while loading files.
//!
//! - [`PrintHandler::Stdout`]: the process's standard output (default)
//! - [`PrintHandler::Buffer`]: an in-memory capture, for tests and embedders
//! - [`PrintHandler::Silent`]: discards everything

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

/// Writes to the locked process stdout.
///
/// Write failures (a closed pipe, for instance) are dropped: `print` has no
/// way to report them as a value.
#[derive(Default)]
pub struct StdoutPrintHandler;

impl StdoutPrintHandler {
    pub fn println(&self, msg: &str) {
        let mut out = std::io::stdout().lock();
        let _ = writeln!(out, "{msg}");
    }
}

/// Captures output in memory.
#[derive(Default)]
pub struct BufferPrintHandler {
    buffer: Mutex<String>,
}

impl BufferPrintHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn println(&self, msg: &str) {
        let mut buf = self.buffer.lock();
        buf.push_str(msg);
        buf.push('\n');
    }

    /// Everything written so far.
    pub fn get_output(&self) -> String {
        self.buffer.lock().clone()
    }

    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

/// Where interpreter output goes.
pub enum PrintHandler {
    Stdout(StdoutPrintHandler),
    Buffer(BufferPrintHandler),
    Silent,
}

impl PrintHandler {
    /// Write `msg` followed by a newline.
    pub fn println(&self, msg: &str) {
        match self {
            Self::Stdout(h) => h.println(msg),
            Self::Buffer(h) => h.println(msg),
            Self::Silent => {}
        }
    }

    /// Captured output; empty for handlers that do not capture.
    pub fn get_output(&self) -> String {
        match self {
            Self::Buffer(h) => h.get_output(),
            Self::Stdout(_) | Self::Silent => String::new(),
        }
    }

    /// Discard captured output.
    pub fn clear(&self) {
        if let Self::Buffer(h) = self {
            h.clear();
        }
    }
}

/// Print handler shared between an interpreter and its host.
pub type SharedPrintHandler = Arc<PrintHandler>;

pub fn stdout_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Stdout(StdoutPrintHandler))
}

pub fn buffer_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Buffer(BufferPrintHandler::new()))
}

pub fn silent_handler() -> SharedPrintHandler {
    Arc::new(PrintHandler::Silent)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn buffer_handler_println_appends_newline() {
        let handler = BufferPrintHandler::new();
        handler.println("\"hello\"");
        assert_eq!(handler.get_output(), "\"hello\"\n");
    }

    #[test]
    fn buffer_handler_accumulates() {
        let handler = buffer_handler();
        handler.println("Loading: lib.lspy");
        handler.println("Error: Division By Zero!");
        assert_eq!(
            handler.get_output(),
            "Loading: lib.lspy\nError: Division By Zero!\n"
        );
    }

    #[test]
    fn buffer_handler_clear_empties_buffer() {
        let handler = buffer_handler();
        handler.println("{1 2 3}");
        handler.clear();
        assert!(handler.get_output().is_empty());
    }

    #[test]
    fn silent_handler_discards_output() {
        let handler = silent_handler();
        handler.println("hello");
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn stdout_handler_captures_nothing() {
        let handler = stdout_handler();
        assert_eq!(handler.get_output(), "");
    }

    #[test]
    fn shared_handler_sees_writes_from_clones() {
        let handler = buffer_handler();
        let host = Arc::clone(&handler);

        let worker = std::thread::spawn(move || {
            for _ in 0..50 {
                host.println("a");
            }
        });
        for _ in 0..50 {
            handler.println("b");
        }
        worker.join().unwrap();

        assert_eq!(handler.get_output().lines().count(), 100);
    }
}
