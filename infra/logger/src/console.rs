use std::borrow::Cow;
use std::io;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;

/// A [`MakeWriter`] that hands every formatted event to the browser console.
///
/// Each event gets its own [`ConsoleLine`]; the line is emitted when the
/// writer is dropped, through the console method that matches the level
/// (`console.error`, `console.warn`, ...).
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserConsole;

impl<'a> MakeWriter<'a> for BrowserConsole {
    type Writer = ConsoleLine;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleLine::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleLine::new(*meta.level())
    }
}

/// Buffer for a single formatted event.
#[derive(Debug)]
pub struct ConsoleLine {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleLine {
    const fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }
}

impl io::Write for ConsoleLine {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleLine {
    fn drop(&mut self) {
        if let Some(line) = finish_line(&self.buf) {
            emit(self.level, &line);
        }
    }
}

/// Trims the trailing newline the fmt layer appends; blank output is skipped.
fn finish_line(buf: &[u8]) -> Option<Cow<'_, str>> {
    let line = String::from_utf8_lossy(buf);
    if line.trim().is_empty() {
        return None;
    }
    match line {
        Cow::Borrowed(s) => Some(Cow::Borrowed(s.trim_end())),
        Cow::Owned(s) => Some(Cow::Owned(s.trim_end().to_owned())),
    }
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::ERROR => console::error_1(&value),
        Level::WARN => console::warn_1(&value),
        Level::INFO => console::info_1(&value),
        Level::DEBUG => console::debug_1(&value),
        _ => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(level: Level, line: &str) {
    use std::io::Write;

    // Outside the browser the closest thing to the console is stderr.
    let _ = writeln!(io::stderr().lock(), "[{level}] {line}");
}
