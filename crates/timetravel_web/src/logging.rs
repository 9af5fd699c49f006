//! Tracing output for the browser console.

use std::io;
use tracing_subscriber::EnvFilter;
use wasm_bindgen::JsValue;

/// Filter used when the page URL does not name one.
pub const DEFAULT_LEVEL: &str = "info";

/// Buffers one formatted event and logs it to the console on drop.
#[derive(Default)]
struct ConsoleWriter {
    buffer: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buffer.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buffer);
        web_sys::console::log_1(&JsValue::from_str(line.trim_end()));
    }
}

/// Reads the `log` query parameter, e.g. `?log=debug`.
pub fn level_from_url() -> String {
    web_sys::window()
        .and_then(|window| window.location().search().ok())
        .and_then(|search| web_sys::UrlSearchParams::new_with_str(&search).ok())
        .and_then(|params| params.get("log"))
        .filter(|level| !level.is_empty())
        .unwrap_or_else(|| DEFAULT_LEVEL.to_string())
}

/// Installs the global subscriber.
///
/// The browser has no wall clock the formatter can use, so timestamps are
/// left to the console.
pub fn init(level: &str) {
    let filter = EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(ConsoleWriter::default)
        .without_time()
        .with_ansi(false)
        .try_init();
}
