//! Console logging for the browser build. `tracing` events are formatted by
//! `tracing-subscriber` and written to the devtools console; errors go to
//! `console.error`, warnings to `console.warn`, everything else to `console.log`.

use tracing::Level;
use tracing_subscriber::EnvFilter;

use super::config::DEFAULT_LOG_LEVEL;

/// Builds the filter for the console logger, falling back to the default level
/// when the configured directive does not parse.
pub fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_new(directive.trim()).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL))
}

/// Console method a formatted event is routed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConsoleTarget {
    Error,
    Warn,
    Log,
}

impl ConsoleTarget {
    pub fn for_level(level: &Level) -> Self {
        match *level {
            Level::ERROR => Self::Error,
            Level::WARN => Self::Warn,
            _ => Self::Log,
        }
    }
}

/// Installs the global subscriber. Safe to call more than once; later calls are no-ops.
#[cfg(target_arch = "wasm32")]
pub fn init(directive: &str) {
    use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(console::ConsoleMakeWriter);

    let _ = tracing_subscriber::registry()
        .with(build_filter(directive))
        .with(layer)
        .try_init();
}

#[cfg(target_arch = "wasm32")]
mod console {
    use super::ConsoleTarget;
    use std::io;
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    /// Hands out one buffered writer per event so each event becomes a single console line.
    pub struct ConsoleMakeWriter;

    pub struct ConsoleWriter {
        target: ConsoleTarget,
        buffer: Vec<u8>,
    }

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter {
                target: ConsoleTarget::Log,
                buffer: Vec::new(),
            }
        }

        fn make_writer_for(&'a self, meta: &tracing::Metadata<'_>) -> Self::Writer {
            ConsoleWriter {
                target: ConsoleTarget::for_level(meta.level()),
                buffer: Vec::new(),
            }
        }
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
            let line = String::from_utf8_lossy(&self.buffer);
            let line = line.trim_end();
            if line.is_empty() {
                return;
            }
            let value = JsValue::from_str(line);
            match self.target {
                ConsoleTarget::Error => web_sys::console::error_1(&value),
                ConsoleTarget::Warn => web_sys::console::warn_1(&value),
                ConsoleTarget::Log => web_sys::console::log_1(&value),
            }
        }
    }
}
