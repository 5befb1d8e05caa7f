//! `tracing` setup for the browser. Events are formatted by `tracing-subscriber`
//! and written to the devtools console at the matching console level. The
//! filter comes from `SCRIBE_LOG` at build time. Never put tokens, passwords,
//! OTPs or API keys into span or event fields.

use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_DEBUG_DIRECTIVE: &str = "social_scribe_web=debug,info";
const DEFAULT_RELEASE_DIRECTIVE: &str = "info";

/// Installs the global subscriber. Calling it again is a no-op.
pub fn init() {
    let directive = directive(option_env!("SCRIBE_LOG"), cfg!(debug_assertions));
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false);

    #[cfg(target_arch = "wasm32")]
    let builder = builder.with_writer(console::ConsoleMakeWriter);
    #[cfg(not(target_arch = "wasm32"))]
    let builder = builder.with_writer(std::io::stderr);

    let _ = builder.try_init();
}

fn directive(configured: Option<&str>, debug_build: bool) -> String {
    match configured.map(str::trim).filter(|value| !value.is_empty()) {
        Some(value) => value.to_string(),
        None if debug_build => DEFAULT_DEBUG_DIRECTIVE.to_string(),
        None => DEFAULT_RELEASE_DIRECTIVE.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
mod console {
    use std::io::{self, Write};
    use tracing::{Level, Metadata};
    use tracing_subscriber::fmt::MakeWriter;
    use wasm_bindgen::JsValue;

    pub struct ConsoleMakeWriter;

    impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            ConsoleWriter::new(Level::INFO)
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            ConsoleWriter::new(*meta.level())
        }
    }

    /// Buffers one formatted event and emits it on drop.
    pub struct ConsoleWriter {
        level: Level,
        buffer: Vec<u8>,
    }

    impl ConsoleWriter {
        fn new(level: Level) -> Self {
            Self {
                level,
                buffer: Vec::new(),
            }
        }
    }

    impl Write for ConsoleWriter {
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
            let text = String::from_utf8_lossy(&self.buffer);
            let line = JsValue::from_str(text.trim_end());
            match self.level {
                Level::ERROR => web_sys::console::error_1(&line),
                Level::WARN => web_sys::console::warn_1(&line),
                Level::INFO => web_sys::console::info_1(&line),
                _ => web_sys::console::debug_1(&line),
            }
        }
    }
}
