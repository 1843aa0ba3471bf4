//! Browser console logging and panic reporting.
//!
//! Core code logs through the `log` facade; this module routes those records
//! to `console.*` so they show up in the browser devtools. Both hooks are
//! installed at most once and do nothing off `wasm32`.

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Forwards `log` records to the matching `console` method.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format!("[{}] {}", record.target(), record.args());
        write_console(record.level(), &line);
    }

    fn flush(&self) {}
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: Level, line: &str) {
    use wasm_bindgen::JsValue;
    use web_sys::console;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => console::error_1(&value),
        Level::Warn => console::warn_1(&value),
        Level::Info => console::info_1(&value),
        Level::Debug => console::debug_1(&value),
        Level::Trace => console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: Level, _line: &str) {}

/// Install the console logger. Later calls only change the level.
pub(crate) fn install(level: LevelFilter) {
    // set_logger fails once a logger exists, which is fine
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(level);
}

/// Parse a level name such as `"debug"` or `"off"` (case-insensitive).
pub(crate) fn parse_level(name: &str) -> Option<LevelFilter> {
    name.parse().ok()
}

/// Report panics on `console.error` instead of an opaque `unreachable`.
pub(crate) fn set_panic_hook() {
    #[cfg(target_arch = "wasm32")]
    {
        use std::sync::Once;
        static SET_HOOK: Once = Once::new();
        SET_HOOK.call_once(|| {
            std::panic::set_hook(Box::new(|info| {
                let msg = format!("Cropframe WASM panic: {info}");
                web_sys::console::error_1(&msg.into());
            }));
        });
    }
}
