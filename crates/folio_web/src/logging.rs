//! Browser console logging backend.
//!
//! # Responsibility
//! - Route `log` records from core and web code to `console.*`.
//! - Install the panic hook that forwards Rust panics to `console.error`.
//!
//! # Invariants
//! - Initialization is idempotent; a second call keeps the first logger.
//! - Messages keep the `event=... module=... status=...` shape of core logs.

use log::{Level, LevelFilter, Log, Metadata, Record};
use wasm_bindgen::JsValue;

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record<'_>) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let message = format_record(record.level(), record.target(), &record.args().to_string());
        let line = JsValue::from_str(&message);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::info_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

fn format_record(level: Level, target: &str, message: &str) -> String {
    format!("[{level}] {target}: {message}")
}

/// `debug` for debug builds, `info` otherwise.
pub fn default_level() -> LevelFilter {
    if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the console logger and panic hook.
pub fn init_console_logging(level: LevelFilter) {
    console_error_panic_hook::set_once();
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
        log::info!(
            "event=logging_init module=web status=ok level={} version={}",
            level,
            env!("CARGO_PKG_VERSION")
        );
    }
}

/// Markup attribute on `<html>` that overrides the console level.
pub const LEVEL_ATTRIBUTE: &str = "data-log-level";

/// Level requested by the page's `data-log-level` attribute, falling back to
/// `default_level()` when absent or unrecognized.
pub fn level_from_attribute(value: Option<&str>) -> LevelFilter {
    value.and_then(parse_level).unwrap_or_else(default_level)
}

/// Parses a level name from page markup; unknown names yield `None`.
pub fn parse_level(value: &str) -> Option<LevelFilter> {
    match value.trim().to_ascii_lowercase().as_str() {
        "off" => Some(LevelFilter::Off),
        "trace" => Some(LevelFilter::Trace),
        "debug" => Some(LevelFilter::Debug),
        "info" => Some(LevelFilter::Info),
        "warn" | "warning" => Some(LevelFilter::Warn),
        "error" => Some(LevelFilter::Error),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{default_level, format_record, level_from_attribute, parse_level};
    use log::{Level, LevelFilter};

    #[test]
    fn record_line_includes_level_and_target() {
        assert_eq!(
            format_record(Level::Warn, "folio_web::page", "event=x status=error"),
            "[WARN] folio_web::page: event=x status=error"
        );
    }

    #[test]
    fn parses_level_names() {
        assert_eq!(parse_level("WARNING"), Some(LevelFilter::Warn));
        assert_eq!(parse_level(" debug "), Some(LevelFilter::Debug));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn markup_attribute_overrides_default_level() {
        assert_eq!(level_from_attribute(Some("error")), LevelFilter::Error);
        assert_eq!(level_from_attribute(Some("off")), LevelFilter::Off);
        assert_eq!(level_from_attribute(Some("chatty")), default_level());
        assert_eq!(level_from_attribute(None), default_level());
    }
}
