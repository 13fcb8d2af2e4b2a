use crate::domain::logging::{LogEntry, LogLevel, Logger, TimeProvider};
use crate::time_utils::format_clock;
use wasm_bindgen::JsValue;

/// Browser console implementation of the domain logger.
pub struct ConsoleLogger {
    min_level: LogLevel,
}

impl ConsoleLogger {
    pub fn new(min_level: LogLevel) -> Self {
        Self { min_level }
    }

    pub fn new_development() -> Self {
        Self::new(LogLevel::Debug)
    }

    pub fn new_production() -> Self {
        Self::new(LogLevel::Info)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, entry: LogEntry) {
        if entry.level < self.min_level {
            return;
        }

        let timestamp = crate::domain::logging::get_time_provider().format_timestamp(entry.timestamp);
        let line = format!("[{}] {} {}: {}", timestamp, entry.level, entry.component, entry.message);
        let line = JsValue::from_str(&line);

        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            _ => web_sys::console::log_1(&line),
        }
    }
}

/// Time provider backed by the browser clock.
pub struct BrowserTimeProvider;

impl BrowserTimeProvider {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BrowserTimeProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl TimeProvider for BrowserTimeProvider {
    fn current_timestamp(&self) -> u64 {
        js_sys::Date::now() as u64
    }

    fn format_timestamp(&self, timestamp: u64) -> String {
        format_clock(timestamp)
    }
}
