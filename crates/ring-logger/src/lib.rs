//! Ring Logger
//!
//! `log` backend for browser apps. Records go to the devtools console on wasm32
//! (stderr elsewhere) and the most recent lines stay available through `recent()`.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use chrono::Utc;
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

static GLOBAL: OnceLock<RingLogger> = OnceLock::new();

/// Logger with a bounded in-memory history
pub struct RingLogger {
    level: LevelFilter,
    capacity: usize,
    buffer: Mutex<VecDeque<String>>,
}

impl RingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            capacity: capacity.max(1),
            buffer: Mutex::new(VecDeque::with_capacity(capacity.max(1))),
        }
    }

    /// Buffered lines, oldest first
    pub fn recent(&self) -> Vec<String> {
        match self.buffer.lock() {
            Ok(buffer) => buffer.iter().cloned().collect(),
            Err(poisoned) => poisoned.into_inner().iter().cloned().collect(),
        }
    }

    fn push(&self, line: String) {
        let mut buffer = match self.buffer.lock() {
            Ok(buffer) => buffer,
            Err(poisoned) => poisoned.into_inner(),
        };
        if buffer.len() == self.capacity {
            buffer.pop_front();
        }
        buffer.push_back(line);
    }
}

impl Log for RingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        emit(record.level(), &line);
        self.push(line);
    }

    fn flush(&self) {}
}

fn format_record(record: &Record) -> String {
    format!(
        "{} [{}] {}: {}",
        Utc::now().format("%H:%M:%S%.3f"),
        record.level(),
        record.target(),
        record.args()
    )
}

#[cfg(target_arch = "wasm32")]
fn emit(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn emit(_level: Level, line: &str) {
    eprintln!("{line}");
}

/// Install the global logger. A second call returns the error from `log`.
pub fn init(level: LevelFilter, capacity: usize) -> Result<&'static RingLogger, SetLoggerError> {
    let logger = GLOBAL.get_or_init(|| RingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(logger)
}

/// Lines buffered by the global logger (empty before `init`)
pub fn recent() -> Vec<String> {
    GLOBAL.get().map(RingLogger::recent).unwrap_or_default()
}
