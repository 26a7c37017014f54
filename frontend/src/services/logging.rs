use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Component-scoped logging to the browser console
pub struct Logger;

impl Logger {
    pub fn debug_with_component(component: &str, message: &str) {
        Self::log(Level::Debug, component, message);
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::log(Level::Info, component, message);
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::log(Level::Warn, component, message);
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::log(Level::Error, component, message);
    }

    fn log(level: Level, component: &str, message: &str) {
        if level > log::max_level() {
            return;
        }
        write_console(level, &format!("[{}] {}", component, message));
    }
}

fn write_console(level: Level, line: &str) {
    match level {
        Level::Error => console::error!(line),
        Level::Warn => console::warn!(line),
        Level::Info => console::info!(line),
        Level::Debug | Level::Trace => console::debug!(line),
    }
}

/// Routes `log` records (from `shared`) to the console
struct ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let component = record
            .module_path()
            .and_then(|path| path.rsplit("::").next())
            .unwrap_or_else(|| record.target());
        write_console(record.level(), &format!("[{}] {}", component, record.args()));
    }

    fn flush(&self) {}
}

static LOGGER: ConsoleLogger = ConsoleLogger;

/// Installs the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}
