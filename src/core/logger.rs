use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

static LOG_FILE: Lazy<Mutex<Option<File>>> = Lazy::new(|| Mutex::new(None));
static CONSOLE: AtomicBool = AtomicBool::new(true);

static CONSOLE_LOGGER: ConsoleLogger = ConsoleLogger;
struct ConsoleLogger;
impl log::Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!("[{}] [{}] {}",
            record.target(),
            record.level(),
            record.args()
        );

        if CONSOLE.load(Ordering::Relaxed) {
            println!("{}", line);
        }

        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = writeln!(file, "{}", line);
            }
        }
    }

    fn flush(&self) {
        _ = io::stdout().flush();
        if let Ok(mut guard) = LOG_FILE.lock() {
            if let Some(file) = guard.as_mut() {
                _ = file.flush();
            }
        }
    }
}

static NULL_LOGGER: NullLogger = NullLogger;
struct NullLogger;
impl log::Log for NullLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        false
    }
    fn log(&self, _: &Record) {}
    fn flush(&self) {}
}

/// Installs the console logger, optionally mirroring every record into
/// `file` (opened in append mode).
///
/// Only the first logger installed in a process sticks; later calls still
/// update the level and the file sink.
pub fn setup(level: LevelFilter, file: Option<&str>) {
    CONSOLE.store(true, Ordering::Relaxed);

    let sink = file.and_then(|path| {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| eprintln!("Opening log file {} error: {e}", path))
            .ok()
    });
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = sink;
    }

    _ = log::set_logger(&CONSOLE_LOGGER);
    log::set_max_level(level);
}

/// Stops echoing records to stdout; the file sink, if any, keeps receiving them.
pub fn revert_console_output() {
    CONSOLE.store(false, Ordering::Relaxed);
}

pub fn teardown() {
    log::logger().flush();
    if let Ok(mut guard) = LOG_FILE.lock() {
        *guard = None;
    }
    _ = log::set_logger(&NULL_LOGGER);
    log::set_max_level(LevelFilter::Off);
}
