use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();
static WARNED: AtomicBool = AtomicBool::new(false);

pub struct Logger {
    prefix: Option<String>,
    muted: AtomicBool,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self {
            prefix,
            muted: AtomicBool::new(false),
        }
    }

    pub fn log(&self, file: &str, line: u32, message: &str) {
        if self.muted.load(Ordering::Relaxed) {
            return;
        }
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S%.3f");
        let file_name = file.rsplit(['/', '\\']).next().unwrap_or(file);
        match &self.prefix {
            Some(prefix) => println!("[{}][{}][{}:{}] {}", timestamp, prefix, file_name, line, message),
            None => println!("[{}][{}:{}] {}", timestamp, file_name, line, message),
        }
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

/// Suppresses output after initialization; headless runs only want their summary line.
pub fn set_muted(muted: bool) {
    if let Some(logger) = LOGGER.get() {
        logger.muted.store(muted, Ordering::Relaxed);
    }
}

pub fn log(file: &str, line: u32, message: &str) {
    match LOGGER.get() {
        Some(logger) => logger.log(file, line, message),
        // Engine code runs inside unit tests without a logger; stay quiet there.
        None if cfg!(test) => {}
        None => {
            if first_uninitialized_call() {
                eprintln!("Logger not initialized! Call init_logger() first.");
            }
        }
    }
}

fn first_uninitialized_call() -> bool {
    !WARNED.swap(true, Ordering::Relaxed)
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        $crate::logger::log(file!(), line!(), &format!($($arg)*))
    };
}
