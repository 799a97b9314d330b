//! Verbose event log for the session layer and the binaries.
//!
//! Off by default. When enabled, lines go to the file set with
//! `init_log_file`, or to stderr if no file was set. The board engine itself
//! never logs.

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

static VERBOSE_LOGGING: AtomicBool = AtomicBool::new(false);

static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Open (and truncate) the log file. Also turns verbose logging on.
pub fn init_log_file(path: impl AsRef<Path>) -> std::io::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;

    if let Ok(mut log_file) = LOG_FILE.lock() {
        *log_file = Some(file);
    }
    enable_verbose_logging();
    Ok(())
}

pub fn write_log(message: &str) {
    let Ok(mut log_file) = LOG_FILE.lock() else {
        return;
    };
    match log_file.as_mut() {
        Some(file) => {
            let _ = writeln!(file, "{message}");
            let _ = file.flush();
        }
        None => eprintln!("{message}"),
    }
}

pub fn enable_verbose_logging() {
    VERBOSE_LOGGING.store(true, Ordering::Relaxed);
}

pub fn disable_verbose_logging() {
    VERBOSE_LOGGING.store(false, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE_LOGGING.load(Ordering::Relaxed)
}

/// Log a formatted line when verbose logging is on
#[macro_export]
macro_rules! vlog {
    ($($arg:tt)*) => {
        if $crate::logging::is_verbose() {
            let message = format!($($arg)*);
            $crate::logging::write_log(&message);
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_verbose() {
        enable_verbose_logging();
        assert!(is_verbose());
        disable_verbose_logging();
        assert!(!is_verbose());
    }
}
