use once_cell::sync::Lazy;
use std::fmt::Arguments;
use std::fs::File;
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;
use std::sync::Mutex;

use super::file_handler;

// Global run log, `None` until initialized (and forever in quiet mode).
static LOGGER: Lazy<Mutex<Option<BufWriter<File>>>> = Lazy::new(|| Mutex::new(None));

/// Points the global logger at `log_file_path`, truncating any previous log.
pub fn init_global_logger(log_file_path: &Path) -> Result<(), IoError> {
    let writer = file_handler::init_log_writer(log_file_path)?;
    let mut logger_guard = LOGGER.lock().expect("Logger mutex poisoned");
    *logger_guard = Some(writer);
    Ok(())
}

/// Writes a verbose message to the global logger.
pub fn log_verbose_message_args(args: Arguments<'_>) {
    write_line("", args);
}

/// Writes a verbose error message to the global logger.
pub fn log_verbose_error_args(args: Arguments<'_>) {
    write_line("ERROR: ", args);
}

fn write_line(prefix: &str, args: Arguments<'_>) {
    if let Ok(mut logger_guard) = LOGGER.lock() {
        if let Some(writer) = logger_guard.as_mut() {
            if writeln!(writer, "{}{}", prefix, args).is_err() {
                eprintln!("Fallback (log write failed): {}{}", prefix, args);
            }
        }
        // Not initialized: verbose output is suppressed.
    } else {
        eprintln!("Fallback (logger mutex error): {}{}", prefix, args);
    }
}

/// Flushes the global logger, if any.
pub fn flush_global_logger() -> Result<(), IoError> {
    match LOGGER.lock() {
        Ok(mut logger_guard) => match logger_guard.as_mut() {
            Some(writer) => writer.flush(),
            None => Ok(()),
        },
        Err(_) => Err(IoError::other("logger mutex poisoned")),
    }
}
