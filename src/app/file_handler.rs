//! File system helpers for the application layer: validating the edge list
//! path, writing the path listing and opening the run log.

use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Error as IoError, Write};
use std::path::Path;

use super::error::AppError;
use super::verbose_eprintln;

/// Checks that `edge_file` exists, is a regular file and has a UTF-8 path.
///
/// # Errors
/// Returns `AppError::General` if the path is missing or not a file, and
/// `AppError::InvalidPath` if it cannot be represented as UTF-8.
pub fn validate_edge_file(edge_file: &Path, quiet_mode: bool) -> Result<(), AppError> {
    if !edge_file.exists() {
        let error_msg = format!("File not found: {}", edge_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if !edge_file.is_file() {
        let error_msg = format!("Path is not a file: {}", edge_file.display());
        verbose_eprintln!(quiet_mode, "Input Error: {}", error_msg);
        return Err(AppError::General(error_msg));
    }
    if edge_file.to_str().is_none() {
        verbose_eprintln!(quiet_mode, "Input Error: non UTF-8 path {}", edge_file.display());
        return Err(AppError::InvalidPath(edge_file.display().to_string()));
    }
    Ok(())
}

/// Writes one line per entry to `file_path`, creating or truncating it.
///
/// The writer is flushed before returning so the caller sees the complete
/// file immediately.
pub fn write_lines_to_file(file_path: &Path, lines: &[String]) -> Result<(), IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{}", line)?;
    }
    writer.flush()?;
    Ok(())
}

/// Opens the run log, truncating output from earlier runs.
pub fn init_log_writer(file_path: &Path) -> Result<BufWriter<File>, IoError> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(file_path)?;
    Ok(BufWriter::new(file))
}
