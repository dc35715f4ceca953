use chrono::NaiveDateTime;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::Path;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub const README_BOILERPLATE: &str =
    "# Useless Private Project\n\nThis is an automatically updated project for daily commits.\n";

pub const NOTES_BOILERPLATE: &str = "# Notes\n\nInitial notes file.\n";

/// Render one notes entry, newline included.
pub fn format_entry(timestamp: NaiveDateTime, message: &str) -> String {
    format!("- {} : {}\n", timestamp.format(TIMESTAMP_FORMAT), message)
}

/// Append `entry` to the file at `path`, creating the file if needed.
pub fn append_entry(path: &Path, entry: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(entry.as_bytes())
}

/// Write `content` to `path` unless a file is already there.
/// Returns whether anything was written.
pub fn write_if_absent(path: &Path, content: &str) -> io::Result<bool> {
    if path.is_file() {
        return Ok(false);
    }
    fs::write(path, content)?;
    Ok(true)
}
