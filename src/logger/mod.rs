use colored::*;
use log::{error, info, warn};

/// Print a success message with a green checkmark
pub fn success(msg: &str) {
    info!("{} {}", "✓".green(), msg);
}

/// Print an info message with a blue info symbol
pub fn info(msg: &str) {
    info!("{} {}", "ℹ".blue(), msg);
}

/// Print a warning message with a yellow warning symbol
pub fn warning(msg: &str) {
    warn!("{} {}", "⚠".yellow(), msg);
}

/// Print an error message with a red X
pub fn error(msg: &str) {
    error!("{} {}", "✗".red(), msg);
}

/// Print a progress message with a blue arrow
pub fn progress(msg: &str) {
    info!("{} {}", "→".blue(), msg);
}

/// Echo an external command line before it runs
pub fn command(line: &str) {
    info!("{} {}", ">".dimmed(), line);
}
