//! Console diagnostics on stderr.
//!
//! Warnings and errors carry a colored severity prefix; hints are indented
//! informational lines that follow a fatal error. None of these functions
//! terminate the process - the caller decides when to halt.

use crate::cli::colors::ColorScheme;

/// Print a warning line: `[WARNING] message`.
pub fn warning(colors: &ColorScheme, message: &str) {
    eprintln!("{} {}", colors.paint(colors.warning(), "[WARNING]"), message);
}

/// Print an error line: `[ERROR] message`.
pub fn error(colors: &ColorScheme, message: &str) {
    eprintln!("{} {}", colors.paint(colors.error(), "[ERROR]"), message);
}

/// Print an indented hint line that follows an error.
pub fn hint(colors: &ColorScheme, message: &str) {
    eprintln!(" {}", colors.paint(colors.info(), &format!("\u{1F6C8} {}", message)));
}
