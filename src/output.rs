//! Terminal summary formatting.
//!
//! One right-aligned count per line, width sized to the largest count
//! (`total` is always the largest since every other counter is a subset of
//! it). `examined` and `converted` always print; the remaining categories
//! only when nonzero:
//!
//! ```text
//! 128 images examined
//!  97 images converted
//!  12 images already correct
//!  17 images unsuitable
//!   2 errors
//! ```
//!
//! The format function is pure (returns `Vec<String>`, no I/O) so tests can
//! assert on exact lines; `print_summary` is the stdout wrapper.

use crate::process::RunSummary;

/// Render the summary as aligned lines.
pub fn format_summary(summary: &RunSummary) -> Vec<String> {
    let width = summary.total.to_string().len();
    let mut lines = vec![
        format!("{:>width$} images examined", summary.total),
        format!("{:>width$} images converted", summary.converted),
    ];
    if summary.already_correct > 0 {
        lines.push(format!(
            "{:>width$} images already correct",
            summary.already_correct
        ));
    }
    if summary.unsuitable > 0 {
        lines.push(format!("{:>width$} images unsuitable", summary.unsuitable));
    }
    if summary.half > 0 {
        lines.push(format!("{:>width$} images half suitable", summary.half));
    }
    if summary.errors > 0 {
        lines.push(format!("{:>width$} errors", summary.errors));
    }
    lines
}

/// Print the summary to stdout.
pub fn print_summary(summary: &RunSummary) {
    for line in format_summary(summary) {
        println!("{line}");
    }
}
