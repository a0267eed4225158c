//! Small wrapper around stdout/stderr printing for consistent, colored
//! user-facing messages. Colors are enabled only when the stream is a TTY.

use owo_colors::OwoColorize;

use crate::fs_ops::CopySummary;

fn stdout_tty() -> bool {
    atty::is(atty::Stream::Stdout)
}

fn stderr_tty() -> bool {
    atty::is(atty::Stream::Stderr)
}

pub fn print_info(msg: &str) {
    if stdout_tty() {
        println!("{} {}", "info:".cyan().bold(), msg);
    } else {
        println!("info: {}", msg);
    }
}

pub fn print_warn(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "warn:".yellow().bold(), msg);
    } else {
        eprintln!("warn: {}", msg);
    }
}

pub fn print_error(msg: &str) {
    if stderr_tty() {
        eprintln!("{} {}", "error:".red().bold(), msg);
    } else {
        eprintln!("error: {}", msg);
    }
}

/// Print a plain user-facing line (no prefix). Use this for primary outputs
/// such as found file paths, which users may script against.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}

/// Print the end-of-run copy summary; colored as a warning when any item failed.
pub fn print_summary(summary: &CopySummary) {
    let line = format!(
        "Copied {} file(s), {} skipped, {} failed",
        summary.copied, summary.skipped, summary.errors
    );
    if summary.errors > 0 {
        if stdout_tty() {
            println!("{} {}", "done:".yellow().bold(), line);
        } else {
            println!("done: {}", line);
        }
    } else if stdout_tty() {
        println!("{} {}", "done:".green().bold(), line);
    } else {
        println!("done: {}", line);
    }
}
