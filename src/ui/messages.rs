//! User-facing console messages. Diagnostics go through `tracing` instead.

use std::fmt;
use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn style(self) -> (&'static str, &'static str) {
        match self {
            Level::Info => ("\x1b[34m", "ℹ️"),
            Level::Success => ("\x1b[32m", "✅"),
            Level::Warning => ("\x1b[33m", "⚠️"),
            Level::Error => ("\x1b[31m", "❌"),
        }
    }
}

/// Colour only when writing to a terminal and `NO_COLOR` is unset.
fn use_color(stderr: bool) -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if stderr {
        std::io::stderr().is_terminal()
    } else {
        std::io::stdout().is_terminal()
    }
}

fn render(level: Level, msg: &dyn fmt::Display, stderr: bool) -> String {
    let (color, icon) = level.style();
    if use_color(stderr) {
        format!("{color}{BOLD}{icon}{RESET} {msg}")
    } else {
        format!("{icon} {msg}")
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Info, &msg, false));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Success, &msg, false));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", render(Level::Warning, &msg, false));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", render(Level::Error, &msg, true));
}

/// Section title followed by an underline of the same width.
pub fn header<T: fmt::Display>(msg: T) {
    let title = msg.to_string();
    let rule = "═".repeat(title.chars().count());
    if use_color(false) {
        println!("\n{BOLD}{title}{RESET}\n{rule}");
    } else {
        println!("\n{title}\n{rule}");
    }
}
