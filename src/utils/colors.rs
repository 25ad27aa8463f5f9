/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

use crate::models::event::Event;
use crate::models::event_type::EventType;

/// Color of an event in lists and in the calendar.
pub fn color_for_event(e: &Event) -> &'static str {
    match e.kind {
        EventType::Holiday => MAGENTA,
        EventType::Vacation => YELLOW,
        EventType::Attendance if e.is_in_office => GREEN,
        EventType::Attendance => CYAN,
    }
}

/// Attainment color: green at or above target, yellow above half, red below.
pub fn color_for_attainment(percent: f64) -> &'static str {
    if percent >= 100.0 {
        GREEN
    } else if percent >= 50.0 {
        YELLOW
    } else {
        RED
    }
}

pub fn paint(s: &str, color: &str) -> String {
    format!("{color}{s}{RESET}")
}
