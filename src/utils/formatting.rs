//! Formatting utilities used for CLI outputs.

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn format_percent(v: f64) -> String {
    format!("{v:.2}%")
}

/// Fixed-width progress bar, capped at 100 %.
pub fn progress_bar(percent: f64, width: usize) -> String {
    let filled = ((percent.clamp(0.0, 100.0) / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "█".repeat(filled), "·".repeat(width - filled))
}

/// One-letter marker used in compact views (calendar cells, chart rows).
pub fn event_marker(e: &crate::models::event::Event) -> &'static str {
    use crate::models::event_type::EventType;
    match e.kind {
        EventType::Holiday => "H",
        EventType::Vacation => "V",
        EventType::Attendance if e.is_in_office => "O",
        EventType::Attendance => "R",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn progress_bar_is_capped() {
        assert_eq!(progress_bar(250.0, 4), "[████]");
        assert_eq!(progress_bar(50.0, 4), "[██··]");
        assert_eq!(progress_bar(-3.0, 2), "[··]");
    }
}
