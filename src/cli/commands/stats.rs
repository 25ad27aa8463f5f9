use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::core::stats::calculate_attendance_stats;
use crate::errors::AppResult;
use crate::models::stats::AttendanceStats;
use crate::models::window::QuarterWindow;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_attainment, paint};
use crate::utils::formatting::{bold, format_percent, progress_bar};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Stats { start, end, json } = cmd else {
        return Ok(());
    };

    let window = super::resolve_window(cfg, start.as_deref(), end.as_deref())?;

    let mut pool = super::open_pool(cfg)?;
    let mut rec = Reconciler::new(&mut pool).with_initial_preferences(cfg.default_preferences()?);
    let prefs = rec.preferences()?;
    let events = rec.events_between(&window)?;

    let stats = calculate_attendance_stats(&events, &window, &prefs.target_days);

    if *json {
        println!("{}", serde_json::to_string_pretty(&stats)?);
    } else {
        print_stats(&window, &stats);
    }
    Ok(())
}

fn print_stats(window: &QuarterWindow, s: &AttendanceStats) {
    header(format!("Attendance {window}"));
    println!("In-office days : {}", bold(&s.in_office_count.to_string()));
    println!("Days in window : {}", s.total_days);
    println!("Average        : {}", format_percent(s.average_percent));
    println!(
        "Days per week  : {:.2} (target {})",
        s.average_days_per_week, s.target_days
    );
    let color = color_for_attainment(s.attainment_percent);
    println!(
        "Attainment     : {} {}",
        progress_bar(s.attainment_percent, 20),
        paint(&format_percent(s.attainment_percent), color)
    );
}
