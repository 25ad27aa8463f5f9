use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::{AttendanceStatus, Reconciler};
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::date::{format_date, parse_date};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Toggle { date } = cmd {
        let day = parse_date(date)?;

        let mut pool = super::open_pool(cfg)?;
        let status = Reconciler::new(&mut pool).toggle_attendance(day)?;

        ttlog_lenient(
            &pool.conn,
            "toggle",
            &format_date(&day),
            &format!("Attendance is now {}", status.as_str()),
        );

        let label = match status {
            AttendanceStatus::InOffice => "in office",
            AttendanceStatus::Remote => "remote",
        };
        success(format!("{} is now {label} ({}).", format_date(&day), status.as_str()));
    }
    Ok(())
}
