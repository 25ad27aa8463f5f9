use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::holidays::{load_holidays_file, seed_holidays};
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Holidays { file } = cmd {
        let path = expand_tilde(file);
        let raw = load_holidays_file(&path)?;

        let mut pool = super::open_pool(cfg)?;
        let report = seed_holidays(&mut pool, &raw)?;

        ttlog_lenient(
            &pool.conn,
            "holidays",
            &path.to_string_lossy(),
            &format!(
                "{} inserted, {} converted, {} skipped, {} invalid",
                report.inserted, report.converted, report.skipped, report.invalid
            ),
        );

        success(format!(
            "Holidays: {} inserted, {} already present.",
            report.inserted, report.skipped
        ));
        if report.converted > 0 {
            success(format!(
                "{} attendance day(s) converted to vacation.",
                report.converted
            ));
        }
        if report.invalid > 0 {
            warning(format!("{} invalid entr(ies) ignored.", report.invalid));
        }
        if report.over_attendance > 0 {
            warning(format!(
                "{} holiday(s) fall on a day with recorded attendance; that attendance still counts.",
                report.over_attendance
            ));
        }
    }
    Ok(())
}
