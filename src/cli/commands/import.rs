use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::{import_events, load_events_file};
use crate::core::reconciler::Reconciler;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let path = expand_tilde(file);
        let raw = load_events_file(&path)?;

        let mut pool = super::open_pool(cfg)?;
        let report = {
            let mut rec =
                Reconciler::new(&mut pool).with_initial_preferences(cfg.default_preferences()?);
            import_events(&mut rec, &raw)?
        };

        let summary = format!(
            "{} inserted, {} updated, {} unchanged, {} skipped (holiday), {} invalid",
            report.inserted,
            report.updated,
            report.unchanged,
            report.skipped_holiday,
            report.invalid.len()
        );
        ttlog_lenient(&pool.conn, "import", &path.to_string_lossy(), &summary);

        success(format!("Import: {summary}."));
        for (date, reason) in &report.invalid {
            warning(format!("{date}: {reason}"));
        }
    }
    Ok(())
}
