use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Defaults { start, end } = cmd {
        let window = super::resolve_window(cfg, start.as_deref(), end.as_deref())?;

        let mut pool = super::open_pool(cfg)?;
        let added = Reconciler::new(&mut pool)
            .with_initial_preferences(cfg.default_preferences()?)
            .add_default_days(&window)?;

        if added == 0 {
            info(format!("Every weekday in {window} already has an event."));
            return Ok(());
        }

        ttlog_lenient(
            &pool.conn,
            "defaults",
            &window.to_string(),
            &format!("Added {added} default attendance day(s)"),
        );
        success(format!("Added {added} attendance day(s) in {window}."));
    }
    Ok(())
}
