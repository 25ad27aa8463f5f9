use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::models::preferences::Preferences;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Prefs {
        print,
        days,
        target,
    } = cmd
    else {
        return Ok(());
    };

    let mut pool = super::open_pool(cfg)?;
    let mut rec = Reconciler::new(&mut pool).with_initial_preferences(cfg.default_preferences()?);
    let current = rec.preferences()?;

    if days.is_none() && target.is_none() {
        print_prefs(&current);
        return Ok(());
    }

    let new_days = days.as_deref().unwrap_or(&current.default_days);
    let new_target = target.as_deref().unwrap_or(&current.target_days);
    let updated = rec.update_preferences(new_days, new_target)?;
    drop(rec);

    ttlog_lenient(
        &pool.conn,
        "prefs",
        "",
        &format!(
            "default days {} | target {}",
            updated.default_days, updated.target_days
        ),
    );
    success("Preferences updated.");
    if *print {
        print_prefs(&updated);
    }
    Ok(())
}

fn print_prefs(p: &Preferences) {
    println!("Default office days : {}", p.default_days);
    println!("Target days/week    : {}", p.target_days);
}
