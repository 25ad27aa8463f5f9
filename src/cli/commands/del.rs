use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Del { id, yes } = cmd else {
        return Ok(());
    };

    let mut pool = super::open_pool(cfg)?;
    let deleted = {
        let mut rec = Reconciler::new(&mut pool);
        // holidays and attendance are rejected before any prompt
        let event = rec.deletable_event(*id)?;

        if !*yes {
            let prompt = format!(
                "Delete {} #{} on {} ({})? This action is irreversible.",
                event.kind,
                event.id,
                event.date_str(),
                event.description
            );
            if !ask_confirmation(&prompt) {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        rec.delete_event(event.id)?
    };

    ttlog_lenient(
        &pool.conn,
        "del",
        &deleted.date_str(),
        &format!("Deleted vacation #{} ({})", deleted.id, deleted.description),
    );
    success(format!(
        "Vacation #{} on {} has been deleted.",
        deleted.id,
        deleted.date_str()
    ));
    Ok(())
}
