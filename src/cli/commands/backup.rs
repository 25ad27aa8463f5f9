use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::ui::messages::success;
use crate::utils::path::absolutize;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let pool = super::open_pool(cfg)?;
        let dest = absolutize(file);
        ensure_writable(&dest, *force)?;

        let out = BackupLogic::backup(&pool, Path::new(&cfg.database), &dest, *compress)?;
        success(format!("Backup created: {}", out.display()));
    }

    Ok(())
}
