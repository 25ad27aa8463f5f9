use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::path::absolutize;
use tracing::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        range,
        force,
    } = cmd
    {
        let pool = super::open_pool(cfg)?;
        let out = absolutize(file).to_string_lossy().to_string();
        let n = ExportLogic::export(&pool, *format, &out, range.as_deref(), *force)?;
        info!(count = n, format = format.as_str(), "export finished");
    }
    Ok(())
}
