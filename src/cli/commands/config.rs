use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        let path = Config::config_file();
        let path_str = path.to_string_lossy().to_string();

        if *print_config {
            info(format!("Configuration file: {path_str}\n"));
            if path.exists() {
                ConfigLogic::print(&path_str)?;
            } else {
                warning("No configuration file, showing defaults:");
                println!("{}", serde_yaml::to_string(cfg)?);
            }
        }

        if *edit_config {
            if !path.exists() {
                cfg.save()?;
            }
            ConfigLogic::edit(&path_str, editor.as_deref())?;
            success("Configuration file edited.");
        }
    }

    Ok(())
}
