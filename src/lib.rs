//! rtotracker library root.
//! Exposes the CLI parser, the high-level `run()` function and the
//! reconciliation/statistics engine behind it.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init { .. } => commands::init::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Add { .. } => commands::add::handle(&cli.command, cfg),
        Commands::Bulk { .. } => commands::bulk::handle(&cli.command, cfg),
        Commands::Defaults { .. } => commands::defaults::handle(&cli.command, cfg),
        Commands::Toggle { .. } => commands::toggle::handle(&cli.command, cfg),
        Commands::Transform { .. } => commands::transform::handle(&cli.command, cfg),
        Commands::Del { .. } => commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => commands::list::handle(&cli.command, cfg),
        Commands::Stats { .. } => commands::stats::handle(&cli.command, cfg),
        Commands::Calendar { .. } => commands::calendar::handle(&cli.command, cfg),
        Commands::Chart { .. } => commands::chart::handle(&cli.command, cfg),
        Commands::Prefs { .. } => commands::prefs::handle(&cli.command, cfg),
        Commands::Holidays { .. } => commands::holidays::handle(&cli.command, cfg),
        Commands::Import { .. } => commands::import::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();
    cli::init_tracing(cli.verbose)?;

    // config is loaded once; in test mode the file is ignored
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    if let Some(custom_db) = &cli.db {
        cfg.database = utils::path::absolutize(custom_db)
            .to_string_lossy()
            .to_string();
    }

    dispatch(&cli, &cfg)
}
