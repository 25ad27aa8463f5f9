use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::holidays::{load_holidays_file, seed_holidays};
use crate::core::reconciler::Reconciler;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_lenient;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::path::expand_tilde;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped with `--test`)
///  - the SQLite database and all pending migrations
///  - the preferences record
///  - holidays, when a file is given or configured
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let Commands::Init { holidays } = &cli.command else {
        return Ok(());
    };

    // `--db` has already been made absolute in cfg.database
    let custom_db = cli.db.as_ref().map(|_| cfg.database.clone());
    let db_path = Config::init_all(custom_db, cli.test)?;
    let db_str = db_path.to_string_lossy().to_string();

    info("Initializing rtotracker…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗄️  Database   : {}", db_str);

    let mut pool = DbPool::new(&db_str)?;
    init_db(&pool.conn)?;

    let prefs = {
        let defaults = cfg.default_preferences()?;
        let mut rec = Reconciler::new(&mut pool).with_initial_preferences(defaults);
        rec.preferences()?
    };
    println!(
        "⚙️  Preferences: default days {} | target {} days/week",
        prefs.default_days, prefs.target_days
    );

    ttlog_lenient(
        &pool.conn,
        "init",
        "Database initialized",
        &format!("Database initialized at {db_str}"),
    );

    let holidays_file = holidays.clone().or_else(|| cfg.holidays_file.clone());
    if let Some(file) = holidays_file {
        let path = expand_tilde(&file);
        match load_holidays_file(&path) {
            Ok(raw) => {
                let report = seed_holidays(&mut pool, &raw)?;
                success(format!(
                    "Holidays: {} inserted, {} already present, {} invalid",
                    report.inserted, report.skipped, report.invalid
                ));
                if report.over_attendance > 0 {
                    warning(format!(
                        "{} holiday(s) fall on a day with recorded attendance.",
                        report.over_attendance
                    ));
                }
                ttlog_lenient(
                    &pool.conn,
                    "holidays",
                    &path.to_string_lossy(),
                    &format!("Seeded {} holiday(s) at init", report.inserted),
                );
            }
            Err(e) => warning(format!("Holidays not loaded from {}: {e}", path.display())),
        }
    }

    success("rtotracker initialization completed!");
    Ok(())
}
