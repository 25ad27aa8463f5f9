use crate::errors::{AppError, AppResult};
use crate::models::preferences::{DEFAULT_DAYS, DEFAULT_TARGET_DAYS, Preferences};
use crate::models::window::QuarterWindow;
use crate::utils::date::parse_date;
use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const APP_DIR: &str = ".rtotracker";
const CONFIG_FILE: &str = "rtotracker.conf";
const DB_FILE: &str = "rtotracker.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    /// Seed for the preferences record on first use.
    #[serde(default = "default_days")]
    pub default_days: String,
    #[serde(default = "default_target_days")]
    pub target_days: String,
    /// Reporting window; Oct 1 – Dec 31 of the current year when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter_start: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quarter_end: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub holidays_file: Option<String>,
}

fn default_days() -> String {
    DEFAULT_DAYS.to_string()
}
fn default_target_days() -> String {
    DEFAULT_TARGET_DAYS.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            default_days: default_days(),
            target_days: default_target_days(),
            quarter_start: None,
            quarter_end: None,
            holidays_file: None,
        }
    }
}

impl Config {
    /// `~/.rtotracker`, or `./.rtotracker` when no home directory is known.
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DB_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| {
            warn!(path = %path.display(), error = %e, "cannot read config file");
            AppError::ConfigLoad
        })?;
        Ok(serde_yaml::from_str(&content)?)
    }

    /// Create the config directory, the config file (unless `is_test`) and
    /// an empty database file. Returns the database path.
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join(DB_FILE),
        };

        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }

        if !is_test {
            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };
            config.save()?;
        }

        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        Ok(db_path)
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Reporting window: configured bounds, falling back to
    /// Oct 1 / Dec 31 of `today`'s year for any missing bound.
    pub fn quarter_window(&self, today: NaiveDate) -> AppResult<QuarterWindow> {
        let fallback = QuarterWindow::default_for_year(today.year())?;
        let start = match &self.quarter_start {
            Some(s) => parse_date(s)?,
            None => fallback.start,
        };
        let end = match &self.quarter_end {
            Some(s) => parse_date(s)?,
            None => fallback.end,
        };
        QuarterWindow::new(start, end)
    }

    /// Preferences used when the record does not exist yet.
    pub fn default_preferences(&self) -> AppResult<Preferences> {
        Preferences::validated(&self.default_days, &self.target_days)
    }
}
