use crate::errors::{AppError, AppResult};
use crate::utils::date::{WEEKDAY_ABBREVIATIONS, weekday_abbrev};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Tuesday through Friday.
pub const DEFAULT_DAYS: &str = "T,W,Th,F";
pub const DEFAULT_TARGET_DAYS: &str = "2.5";

/// Used whenever `target_days` cannot be parsed.
pub const FALLBACK_TARGET_DAYS: f64 = 2.5;

/// The single preferences record.
///
/// Both fields keep the raw user text (as stored in the DB); parsing
/// happens on use so that a malformed legacy value never blocks reads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub default_days: String, // e.g. "M,T,W,Th,F"
    pub target_days: String,  // e.g. "2.5"
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            default_days: DEFAULT_DAYS.to_string(),
            target_days: DEFAULT_TARGET_DAYS.to_string(),
        }
    }
}

impl Preferences {
    /// Build a record from user input, rejecting unknown weekday tokens and
    /// non-numeric or negative targets.
    ///
    /// Tokens are re-written in canonical casing (`th` → `Th`) and
    /// de-duplicated, keeping the first occurrence order.
    pub fn validated(default_days: &str, target_days: &str) -> AppResult<Self> {
        let mut canonical: Vec<&'static str> = Vec::new();

        for raw in default_days.split(',') {
            let token = raw.trim();
            if token.is_empty() {
                continue;
            }
            let abbrev = canonical_weekday_token(token)
                .ok_or_else(|| AppError::InvalidWeekday(token.to_string()))?;
            if !canonical.contains(&abbrev) {
                canonical.push(abbrev);
            }
        }

        let target = target_days.trim();
        let value: f64 = target.parse().map_err(|_| {
            AppError::Validation(format!("target days must be a decimal number, got '{target}'"))
        })?;
        if !value.is_finite() || value < 0.0 {
            return Err(AppError::Validation(format!(
                "target days must be a non-negative number, got '{target}'"
            )));
        }

        Ok(Self {
            default_days: canonical.join(","),
            target_days: target.to_string(),
        })
    }

    /// Membership set of lowercase weekday abbreviations.
    pub fn default_day_set(&self) -> HashSet<String> {
        self.default_days
            .split(',')
            .map(|d| d.trim().to_lowercase())
            .filter(|d| !d.is_empty())
            .collect()
    }

    pub fn is_default_office_day(&self, weekday: Weekday) -> bool {
        self.default_day_set()
            .contains(&weekday_abbrev(weekday).to_lowercase())
    }

    /// Parsed target, falling back to [`FALLBACK_TARGET_DAYS`].
    pub fn target_days_value(&self) -> f64 {
        parse_target_days(&self.target_days)
    }
}

pub fn parse_target_days(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(FALLBACK_TARGET_DAYS)
}

fn canonical_weekday_token(token: &str) -> Option<&'static str> {
    let lower = token.to_lowercase();
    WEEKDAY_ABBREVIATIONS
        .iter()
        .copied()
        .find(|abbrev| abbrev.to_lowercase() == lower)
}
