use crate::db::pool::DbPool;
use crate::db::prefs::load_preferences;
use crate::db::queries::count_events_by_type;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::OptionalExtension;
use std::fs;

pub fn print_db_info(pool: &DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) EVENTS PER TYPE
    //
    let per_type = count_events_by_type(&pool.conn)?;
    let total: i64 = per_type.iter().map(|(_, n)| n).sum();

    println!(
        "{}• Total events:{} {}{}{}",
        CYAN, RESET, GREEN, total, RESET
    );
    for (kind, n) in &per_type {
        println!("    {:<11} {}", kind, n);
    }

    //
    // 3) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = pool
        .conn
        .query_row("SELECT MIN(date), MAX(date) FROM events", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let fmt_first = first_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = last_date.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) PREFERENCES
    //
    match load_preferences(&pool.conn)? {
        Some(p) => println!(
            "{}• Preferences:{} default days {} | target {} days/week",
            CYAN, RESET, p.default_days, p.target_days
        ),
        None => println!("{}• Preferences:{} {GREY}not set{RESET}", CYAN, RESET),
    }

    println!();
    Ok(())
}
