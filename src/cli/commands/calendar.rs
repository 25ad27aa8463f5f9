use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{build_month_grid, populate_month_grid};
use crate::errors::AppResult;
use crate::models::calendar_day::{CalendarDay, MonthGrid};
use crate::store::EventStore;
use crate::utils::colors::{GREY, RESET, color_for_event, paint};
use crate::utils::date::{first_of_month, last_of_month, month_name, parse_month, today};
use crate::utils::formatting::{bold, event_marker};
use chrono::{Datelike, NaiveDate};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Calendar { month } = cmd else {
        return Ok(());
    };

    let now = today();
    let target = match month {
        Some(m) => parse_month(m)?,
        None => first_of_month(&now),
    };

    let mut grid = build_month_grid(target);

    let pool = super::open_pool(cfg)?;
    let (start, end) = grid_bounds(&grid).unwrap_or((target, last_of_month(&target)));
    let events = pool.events_between(start, end)?;
    populate_month_grid(&mut grid, &events, now);

    print_grid(target, &grid);
    Ok(())
}

fn grid_bounds(grid: &MonthGrid) -> Option<(NaiveDate, NaiveDate)> {
    let first = grid.first()?.first()?.date;
    let last = grid.last()?.last()?.date;
    Some((first, last))
}

fn print_grid(month: NaiveDate, grid: &MonthGrid) {
    println!(
        "\n{}\n",
        bold(&format!("{} {}", month_name(month.month()), month.year()))
    );
    println!(" Sun  Mon  Tue  Wed  Thu  Fri  Sat");

    for row in grid {
        let line: String = row.iter().map(render_cell).collect();
        println!("{line}");
    }
    println!(
        "\n{}",
        paint("O in office  R remote  V vacation  H holiday  * today", GREY)
    );
}

fn render_cell(day: &CalendarDay) -> String {
    let marker = day.events.first().map(event_marker).unwrap_or(" ");
    let today = if day.today { "*" } else { " " };
    let text = format!("{:>2}{}{}", day.date.day(), marker, today);

    if !day.in_month {
        return format!(" {GREY}{text}{RESET}");
    }
    match day.events.first() {
        Some(e) => format!(" {}", paint(&text, color_for_event(e))),
        None if day.is_weekend => format!(" {GREY}{text}{RESET}"),
        None => format!(" {text}"),
    }
}
