use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::load_events_file;
use crate::core::reconciler::Reconciler;
use crate::db::log::ttlog_lenient;
use crate::errors::{AppError, AppResult};
use crate::models::bulk::BulkAddResponse;
use crate::models::event::Event;
use crate::ui::messages::{error, success, warning};
use crate::utils::date::parse_date;
use crate::utils::path::expand_tilde;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Bulk {
        dates,
        file,
        desc,
        json,
    } = cmd
    else {
        return Ok(());
    };

    let mut events: Vec<Event> = dates
        .iter()
        .map(|d| parse_date(d).map(|day| Event::vacation(day, desc)))
        .collect::<AppResult<_>>()?;

    if let Some(f) = file {
        for raw in load_events_file(&expand_tilde(f))? {
            events.push(raw.to_event()?);
        }
    }

    if events.is_empty() {
        return Err(AppError::Validation(
            "no dates given (pass dates or --file)".into(),
        ));
    }

    let mut pool = super::open_pool(cfg)?;
    let response = Reconciler::new(&mut pool).bulk_add_events(&events)?;

    ttlog_lenient(
        &pool.conn,
        "bulk",
        &format!("{} date(s)", events.len()),
        &response.message,
    );

    if *json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        print_response(&response);
    }
    Ok(())
}

fn print_response(r: &BulkAddResponse) {
    let mut table = Table::new(["Date", "Action", "Description"]);
    for item in &r.results {
        let detail = if item.error.is_empty() {
            item.description.clone()
        } else {
            item.error.clone()
        };
        let action = if item.action.is_empty() {
            "Failed".to_string()
        } else {
            item.action.clone()
        };
        table.add_row(vec![item.date.clone(), action, detail]);
    }
    print!("{}", table.render());
    println!();

    if r.failed > 0 {
        error(&r.message);
    } else if r.added + r.updated == 0 {
        warning(&r.message);
    } else {
        success(&r.message);
    }
}
