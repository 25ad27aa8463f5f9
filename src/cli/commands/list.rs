use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::store::EventStore;
use crate::ui::messages::info;
use crate::utils::colors::{color_for_event, paint};
use crate::utils::date::parse_period;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::List { period, kind } = cmd else {
        return Ok(());
    };

    let kind = kind
        .as_deref()
        .map(|k| EventType::et_from_str(k).ok_or_else(|| AppError::InvalidEventType(k.into())))
        .transpose()?;
    let bounds = match period.as_deref() {
        None | Some("all") => None,
        Some(p) => Some(parse_period(p)?),
    };

    let pool = super::open_pool(cfg)?;

    let mut events: Vec<Event> = match (bounds, kind) {
        (Some((start, end)), _) => pool.events_between(start, end)?,
        (None, Some(k)) => pool.events_by_type(k)?,
        (None, None) => pool.all_events()?,
    };
    if let Some(k) = kind {
        events.retain(|e| e.kind == k);
    }

    if events.is_empty() {
        info("No events found.");
        return Ok(());
    }

    print!("{}", render_events(&events));
    println!("\n{} event(s)", events.len());
    Ok(())
}

fn render_events(events: &[Event]) -> String {
    let mut table = Table::new(["ID", "Date", "Type", "In Office", "Description"]);
    for e in events {
        table.add_row(vec![
            e.id.to_string(),
            e.date_str(),
            paint(e.kind.label(), color_for_event(e)),
            e.in_office_label().to_string(),
            e.description.clone(),
        ]);
    }
    table.render()
}
