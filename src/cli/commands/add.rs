use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::{AddOutcome, Reconciler};
use crate::db::log::ttlog_lenient;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::event_type::EventType;
use crate::ui::messages::{success, warning};
use crate::utils::date::parse_date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Add {
        date,
        kind,
        desc,
        office,
    } = cmd
    else {
        return Ok(());
    };

    // validate before opening the store
    let day = parse_date(date)?;
    let kind = EventType::et_from_str(kind).ok_or_else(|| AppError::InvalidEventType(kind.clone()))?;
    let event = Event::new(day, kind, desc, *office);

    let mut pool = super::open_pool(cfg)?;
    let outcome = {
        let mut rec = Reconciler::new(&mut pool).with_initial_preferences(cfg.default_preferences()?);
        rec.add_event(event.clone())?
    };

    match outcome {
        AddOutcome::SkippedHoliday => {
            warning(format!("{} is a holiday: {} not recorded.", event.date_str(), kind));
        }
        AddOutcome::AlreadyPresent(id) => {
            warning(format!(
                "Attendance for {} already recorded (id {id}).",
                event.date_str()
            ));
        }
        other => {
            let id = other.event_id().unwrap_or_default();
            ttlog_lenient(
                &pool.conn,
                "add",
                &event.date_str(),
                &format!("{} {} (id {id})", kind, other.describe()),
            );
            success(format!("{} on {}: {} (id {id}).", kind.label(), event.date_str(), other.describe()));
        }
    }

    Ok(())
}
