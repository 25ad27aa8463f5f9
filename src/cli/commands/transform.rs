use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::reconciler::Reconciler;
use crate::db::log::ttlog_lenient;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Transform { id } = cmd {
        let mut pool = super::open_pool(cfg)?;
        let attendance_id = Reconciler::new(&mut pool).transform_vacation_to_remote(*id)?;

        ttlog_lenient(
            &pool.conn,
            "transform",
            &id.to_string(),
            &format!("Vacation {id} became remote day {attendance_id}"),
        );
        success(format!(
            "Vacation #{id} is now a remote day (event #{attendance_id})."
        ));
    }
    Ok(())
}
