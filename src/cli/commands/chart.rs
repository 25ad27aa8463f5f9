use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::chart::build_chart_response;
use crate::core::reconciler::Reconciler;
use crate::errors::AppResult;
use crate::models::chart::ChartResponse;
use crate::ui::messages::header;
use crate::utils::colors::{GREEN, GREY, paint};

const BAR_SCALE: f64 = 10.0; // columns per day/week

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Chart { start, end, json } = cmd else {
        return Ok(());
    };

    let window = super::resolve_window(cfg, start.as_deref(), end.as_deref())?;

    let mut pool = super::open_pool(cfg)?;
    let mut rec = Reconciler::new(&mut pool).with_initial_preferences(cfg.default_preferences()?);
    let prefs = rec.preferences()?;
    let events = rec.events_between(&window)?;

    let chart = build_chart_response(&events, &window, &prefs.target_days);

    if *json {
        println!("{}", serde_json::to_string_pretty(&chart)?);
    } else {
        header(format!("Days/week trend {window}"));
        print_chart(&chart);
    }
    Ok(())
}

/// One line per in-office day; the `|` marks the target.
fn print_chart(chart: &ChartResponse) {
    let target_col = (chart.target_days * BAR_SCALE).round() as usize;

    for p in chart.data.iter().filter(|p| p.comes_in) {
        let len = (p.running_total * BAR_SCALE).round() as usize;
        let mut bar = "█".repeat(len);
        if len < target_col {
            bar.push_str(&" ".repeat(target_col - len));
            bar.push('|');
        }
        println!("{}  {} {:.2}", p.date, paint(&bar, GREEN), p.running_total);
    }

    let last = chart.data.last().map(|p| p.running_total).unwrap_or(0.0);
    println!(
        "\n{}",
        paint(
            &format!("final {:.2} days/week, target {}", last, chart.target_days),
            GREY
        )
    );
}
