use crate::errors::AppResult;
use crate::export::{EventExport, notify_export_success};
use crate::ui::messages::info;
use chrono::Local;
use std::fs;
use std::path::Path;

/// Render events as a Markdown table preceded by a small header.
pub(crate) fn render_markdown(events: &[EventExport], title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {title}\n\n"));
    out.push_str(&format!(
        "Exported on {}\n\n",
        Local::now().format("%Y-%m-%d %H:%M:%S")
    ));
    out.push_str("| Date | Type | Description | In Office |\n");
    out.push_str("|------|------|-------------|-----------|\n");

    for e in events {
        out.push_str(&format!(
            "| {} | {} | {} | {} |\n",
            e.date,
            e.kind,
            escape_cell(&e.description),
            e.in_office
        ));
    }
    out
}

pub(crate) fn export_markdown(events: &[EventExport], path: &Path, title: &str) -> AppResult<()> {
    info(format!("Exporting to Markdown: {}", path.display()));
    fs::write(path, render_markdown(events, title))?;
    notify_export_success("Markdown", path);
    Ok(())
}

fn escape_cell(s: &str) -> String {
    s.replace('|', "\\|").replace('\n', " ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pipes_in_descriptions_are_escaped() {
        let rows = vec![EventExport {
            id: 1,
            date: "2024-10-01".into(),
            kind: "Vacation".into(),
            description: "trip | beach".into(),
            in_office: "N/A".into(),
        }];
        let md = render_markdown(&rows, "Events");
        assert!(md.contains("| 2024-10-01 | Vacation | trip \\| beach | N/A |"));
        assert!(md.starts_with("# Events\n"));
    }
}
