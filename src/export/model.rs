use crate::models::event::Event;
use serde::Serialize;

/// Flat row written by every export format.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct EventExport {
    pub id: i64,
    pub date: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub in_office: String,
}

impl From<&Event> for EventExport {
    fn from(e: &Event) -> Self {
        Self {
            id: e.id,
            date: e.date_str(),
            kind: e.kind.label().to_string(),
            description: e.description.clone(),
            in_office: e.in_office_label().to_string(),
        }
    }
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec!["id", "date", "type", "description", "in_office"]
}
