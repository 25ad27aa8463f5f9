use serde::Serialize;

/// What happened to one date of a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BulkAction {
    Added,
    Updated,
    Transformed,
    Skipped,
    Failed,
}

impl BulkAction {
    pub fn label(&self) -> &'static str {
        match self {
            BulkAction::Added => "Added new vacation",
            BulkAction::Updated => "Updated existing vacation",
            BulkAction::Transformed => "Transformed attendance to vacation",
            BulkAction::Skipped => "Skipped (Holiday exists)",
            BulkAction::Failed => "",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkAddResult {
    pub date: String,
    pub action: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub error: String,
}

/// Aggregate outcome of a bulk vacation import.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BulkAddResponse {
    pub success: bool,
    pub added: usize,
    pub updated: usize,
    pub skipped: usize,
    pub failed: usize,
    pub message: String,
    pub results: Vec<BulkAddResult>,
}

impl BulkAddResponse {
    pub fn failed_dates(&self) -> Vec<&str> {
        self.results
            .iter()
            .filter(|r| !r.error.is_empty())
            .map(|r| r.date.as_str())
            .collect()
    }
}
