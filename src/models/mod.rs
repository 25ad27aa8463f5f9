pub mod bulk;
pub mod calendar_day;
pub mod chart;
pub mod event;
pub mod event_type;
pub mod preferences;
pub mod stats;
pub mod window;
