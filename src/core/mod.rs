pub mod backup;
pub mod calendar;
pub mod chart;
pub mod config;
pub mod holidays;
pub mod import;
pub mod log;
pub mod reconciler;
pub mod stats;
