pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod prefs;
pub mod queries;
pub mod stats;
pub mod store;
