pub mod add;
pub mod backup;
pub mod classifier;
pub mod config;
pub mod log;
pub mod report;
