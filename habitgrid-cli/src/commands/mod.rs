pub mod browse;
pub mod config;
pub mod show;
pub mod stats;
pub mod toggle;
