pub mod config;

pub use config::MonitorConfig;
