pub mod aggregates;
pub mod value_objects;

pub use aggregates::MonitorConfig;
pub use value_objects::{BaselinePolicy, GlobPattern, RuleSet, Schedule};
