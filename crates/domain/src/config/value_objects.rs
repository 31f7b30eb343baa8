pub mod baseline_policy;
pub mod glob_pattern;
pub mod rule_set;
pub mod schedule;

pub use baseline_policy::BaselinePolicy;
pub use glob_pattern::GlobPattern;
pub use rule_set::RuleSet;
pub use schedule::Schedule;
