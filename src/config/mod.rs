//! Configuration loading from TOML files.

mod logging;
mod settings;

pub use logging::LoggingConfig;
pub use settings::{AwsConfig, ClusterSelector, Config, RetentionConfig, ScheduleConfig};
