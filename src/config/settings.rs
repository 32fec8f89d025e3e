//! Application configuration loading and validation.
//!
//! Configuration is loaded from a TOML file into an immutable [`Config`]
//! that is passed into the application; core logic never reads ambient
//! state. Validation happens at load time so every later conversion
//! (`schedule`, `cluster_selector`) is infallible in practice.

use std::fs;
use std::path::Path;

use chrono::{Month, Weekday};
use serde::Deserialize;

use super::logging::LoggingConfig;
use crate::domain::{ClusterId, RetentionRule, Schedule, Trigger};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Cluster selector: the literal `"ALL"` to discover every cluster,
    /// or a comma-joined list of cluster identifiers.
    pub clusters: String,

    pub retention: RetentionConfig,
    pub schedule: ScheduleConfig,

    #[serde(default)]
    pub logging: LoggingConfig,

    /// Live store overrides; ignored by simulated runs.
    #[serde(default)]
    pub aws: AwsConfig,
}

/// Per-tier retention counts. Zero disables a tier and purges its
/// snapshots.
#[derive(Debug, Deserialize)]
pub struct RetentionConfig {
    pub yearly: u32,
    pub monthly: u32,
    pub weekly: u32,
}

/// Trigger-day settings, as names and day numbers.
#[derive(Debug, Deserialize)]
pub struct ScheduleConfig {
    /// Full month name for the yearly trigger, e.g. `"January"`.
    pub yearly_month: String,
    /// Day of month for the yearly trigger.
    pub yearly_day: u32,
    /// Day of month for the monthly trigger.
    pub monthly_day: u32,
    /// Full weekday name for the weekly trigger, e.g. `"Sunday"`.
    pub weekly_day: String,
}

/// AWS client overrides.
#[derive(Debug, Default, Deserialize)]
pub struct AwsConfig {
    /// Region override (defaults to the SDK's standard chain).
    pub region: Option<String>,
    /// Endpoint URL override, e.g. for localstack.
    pub endpoint_url: Option<String>,
}

/// Which clusters a run processes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClusterSelector {
    /// Discover all clusters from the directory.
    All,
    /// An explicit list, verified against the directory before any
    /// snapshot work.
    Named(Vec<ClusterId>),
}

impl Config {
    /// Load and validate a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        self.cluster_selector()?;
        self.build_schedule()?;
        Ok(())
    }

    /// The parsed cluster selector.
    pub fn cluster_selector(&self) -> Result<ClusterSelector> {
        let raw = self.clusters.trim();
        if raw.is_empty() {
            return Err(ConfigError::MissingField { field: "clusters" }.into());
        }
        if raw == "ALL" {
            return Ok(ClusterSelector::All);
        }
        let named = raw
            .split(',')
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(ClusterId::new)
            .collect::<Vec<_>>();
        if named.is_empty() {
            return Err(ConfigError::MissingField { field: "clusters" }.into());
        }
        Ok(ClusterSelector::Named(named))
    }

    /// The typed three-tier schedule.
    pub fn build_schedule(&self) -> Result<Schedule> {
        let yearly_month: Month = self.schedule.yearly_month.parse().map_err(|_| {
            ConfigError::InvalidValue {
                field: "schedule.yearly_month",
                reason: format!("unknown month name '{}'", self.schedule.yearly_month),
            }
        })?;
        let weekly_day: Weekday = self.schedule.weekly_day.parse().map_err(|_| {
            ConfigError::InvalidValue {
                field: "schedule.weekly_day",
                reason: format!("unknown weekday name '{}'", self.schedule.weekly_day),
            }
        })?;
        check_day_of_month("schedule.yearly_day", self.schedule.yearly_day)?;
        check_day_of_month("schedule.monthly_day", self.schedule.monthly_day)?;

        Ok(Schedule {
            yearly: RetentionRule {
                retention: self.retention.yearly,
                trigger: Trigger::Yearly {
                    month: yearly_month,
                    day: self.schedule.yearly_day,
                },
            },
            monthly: RetentionRule {
                retention: self.retention.monthly,
                trigger: Trigger::Monthly {
                    day: self.schedule.monthly_day,
                },
            },
            weekly: RetentionRule {
                retention: self.retention.weekly,
                trigger: Trigger::Weekly {
                    weekday: weekly_day,
                },
            },
        })
    }

    /// Initialize the tracing subscriber from the logging section.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}

fn check_day_of_month(field: &'static str, day: u32) -> Result<()> {
    if (1..=31).contains(&day) {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("day of month must be 1..=31, got {day}"),
        }
        .into())
    }
}
