//! Shared helpers for integration tests.
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

/// Canonical configuration TOML: yearly on January 1st (keep 2),
/// monthly on the 1st (keep 2), weekly on Sundays (keep 7).
pub fn sample_config(clusters: &str) -> String {
    format!(
        r#"
clusters = "{clusters}"

[retention]
yearly = 2
monthly = 2
weekly = 7

[schedule]
yearly_month = "January"
yearly_day = 1
monthly_day = 1
weekly_day = "Sunday"

[logging]
level = "warn"
format = "pretty"
"#
    )
}

/// Write a config file into `dir` and return its path.
pub fn write_config(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("snapwarden.toml");
    fs::write(&path, contents).expect("write test config");
    path
}
