//! Snapwarden - retention-driven lifecycle management for RDS cluster
//! snapshots.
//!
//! This crate creates new cluster snapshots on yearly/monthly/weekly
//! cadences and deletes old ones once each tier's retention count is
//! exceeded. One physical snapshot can be claimed by several cadence
//! tiers at once; it is deleted only when the last tier releases it.
//!
//! # Architecture
//!
//! Hexagonal: the lifecycle logic is pure domain code behind a store
//! port, with two adapters:
//!
//! - **`adapter::rds`** - live store over the RDS cluster snapshot API
//!   (requires the `rds` feature, on by default)
//! - **`adapter::sim`** - file-backed store driven across synthetic
//!   dates by the simulation driver
//!
//! # Modules
//!
//! - [`config`] - Configuration loading from TOML files
//! - [`domain`] - Store-agnostic types: cadences, snapshots, tag sets,
//!   and the retention evaluator
//! - [`error`] - Error types for the crate
//! - [`port`] - Trait definitions implemented by the store adapters
//! - [`adapter`] - Store implementations
//! - [`app`] - Orchestration: cluster verification, the lifecycle
//!   orchestrator, and the date-range simulation driver
//! - [`cli`] - Command-line interface
//!
//! # Example
//!
//! ```no_run
//! use snapwarden::config::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("snapwarden.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

pub mod adapter;
pub mod app;
pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
