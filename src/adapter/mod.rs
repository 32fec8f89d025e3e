//! Port implementations.

#[cfg(feature = "rds")]
pub mod rds;
pub mod sim;
