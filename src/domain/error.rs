//! Domain validation errors.

use thiserror::Error;

/// Errors that occur when domain invariants are violated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A tier name outside the three fixed cadences. Always fatal:
    /// the tool manages exactly yearly, monthly and weekly snapshots.
    #[error("unknown cadence tier '{name}'")]
    UnknownCadence {
        /// The unrecognized tier name.
        name: String,
    },
}
