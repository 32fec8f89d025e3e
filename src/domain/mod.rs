//! Store-agnostic domain logic.

mod cadence;
pub mod error;
mod id;
mod retention;
mod snapshot;

pub use cadence::{Cadence, TagSet};
pub use id::ClusterId;
pub use retention::{evaluate, Evaluation, RetentionRule, Schedule, Trigger};
pub use snapshot::Snapshot;
