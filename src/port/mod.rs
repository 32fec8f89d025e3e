//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports are the seams between the lifecycle logic and the outside
//! world. The orchestrator is generic over them; the concrete store is
//! selected once at startup and injected.

mod store;

pub use store::{ClusterDirectory, SnapshotStore};
