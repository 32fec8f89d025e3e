//! Live snapshot store over the RDS cluster snapshot API.

mod store;

pub use store::{RdsStore, RdsStoreConfig, TOOL_TAG_KEY};
