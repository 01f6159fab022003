//! service-core: Shared infrastructure for the line item editor workspace.
pub mod config;
pub mod error;
pub mod observability;

pub use anyhow;
pub use serde;
pub use serde_json;
pub use tracing;
