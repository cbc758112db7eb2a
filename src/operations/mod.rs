//! High-level operations coordinating installer metadata and the catalog
//!
//! - DeployOperation: the complete packaging workflow (create application,
//!   register deployment type, file under Manufacturer/Product, verify,
//!   optionally distribute)

pub mod deploy;

pub use deploy::{DeployOperation, DeployRequest, DeploySummary};
