//! Management catalog API surface
//!
//! The deploy operation talks to the catalog through the [`CatalogService`]
//! trait so its sequencing rules stay testable without a server:
//! - types: application, deployment type, folder and distribution records
//! - service: the `CatalogService` trait
//! - rest: blocking HTTP implementation against the management server

pub mod rest;
pub mod service;
pub mod types;

pub use rest::RestCatalog;
pub use service::CatalogService;
pub use types::{
    Application, DeploymentType, DistributionOutcome, DistributionState, Folder, NewApplication,
    NewDeploymentType,
};
