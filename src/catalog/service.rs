//! The catalog service seam

use crate::error::Result;

use super::types::{
    Application, DeploymentType, DistributionOutcome, DistributionState, Folder, NewApplication,
    NewDeploymentType,
};

/// Operations the deploy procedure needs from the management catalog
///
/// Implemented by [`super::RestCatalog`] for real runs and by in-memory
/// fakes in the operation tests.
pub trait CatalogService {
    /// Look up an application by its exact name
    fn application_by_name(&mut self, name: &str) -> Result<Option<Application>>;

    /// Create an application record
    fn create_application(&mut self, request: &NewApplication) -> Result<Application>;

    /// Register a deployment type on an application
    fn add_deployment_type(
        &mut self,
        application_id: &str,
        request: &NewDeploymentType,
    ) -> Result<DeploymentType>;

    /// Look up a folder by name under a parent (root when `parent_id` is None)
    fn find_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Option<Folder>>;

    /// Create a folder under a parent (root when `parent_id` is None)
    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Folder>;

    /// Move an application into a folder
    fn move_application(&mut self, application_id: &str, folder_id: &str) -> Result<()>;

    /// Current content distribution state for an application and group
    fn distribution_state(
        &mut self,
        application_id: &str,
        group: &str,
    ) -> Result<DistributionState>;

    /// Start distributing an application's content to a group
    fn start_distribution(
        &mut self,
        application_id: &str,
        group: &str,
    ) -> Result<DistributionOutcome>;
}
