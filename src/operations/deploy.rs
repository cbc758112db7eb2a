//! The deployment packaging workflow
//!
//! A single linear pass over the catalog:
//! 1. Create the application record named from the installer metadata
//! 2. Register a deployment type carrying the msiexec command lines
//! 3. Ensure the Manufacturer/Product folder pair exists (never re-created)
//! 4. Move the application into the leaf folder
//! 5. Re-fetch the application by name; absence is fatal
//! 6. Optionally distribute content, tolerating already-distributed state

use crate::catalog::{
    Application, CatalogService, DistributionOutcome, DistributionState, Folder, NewApplication,
    NewDeploymentType,
};
use crate::error::{PackctlError, Result};
use crate::installer::{CommandLines, PackageMetadata};
use crate::progress::StepProgress;

/// Everything the workflow needs, resolved before any catalog call
#[derive(Debug, Clone)]
pub struct DeployRequest {
    pub metadata: PackageMetadata,
    pub commands: CommandLines,
    /// Directory clients fetch content from (the installer's directory)
    pub content_location: String,
    pub distribute: bool,
    pub dp_group: Option<String>,
}

/// What the workflow created, for the final report
#[derive(Debug, Clone)]
pub struct DeploySummary {
    pub application: Application,
    pub folder: Folder,
    /// None when distribution was not requested
    pub distribution: Option<DistributionOutcome>,
}

/// High-level deploy operation
pub struct DeployOperation<'a> {
    catalog: &'a mut dyn CatalogService,
    progress: StepProgress,
}

impl<'a> DeployOperation<'a> {
    pub fn new(catalog: &'a mut dyn CatalogService) -> Self {
        Self {
            catalog,
            progress: StepProgress::new(),
        }
    }

    /// Execute the workflow
    pub fn execute(&mut self, request: &DeployRequest) -> Result<DeploySummary> {
        // Validated again here so the workflow itself never reaches the
        // catalog without a target group
        if request.distribute && request.dp_group.is_none() {
            return Err(PackctlError::DistributionGroupMissing);
        }

        let name = request.metadata.application_name();

        self.progress.begin("Creating application");
        let application = self.catalog.create_application(&NewApplication {
            name: name.clone(),
            manufacturer: request.metadata.manufacturer.clone(),
            product_name: request.metadata.product_name.clone(),
            version: request.metadata.product_version.clone(),
        })?;
        self.progress.done(&format!("Created application \"{}\"", name));

        self.progress.begin("Registering deployment type");
        let deployment_type = self.catalog.add_deployment_type(
            &application.id,
            &NewDeploymentType {
                name: format!("{} - Windows Installer", name),
                technology: "msi".to_string(),
                install_command: request.commands.install.clone(),
                uninstall_command: request.commands.uninstall.clone(),
                product_code: request.metadata.product_code.clone(),
                content_location: request.content_location.clone(),
                execution_context: "system".to_string(),
            },
        )?;
        self.progress
            .done(&format!("Registered deployment type \"{}\"", deployment_type.name));
        self.progress.detail(&request.commands.install);

        self.progress.begin("Ensuring catalog folders");
        let manufacturer_folder = self.ensure_folder(&request.metadata.manufacturer, None)?;
        let product_folder = self.ensure_folder(
            &request.metadata.product_name,
            Some(&manufacturer_folder.id),
        )?;
        self.progress.done(&format!(
            "Folder {}/{} ready",
            request.metadata.manufacturer, request.metadata.product_name
        ));

        self.progress.begin("Moving application into folder");
        self.catalog
            .move_application(&application.id, &product_folder.id)?;
        self.progress.done("Application filed");

        self.progress.begin("Verifying application");
        let application = self
            .catalog
            .application_by_name(&name)?
            .ok_or_else(|| PackctlError::ApplicationNotFound { name: name.clone() })?;
        self.progress.done("Application verified in catalog");

        let distribution = if request.distribute {
            // requires check above guarantees the group is present
            let group = request
                .dp_group
                .as_deref()
                .ok_or(PackctlError::DistributionGroupMissing)?;
            Some(self.distribute(&application, group)?)
        } else {
            None
        };

        Ok(DeploySummary {
            application,
            folder: product_folder,
            distribution,
        })
    }

    /// Look a folder up by name under a parent, creating it only when missing
    fn ensure_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Folder> {
        if let Some(existing) = self.catalog.find_folder(name, parent_id)? {
            return Ok(existing);
        }
        self.catalog.create_folder(name, parent_id)
    }

    /// Distribute content, treating already-distributed as a logged no-op
    fn distribute(&mut self, application: &Application, group: &str) -> Result<DistributionOutcome> {
        self.progress.begin("Checking distribution state");
        match self.catalog.distribution_state(&application.id, group)? {
            DistributionState::Distributed => {
                self.progress
                    .warn(&format!("Content already distributed to \"{}\", skipping", group));
                return Ok(DistributionOutcome::AlreadyDistributed);
            }
            DistributionState::InProgress => {
                self.progress
                    .warn(&format!("Distribution to \"{}\" already underway, skipping", group));
                return Ok(DistributionOutcome::AlreadyDistributed);
            }
            DistributionState::NotDistributed => {}
        }

        self.progress.begin("Starting distribution");
        match self.catalog.start_distribution(&application.id, group)? {
            DistributionOutcome::Started => {
                self.progress
                    .done(&format!("Distribution to \"{}\" started", group));
                Ok(DistributionOutcome::Started)
            }
            DistributionOutcome::AlreadyDistributed => {
                self.progress
                    .warn(&format!("Server reports \"{}\" already has the content", group));
                Ok(DistributionOutcome::AlreadyDistributed)
            }
        }
    }
}
