//! Catalog record types exchanged with the management API

use serde::{Deserialize, Serialize};

/// An application record in the catalog
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Application {
    pub id: String,
    pub name: String,
    pub manufacturer: String,
    pub version: String,
    #[serde(default)]
    pub folder_id: Option<String>,
}

/// Request body for creating an application
#[derive(Debug, Clone, Serialize)]
pub struct NewApplication {
    pub name: String,
    pub manufacturer: String,
    pub product_name: String,
    pub version: String,
}

/// A deployment type registered on an application
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeploymentType {
    pub id: String,
    pub name: String,
}

/// Request body for adding a deployment type
#[derive(Debug, Clone, Serialize)]
pub struct NewDeploymentType {
    pub name: String,
    /// Installer technology, always "msi" for this tool
    pub technology: String,
    pub install_command: String,
    pub uninstall_command: String,
    /// Product code used for detection on clients
    pub product_code: String,
    /// Directory clients fetch content from (the installer's directory)
    pub content_location: String,
    /// Commands run in the system context, not the logged-on user's
    pub execution_context: String,
}

/// A folder in the catalog's console hierarchy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Folder {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub parent_id: Option<String>,
}

/// Content distribution state for an application and group
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DistributionState {
    NotDistributed,
    InProgress,
    Distributed,
}

/// Result of a start-distribution call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistributionOutcome {
    Started,
    /// The server reported the content is already targeted at the group
    AlreadyDistributed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_application_deserializes_without_folder() {
        let app: Application = serde_json::from_str(
            r#"{"id": "app-1", "name": "Acme Widget 1.0", "manufacturer": "Acme", "version": "1.0"}"#,
        )
        .unwrap_or_else(|e| panic!("Failed to deserialize: {}", e));
        assert_eq!(app.id, "app-1");
        assert!(app.folder_id.is_none());
    }

    #[test]
    fn test_distribution_state_wire_format() {
        let state: DistributionState = serde_json::from_str(r#""not_distributed""#)
            .unwrap_or_else(|e| panic!("Failed to deserialize: {}", e));
        assert_eq!(state, DistributionState::NotDistributed);
        let state: DistributionState = serde_json::from_str(r#""distributed""#)
            .unwrap_or_else(|e| panic!("Failed to deserialize: {}", e));
        assert_eq!(state, DistributionState::Distributed);
    }
}
