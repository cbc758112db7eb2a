//! Blocking REST client for the management catalog

use reqwest::StatusCode;
use reqwest::blocking::{Client, Response};
use serde::Deserialize;

use crate::error::{PackctlError, Result};

use super::service::CatalogService;
use super::types::{
    Application, DeploymentType, DistributionOutcome, DistributionState, Folder, NewApplication,
    NewDeploymentType,
};

const USER_AGENT: &str = concat!("packctl/", env!("CARGO_PKG_VERSION"));

/// Catalog client backed by the management server's REST API
///
/// All calls are synchronous; the procedure has no concurrent work to
/// overlap them with.
pub struct RestCatalog {
    client: Client,
    base_url: String,
    site_code: String,
}

#[derive(Debug, Deserialize)]
struct DistributionStatus {
    state: DistributionState,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

impl RestCatalog {
    /// Build a client for a server base URL and site code
    pub fn new(server: &str, site_code: &str, token: Option<&str>) -> Result<Self> {
        let mut headers = reqwest::header::HeaderMap::new();
        if let Some(token) = token {
            let value = reqwest::header::HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| PackctlError::api("client-setup", e))?;
            headers.insert(reqwest::header::AUTHORIZATION, value);
        }
        let site = reqwest::header::HeaderValue::from_str(site_code)
            .map_err(|e| PackctlError::api("client-setup", e))?;
        headers.insert("X-Site-Code", site);

        let client = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(headers)
            .build()
            .map_err(|e| PackctlError::api("client-setup", e))?;

        Ok(Self {
            client,
            base_url: server.trim_end_matches('/').to_string(),
            site_code: site_code.to_string(),
        })
    }

    pub fn site_code(&self) -> &str {
        &self.site_code
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Map a non-success response to a request error with the server's
    /// message when it sent a structured one
    fn check(operation: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let reason = match response.json::<ApiError>() {
            Ok(body) => format!("HTTP {}: {}", status.as_u16(), body.message),
            Err(_) => format!("HTTP {}", status.as_u16()),
        };
        Err(PackctlError::ApiRequestFailed {
            operation: operation.to_string(),
            reason,
        })
    }
}

impl CatalogService for RestCatalog {
    fn application_by_name(&mut self, name: &str) -> Result<Option<Application>> {
        let operation = "get-application-by-name";
        let response = self
            .client
            .get(self.url("/applications"))
            .query(&[("name", name)])
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        let response = Self::check(operation, response)?;
        let mut applications: Vec<Application> = response
            .json()
            .map_err(|e| PackctlError::api(operation, e))?;
        Ok(applications.drain(..).find(|a| a.name == name))
    }

    fn create_application(&mut self, request: &NewApplication) -> Result<Application> {
        let operation = "create-application";
        let response = self
            .client
            .post(self.url("/applications"))
            .json(request)
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        Self::check(operation, response)?
            .json()
            .map_err(|e| PackctlError::api(operation, e))
    }

    fn add_deployment_type(
        &mut self,
        application_id: &str,
        request: &NewDeploymentType,
    ) -> Result<DeploymentType> {
        let operation = "add-deployment-type";
        let path = format!("/applications/{}/deployment-types", application_id);
        let response = self
            .client
            .post(self.url(&path))
            .json(request)
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        Self::check(operation, response)?
            .json()
            .map_err(|e| PackctlError::api(operation, e))
    }

    fn find_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Option<Folder>> {
        let operation = "find-folder";
        let mut query = vec![("name", name.to_string())];
        if let Some(parent) = parent_id {
            query.push(("parent", parent.to_string()));
        }
        let response = self
            .client
            .get(self.url("/folders"))
            .query(&query)
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        let response = Self::check(operation, response)?;
        let mut folders: Vec<Folder> = response
            .json()
            .map_err(|e| PackctlError::api(operation, e))?;
        Ok(folders
            .drain(..)
            .find(|f| f.name == name && f.parent_id.as_deref() == parent_id))
    }

    fn create_folder(&mut self, name: &str, parent_id: Option<&str>) -> Result<Folder> {
        let operation = "create-folder";
        let body = serde_json::json!({ "name": name, "parent_id": parent_id });
        let response = self
            .client
            .post(self.url("/folders"))
            .json(&body)
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        Self::check(operation, response)?
            .json()
            .map_err(|e| PackctlError::api(operation, e))
    }

    fn move_application(&mut self, application_id: &str, folder_id: &str) -> Result<()> {
        let operation = "move-application";
        let path = format!("/applications/{}/folder", application_id);
        let body = serde_json::json!({ "folder_id": folder_id });
        let response = self
            .client
            .put(self.url(&path))
            .json(&body)
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        Self::check(operation, response)?;
        Ok(())
    }

    fn distribution_state(
        &mut self,
        application_id: &str,
        group: &str,
    ) -> Result<DistributionState> {
        let operation = "get-distribution-state";
        let path = format!("/applications/{}/distributions/{}", application_id, group);
        let response = self
            .client
            .get(self.url(&path))
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        // No record means the content was never targeted at the group
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(DistributionState::NotDistributed);
        }
        let status: DistributionStatus = Self::check(operation, response)?
            .json()
            .map_err(|e| PackctlError::api(operation, e))?;
        Ok(status.state)
    }

    fn start_distribution(
        &mut self,
        application_id: &str,
        group: &str,
    ) -> Result<DistributionOutcome> {
        let operation = "start-distribution";
        let body = serde_json::json!({ "application_id": application_id, "group": group });
        let response = self
            .client
            .post(self.url("/distributions"))
            .json(&body)
            .send()
            .map_err(|e| PackctlError::api(operation, e))?;
        // A conflict means the content is already targeted at the group
        if response.status() == StatusCode::CONFLICT {
            return Ok(DistributionOutcome::AlreadyDistributed);
        }
        Self::check(operation, response)?;
        Ok(DistributionOutcome::Started)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let catalog = RestCatalog::new("https://cm01.example.com/", "PS1", None)
            .unwrap_or_else(|e| panic!("Failed to build client: {}", e));
        assert_eq!(catalog.url("/applications"), "https://cm01.example.com/applications");
    }

    #[test]
    fn test_site_code_kept() {
        let catalog = RestCatalog::new("https://cm01.example.com", "PS1", Some("secret"))
            .unwrap_or_else(|e| panic!("Failed to build client: {}", e));
        assert_eq!(catalog.site_code(), "PS1");
    }

    #[test]
    fn test_invalid_site_code_header_rejected() {
        let result = RestCatalog::new("https://cm01.example.com", "PS1\n", None);
        assert!(result.is_err());
    }
}
