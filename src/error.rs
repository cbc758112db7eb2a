//! Error types and handling for packctl
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for packctl operations
#[derive(Error, Diagnostic, Debug)]
pub enum PackctlError {
    // Installer errors
    #[error("Installer not found: {path}")]
    #[diagnostic(
        code(packctl::installer::not_found),
        help("Check that the installer path is correct and the share is reachable")
    )]
    InstallerNotFound { path: String },

    #[error("Failed to read installer package: {path}")]
    #[diagnostic(
        code(packctl::installer::read_failed),
        help("The file must be a valid Windows Installer (.msi) package")
    )]
    InstallerReadFailed { path: String, reason: String },

    #[error("Installer property missing: {property}")]
    #[diagnostic(
        code(packctl::installer::property_missing),
        help("The package's Property table must define Manufacturer, ProductName, ProductVersion and ProductCode")
    )]
    PropertyMissing { property: String },

    // Deployment errors
    #[error("Distribution requested without a distribution point group")]
    #[diagnostic(
        code(packctl::deploy::group_missing),
        help("Pass --dp-group <GROUP> together with --distribute")
    )]
    DistributionGroupMissing,

    #[error("Application not found in catalog after creation: {name}")]
    #[diagnostic(
        code(packctl::deploy::application_not_found),
        help("The create call was accepted but the application is not visible by name; check site replication")
    )]
    ApplicationNotFound { name: String },

    // Catalog API errors
    #[error("No management server configured")]
    #[diagnostic(
        code(packctl::catalog::server_missing),
        help("Pass --server <URL> or set PACKCTL_SERVER")
    )]
    ServerNotConfigured,

    #[error("No site code configured")]
    #[diagnostic(
        code(packctl::catalog::site_code_missing),
        help("Pass --site-code <CODE> or set PACKCTL_SITE_CODE")
    )]
    SiteCodeNotConfigured,

    #[error("Catalog request failed ({operation}): {reason}")]
    #[diagnostic(code(packctl::catalog::request_failed))]
    ApiRequestFailed { operation: String, reason: String },
}

impl PackctlError {
    /// Wrap a failed catalog call with the operation name it belonged to
    pub fn api(operation: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::ApiRequestFailed {
            operation: operation.into(),
            reason: reason.to_string(),
        }
    }
}

/// Result type alias for packctl operations
pub type Result<T> = std::result::Result<T, PackctlError>;
