//! Property table extraction from Windows Installer packages

use std::io::{Read, Seek};
use std::path::Path;

use crate::error::{PackctlError, Result};

const MANUFACTURER: &str = "Manufacturer";
const PRODUCT_NAME: &str = "ProductName";
const PRODUCT_VERSION: &str = "ProductVersion";
const PRODUCT_CODE: &str = "ProductCode";

/// Metadata extracted from an installer's Property table
///
/// Read once when the package is opened; immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageMetadata {
    pub manufacturer: String,
    pub product_name: String,
    pub product_version: String,
    pub product_code: String,
}

impl PackageMetadata {
    /// Open an installer file and extract its metadata
    pub fn from_file(path: &Path) -> Result<Self> {
        let mut package = msi::open(path).map_err(|e| PackctlError::InstallerReadFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        Self::from_package(&mut package).map_err(|e| match e {
            // Keep the file path in read errors surfaced from row iteration
            PackctlError::InstallerReadFailed { reason, .. } => PackctlError::InstallerReadFailed {
                path: path.display().to_string(),
                reason,
            },
            other => other,
        })
    }

    /// Extract metadata from an already-open package
    ///
    /// Generic over the backing reader so tests can build packages in memory.
    pub fn from_package<F: Read + Seek>(package: &mut msi::Package<F>) -> Result<Self> {
        let rows = package
            .select_rows(msi::Select::table("Property"))
            .map_err(|e| PackctlError::InstallerReadFailed {
                path: String::new(),
                reason: e.to_string(),
            })?;

        let mut manufacturer = None;
        let mut product_name = None;
        let mut product_version = None;
        let mut product_code = None;

        for row in rows {
            let (name, value) = match (&row[0], &row[1]) {
                (msi::Value::Str(name), msi::Value::Str(value)) => (name.as_str(), value.clone()),
                _ => continue,
            };
            match name {
                MANUFACTURER => manufacturer = Some(value),
                PRODUCT_NAME => product_name = Some(value),
                PRODUCT_VERSION => product_version = Some(value),
                PRODUCT_CODE => product_code = Some(value),
                _ => {}
            }
        }

        Ok(Self {
            manufacturer: required(manufacturer, MANUFACTURER)?,
            product_name: required(product_name, PRODUCT_NAME)?,
            product_version: required(product_version, PRODUCT_VERSION)?,
            product_code: required(product_code, PRODUCT_CODE)?,
        })
    }

    /// Derived application name: "Manufacturer ProductName ProductVersion"
    pub fn application_name(&self) -> String {
        format!(
            "{} {} {}",
            self.manufacturer, self.product_name, self.product_version
        )
    }
}

fn required(value: Option<String>, property: &str) -> Result<String> {
    value.ok_or_else(|| PackctlError::PropertyMissing {
        property: property.to_string(),
    })
}
