//! Installer package inspection and command-line construction
//!
//! This module reads the property table of a Windows Installer package and
//! turns it into the pieces the catalog needs:
//! - properties: `PackageMetadata` extraction from the MSI Property table
//! - command_line: msiexec install/uninstall command strings

pub mod command_line;
pub mod properties;

pub use command_line::CommandLines;
pub use properties::PackageMetadata;
