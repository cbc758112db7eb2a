//! Common test utilities for packctl integration tests

use std::fs::OpenOptions;
use std::path::PathBuf;
use tempfile::TempDir;

/// A generated installer package for integration tests
///
/// The temp directory stands in for the network share the real tool reads
/// installers from.
#[allow(dead_code)]
pub struct TestInstaller {
    /// Temporary directory holding the package
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to the generated .msi file
    pub path: PathBuf,
}

impl TestInstaller {
    /// Create an installer with the default Acme Widget 1.0 property set
    #[allow(dead_code)]
    pub fn new() -> Self {
        Self::with_properties(&[
            ("Manufacturer", "Acme"),
            ("ProductName", "Widget"),
            ("ProductVersion", "1.0"),
            ("ProductCode", "{DEADBEEF-0000-0000-0000-000000000001}"),
        ])
    }

    /// Create an installer with an explicit Property table
    #[allow(dead_code)]
    pub fn with_properties(properties: &[(&str, &str)]) -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().join("widget.msi");
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create_new(true)
            .open(&path)
            .expect("Failed to create installer file");

        let mut package = msi::Package::create(msi::PackageType::Installer, file)
            .expect("Failed to create installer package");
        package
            .create_table(
                "Property",
                vec![
                    msi::Column::build("Property").primary_key().string(72),
                    msi::Column::build("Value").string(255),
                ],
            )
            .expect("Failed to create Property table");
        for (name, value) in properties {
            package
                .insert_rows(msi::Insert::into("Property").row(vec![
                    msi::Value::Str((*name).to_string()),
                    msi::Value::Str((*value).to_string()),
                ]))
                .expect("Failed to insert property row");
        }
        package.flush().expect("Failed to flush installer package");

        Self { temp, path }
    }

    /// Write an empty transform file next to the installer
    #[allow(dead_code)]
    pub fn write_transform(&self, name: &str) -> PathBuf {
        let path = self.temp.path().join(name);
        std::fs::write(&path, b"").expect("Failed to write transform file");
        path
    }
}
