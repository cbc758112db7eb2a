//! Inspect command implementation
//!
//! Read-only half of the tool: extract and print installer metadata without
//! touching the catalog.

use console::Style;

use crate::cli::InspectArgs;
use crate::error::{PackctlError, Result};
use crate::installer::PackageMetadata;

/// Run inspect command
pub fn run(args: InspectArgs) -> Result<()> {
    if !args.installer.exists() {
        return Err(PackctlError::InstallerNotFound {
            path: args.installer.display().to_string(),
        });
    }

    let metadata = PackageMetadata::from_file(&args.installer)?;

    let bold = Style::new().bold();
    println!("{} {}", bold.apply_to("Manufacturer:"), metadata.manufacturer);
    println!("{} {}", bold.apply_to("Product name:"), metadata.product_name);
    println!(
        "{} {}",
        bold.apply_to("Product version:"),
        metadata.product_version
    );
    println!("{} {}", bold.apply_to("Product code:"), metadata.product_code);
    println!(
        "{} {}",
        bold.apply_to("Application name:"),
        Style::new().yellow().bold().apply_to(metadata.application_name())
    );

    Ok(())
}
