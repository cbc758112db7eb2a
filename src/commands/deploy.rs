//! Deploy command implementation
//!
//! The packaging procedure:
//! 1. Validate the installer path (before anything touches the network)
//! 2. Extract metadata from the installer's Property table
//! 3. Build msiexec install/uninstall command lines
//! 4. Run the catalog workflow, or print the plan under --dry-run

use console::Style;
use std::path::Path;

use crate::catalog::{DistributionOutcome, RestCatalog};
use crate::cli::DeployArgs;
use crate::commands::Globals;
use crate::error::{PackctlError, Result};
use crate::installer::{CommandLines, PackageMetadata};
use crate::operations::{DeployOperation, DeployRequest};

/// Run deploy command
pub fn run(globals: Globals, args: DeployArgs) -> Result<()> {
    if !args.installer.exists() {
        return Err(PackctlError::InstallerNotFound {
            path: args.installer.display().to_string(),
        });
    }

    let metadata = PackageMetadata::from_file(&args.installer)?;
    let commands = CommandLines::build(
        &args.installer,
        &metadata.product_code,
        args.transform.as_deref(),
        args.install_args.as_deref(),
    );
    let content_location = content_location(&args.installer);

    if globals.verbose {
        print_metadata(&metadata);
    }

    if let Some(transform) = args.transform.as_deref() {
        warn_if_transform_missing(&args.installer, transform);
    }

    let request = DeployRequest {
        metadata,
        commands,
        content_location,
        distribute: args.distribute,
        dp_group: args.dp_group.clone(),
    };

    if args.dry_run {
        print_plan(&request);
        return Ok(());
    }

    let server = globals.server.ok_or(PackctlError::ServerNotConfigured)?;
    let site_code = globals
        .site_code
        .ok_or(PackctlError::SiteCodeNotConfigured)?;
    let mut catalog = RestCatalog::new(&server, &site_code, globals.token.as_deref())?;
    if globals.verbose {
        println!("Site: {} ({})", catalog.site_code(), server);
    }

    let summary = DeployOperation::new(&mut catalog).execute(&request)?;

    let bold = Style::new().bold();
    println!();
    println!(
        "Packaged {} ({})",
        bold.apply_to(&summary.application.name),
        summary.application.id
    );
    println!(
        "  Folder: {}/{} ({})",
        request.metadata.manufacturer, request.metadata.product_name, summary.folder.id
    );
    match summary.distribution {
        Some(DistributionOutcome::Started) => {
            println!("  Distribution: started");
        }
        Some(DistributionOutcome::AlreadyDistributed) => {
            println!("  Distribution: already present, skipped");
        }
        None => {}
    }

    Ok(())
}

/// Directory clients fetch content from: the installer's parent directory
fn content_location(installer: &Path) -> String {
    installer
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| ".".to_string())
}

fn warn_if_transform_missing(installer: &Path, transform: &str) {
    let resolved = if Path::new(transform).is_absolute() {
        Path::new(transform).to_path_buf()
    } else {
        installer
            .parent()
            .map(|p| p.join(transform))
            .unwrap_or_else(|| Path::new(transform).to_path_buf())
    };
    if !resolved.exists() {
        eprintln!(
            "{} transform not found next to installer: {}",
            Style::new().yellow().bold().apply_to("warning:"),
            resolved.display()
        );
    }
}

fn print_metadata(metadata: &PackageMetadata) {
    let bold = Style::new().bold();
    println!("{} {}", bold.apply_to("Manufacturer:"), metadata.manufacturer);
    println!("{} {}", bold.apply_to("Product name:"), metadata.product_name);
    println!(
        "{} {}",
        bold.apply_to("Product version:"),
        metadata.product_version
    );
    println!("{} {}", bold.apply_to("Product code:"), metadata.product_code);
}

fn print_plan(request: &DeployRequest) {
    let bold = Style::new().bold();
    let header = Style::new().green().bold();
    println!("{}", header.apply_to("Dry run, nothing will be created:"));
    println!(
        "{} {}",
        bold.apply_to("Application:"),
        request.metadata.application_name()
    );
    println!("{} {}", bold.apply_to("Install:"), request.commands.install);
    println!("{} {}", bold.apply_to("Uninstall:"), request.commands.uninstall);
    println!("{} {}", bold.apply_to("Content:"), request.content_location);
    println!(
        "{} {}/{}",
        bold.apply_to("Folder:"),
        request.metadata.manufacturer,
        request.metadata.product_name
    );
    if request.distribute {
        if let Some(group) = request.dp_group.as_deref() {
            println!("{} {}", bold.apply_to("Distribute to:"), group);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_nonexistent_installer_fails_fast() {
        let args = DeployArgs {
            installer: PathBuf::from("/nonexistent/widget.msi"),
            transform: None,
            install_args: None,
            distribute: false,
            dp_group: None,
            dry_run: false,
        };
        let err = run(Globals::default(), args).unwrap_err();
        assert!(matches!(err, PackctlError::InstallerNotFound { .. }));
    }

    #[test]
    fn test_content_location_is_parent_dir() {
        assert_eq!(
            content_location(&PathBuf::from("/srv/apps/widget.msi")),
            "/srv/apps"
        );
        assert_eq!(content_location(&PathBuf::from("widget.msi")), ".");
    }
}
