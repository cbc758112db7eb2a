//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - deploy: Deploy command arguments
//! - inspect: Inspect command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod deploy;
pub mod inspect;

pub use completions::CompletionsArgs;
pub use deploy::DeployArgs;
pub use inspect::InspectArgs;

/// packctl - installer-driven deployment packaging
///
/// Create applications, deployment types and catalog folders in a
/// systems-management catalog straight from an installer package.
#[derive(Parser, Debug)]
#[command(
    name = "packctl",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Create and distribute application deployments from installer packages",
    long_about = "packctl reads the property table of a Windows Installer package, creates \
                  an application record and deployment type in the management catalog, files \
                  the application under a Manufacturer/Product folder pair, and optionally \
                  distributes its content to a distribution point group.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  packctl deploy //share/apps/widget.msi                      \x1b[90m# Package an installer\x1b[0m\n   \
                  packctl deploy widget.msi --transform custom.mst           \x1b[90m# Apply a transform\x1b[0m\n   \
                  packctl deploy widget.msi --distribute --dp-group \"All DPs\" \x1b[90m# Distribute content\x1b[0m\n   \
                  packctl deploy widget.msi --dry-run                        \x1b[90m# Show the plan only\x1b[0m\n   \
                  packctl inspect widget.msi                                 \x1b[90m# Show installer metadata\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Management server base URL
    #[arg(long, global = true, env = "PACKCTL_SERVER", value_name = "URL")]
    pub server: Option<String>,

    /// Site code of the target site
    #[arg(long = "site-code", global = true, env = "PACKCTL_SITE_CODE", value_name = "CODE")]
    pub site_code: Option<String>,

    /// API token for the management server
    #[arg(
        long,
        global = true,
        env = "PACKCTL_TOKEN",
        hide_env_values = true,
        value_name = "TOKEN"
    )]
    pub token: Option<String>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an application and deployment type from an installer
    Deploy(DeployArgs),

    /// Show metadata extracted from an installer package
    Inspect(InspectArgs),

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_deploy() {
        let cli = Cli::try_parse_from(["packctl", "deploy", "widget.msi"])
            .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {}", e));
        match cli.command {
            Commands::Deploy(args) => {
                assert_eq!(args.installer.to_string_lossy(), "widget.msi");
                assert!(!args.distribute);
            }
            _ => panic!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_cli_parsing_inspect() {
        let cli = Cli::try_parse_from(["packctl", "inspect", "widget.msi"])
            .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {}", e));
        assert!(matches!(cli.command, Commands::Inspect(_)));
    }

    #[test]
    fn test_cli_parsing_global_server() {
        let cli = Cli::try_parse_from([
            "packctl",
            "deploy",
            "widget.msi",
            "--server",
            "https://cm01.example.com",
            "--site-code",
            "PS1",
        ])
        .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {}", e));
        assert_eq!(cli.server.as_deref(), Some("https://cm01.example.com"));
        assert_eq!(cli.site_code.as_deref(), Some("PS1"));
    }
}
