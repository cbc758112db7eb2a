use clap::Parser;
use std::path::PathBuf;

/// Arguments for the deploy command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                   Package an installer from a share:\n    packctl deploy //share/apps/widget.msi\n\n\
                   Apply a transform next to the installer:\n    packctl deploy widget.msi --transform custom.mst\n\n\
                   Pass extra msiexec arguments:\n    packctl deploy widget.msi --install-args \"ALLUSERS=1\"\n\n\
                   Distribute content after packaging:\n    packctl deploy widget.msi --distribute --dp-group \"All DPs\"")]
pub struct DeployArgs {
    /// Path to the installer package (.msi), typically on a network share
    pub installer: PathBuf,

    /// Transform file (.mst) to apply, relative to the installer's directory
    #[arg(long, short = 't', value_name = "MST")]
    pub transform: Option<String>,

    /// Extra arguments appended to the install command line
    #[arg(long = "install-args", value_name = "ARGS")]
    pub install_args: Option<String>,

    /// Distribute content to a distribution point group after packaging
    #[arg(long, requires = "dp_group")]
    pub distribute: bool,

    /// Distribution point group to distribute content to
    #[arg(long = "dp-group", value_name = "GROUP")]
    pub dp_group: Option<String>,

    /// Show what would be created without calling the catalog
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(test)]
#[allow(clippy::expect_used)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_deploy_full() {
        let cli = Cli::try_parse_from([
            "packctl",
            "deploy",
            "widget.msi",
            "--transform",
            "custom.mst",
            "--install-args",
            "ALLUSERS=1",
            "--distribute",
            "--dp-group",
            "All DPs",
        ])
        .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {}", e));
        match cli.command {
            Commands::Deploy(args) => {
                assert_eq!(args.transform.as_deref(), Some("custom.mst"));
                assert_eq!(args.install_args.as_deref(), Some("ALLUSERS=1"));
                assert!(args.distribute);
                assert_eq!(args.dp_group.as_deref(), Some("All DPs"));
            }
            _ => panic!("Expected Deploy command"),
        }
    }

    #[test]
    fn test_distribute_requires_dp_group() {
        let result = Cli::try_parse_from(["packctl", "deploy", "widget.msi", "--distribute"]);
        assert!(result.is_err(), "--distribute without --dp-group must be rejected");
    }

    #[test]
    fn test_dp_group_without_distribute_parses() {
        let result =
            Cli::try_parse_from(["packctl", "deploy", "widget.msi", "--dp-group", "All DPs"]);
        assert!(result.is_ok());
    }
}
