use clap::Parser;
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show installer metadata:\n    packctl inspect widget.msi\n\n\
                  Inspect an installer on a share:\n    packctl inspect //share/apps/widget.msi")]
pub struct InspectArgs {
    /// Path to the installer package (.msi)
    pub installer: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::super::{Cli, Commands};
    use clap::Parser;

    #[test]
    fn test_cli_parsing_inspect_path() {
        let cli = Cli::try_parse_from(["packctl", "inspect", "//share/apps/widget.msi"])
            .unwrap_or_else(|e| panic!("Failed to parse CLI arguments: {}", e));
        match cli.command {
            Commands::Inspect(args) => {
                assert_eq!(args.installer.to_string_lossy(), "//share/apps/widget.msi");
            }
            _ => panic!("Expected Inspect command"),
        }
    }
}
