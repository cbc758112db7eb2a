//! Command implementations for the packctl CLI

pub mod completions;
pub mod deploy;
pub mod inspect;
pub mod version;

/// Global options shared by all commands
#[derive(Debug, Clone, Default)]
pub struct Globals {
    pub server: Option<String>,
    pub site_code: Option<String>,
    pub token: Option<String>,
    pub verbose: bool,
}

impl From<&crate::cli::Cli> for Globals {
    fn from(cli: &crate::cli::Cli) -> Self {
        Self {
            server: cli.server.clone(),
            site_code: cli.site_code.clone(),
            token: cli.token.clone(),
            verbose: cli.verbose,
        }
    }
}
