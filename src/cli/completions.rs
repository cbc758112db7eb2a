use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    packctl completions bash > ~/.bash_completion.d/packctl\n\n\
                  Generate zsh completions:\n    packctl completions zsh > ~/.zfunc/_packctl\n\n\
                  Generate fish completions:\n    packctl completions fish > ~/.config/fish/completions/packctl.fish\n\n\
                  Generate PowerShell completions:\n    packctl completions powershell")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
