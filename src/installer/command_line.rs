//! msiexec command-line construction for deployment types

use std::path::Path;

/// Install and uninstall command lines for a deployment type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLines {
    pub install: String,
    pub uninstall: String,
}

impl CommandLines {
    /// Build command lines for an installer file
    ///
    /// The install command references the installer by file name since the
    /// deployment type's content location is the installer's directory. The
    /// transform path is kept as given, relative to that same directory.
    pub fn build(
        installer: &Path,
        product_code: &str,
        transform: Option<&str>,
        install_args: Option<&str>,
    ) -> Self {
        let file_name = installer
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| installer.display().to_string());

        let mut install = format!("msiexec /i \"{}\" /qn", file_name);
        if let Some(transform) = transform {
            install.push_str(&format!(" TRANSFORMS=\"{}\"", transform));
        }
        if let Some(args) = install_args {
            let args = args.trim();
            if !args.is_empty() {
                install.push(' ');
                install.push_str(args);
            }
        }

        let uninstall = format!("msiexec /x {} /qn", product_code);

        Self { install, uninstall }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const CODE: &str = "{DEADBEEF-0000-0000-0000-000000000001}";

    #[test]
    fn test_install_command_plain() {
        let lines = CommandLines::build(&PathBuf::from("//share/apps/widget.msi"), CODE, None, None);
        assert_eq!(lines.install, "msiexec /i \"widget.msi\" /qn");
    }

    #[test]
    fn test_install_command_with_transform() {
        let lines = CommandLines::build(
            &PathBuf::from("widget.msi"),
            CODE,
            Some("custom.mst"),
            None,
        );
        assert!(lines.install.contains("TRANSFORMS=\"custom.mst\""));
    }

    #[test]
    fn test_install_command_without_transform_has_no_clause() {
        let lines = CommandLines::build(&PathBuf::from("widget.msi"), CODE, None, None);
        assert!(!lines.install.contains("TRANSFORMS="));
    }

    #[test]
    fn test_install_command_with_extra_args() {
        let lines = CommandLines::build(
            &PathBuf::from("widget.msi"),
            CODE,
            Some("custom.mst"),
            Some("ALLUSERS=1 REBOOT=ReallySuppress"),
        );
        assert!(
            lines
                .install
                .ends_with("TRANSFORMS=\"custom.mst\" ALLUSERS=1 REBOOT=ReallySuppress")
        );
    }

    #[test]
    fn test_blank_extra_args_ignored() {
        let lines = CommandLines::build(&PathBuf::from("widget.msi"), CODE, None, Some("   "));
        assert_eq!(lines.install, "msiexec /i \"widget.msi\" /qn");
    }

    #[test]
    fn test_uninstall_command_uses_product_code() {
        let lines = CommandLines::build(&PathBuf::from("widget.msi"), CODE, None, None);
        assert_eq!(lines.uninstall, format!("msiexec /x {} /qn", CODE));
    }
}
