//! Start-up banner and the long `help` description.

use std::path::Path;

use crate::{APP_NAME, RELEASE_DATE, VERSION};

/// Width of the `*` rule framing banners and headers.
pub const RULE_WIDTH: usize = 60;

/// Usage paragraph printed after the parser help by `metafunc help`.
pub const HELP_DESCRIPTION: &str = "
Description
-----------

Run `metafunc setup` to generate an example directory with
resources to make a metafunc run.

Enter the directory and edit the config.yaml file to your
project requirements.

Run `metafunc run config.yaml` from within the created
directory.
";

pub fn rule() -> String {
    "*".repeat(RULE_WIDTH)
}

/// Renders the banner shown before every command.
///
/// The install directory line is left out when it could not be resolved.
pub fn banner(install_dir: Option<&Path>) -> String {
    let location = install_dir
        .map(|dir| format!("Using executable at: {}\n", dir.display()))
        .unwrap_or_default();
    format!(
        "{rule}\n\n\t\t{name}\n\nversion: {version}  date: {date}\n{location}{rule}\n\n",
        rule = rule(),
        name = APP_NAME,
        version = VERSION,
        date = RELEASE_DATE,
        location = location,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_banner_contents() {
        let text = banner(Some(Path::new("/opt/metafunc")));
        assert!(text.starts_with(&rule()));
        assert!(text.contains(&format!("version: {}  date: {}", VERSION, RELEASE_DATE)));
        assert!(text.contains("Using executable at: /opt/metafunc"));
    }

    #[test]
    fn test_banner_without_install_dir() {
        let text = banner(None);
        assert!(text.contains(&format!("version: {}  date: {}\n{}", VERSION, RELEASE_DATE, rule())));
        assert!(!text.contains("Using executable at"));
    }

    #[test]
    fn test_rule_width() {
        assert_eq!(rule().len(), RULE_WIDTH);
    }
}
