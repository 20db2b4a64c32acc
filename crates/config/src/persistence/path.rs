//! Default file locations.

use std::path::PathBuf;

use anyhow::Context;

use crate::constants::{APP_DIR_NAME, CONFIG_FILE_NAME, SESSION_FILE_NAME};

fn project_dirs() -> Result<directories::ProjectDirs, anyhow::Error> {
    directories::ProjectDirs::from("", "", APP_DIR_NAME)
        .context("Failed to determine project directories")
}

/// Returns the default path to the configuration file.
///
/// - Linux/macOS: `~/.config/projdash/config.json`
/// - Windows: `%AppData%\projdash\config.json`
pub fn default_config_path() -> Result<PathBuf, anyhow::Error> {
    Ok(project_dirs()?.config_dir().join(CONFIG_FILE_NAME))
}

/// Returns the default path to the persisted session file.
///
/// Lives next to the config file so a logout only has one place to clean.
pub fn default_session_path() -> Result<PathBuf, anyhow::Error> {
    Ok(project_dirs()?.config_dir().join(SESSION_FILE_NAME))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_paths_share_directory() {
        let config = default_config_path().unwrap();
        let session = default_session_path().unwrap();
        assert_eq!(config.parent(), session.parent());
        assert!(config.ends_with(CONFIG_FILE_NAME));
        assert!(session.ends_with(SESSION_FILE_NAME));
        assert!(config.to_string_lossy().contains(APP_DIR_NAME));
    }
}
