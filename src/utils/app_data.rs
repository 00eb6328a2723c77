use crate::index::suffix_array::SuffixArrayConfig;
use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "sfx";
const CONFIG_FILE: &str = "config.json";

/// Load the config from an explicit path, or from the app data directory
///
/// A missing file yields the default config.
pub fn load_config(explicit: Option<&Path>) -> Result<SuffixArrayConfig> {
    match explicit {
        Some(path) => SuffixArrayConfig::load(path),
        None => match get_config_path() {
            Ok(path) => SuffixArrayConfig::load(&path),
            // No resolvable data directory
            Err(_) => Ok(SuffixArrayConfig::default()),
        },
    }
}

/// Get the path to the config file
pub fn get_config_path() -> Result<PathBuf> {
    let app_dir = get_app_data_dir()?;
    Ok(app_dir.join(CONFIG_FILE))
}

/// Get the application data directory
pub fn get_app_data_dir() -> Result<PathBuf> {
    let base = if cfg!(target_os = "macos") {
        dirs::home_dir()
            .map(|h| h.join("Library").join("Application Support"))
    } else if cfg!(target_os = "windows") {
        dirs::data_local_dir()
    } else {
        // Linux/Unix: use XDG_DATA_HOME or ~/.local/share
        dirs::data_dir()
    };

    let base = base.context("Could not determine app data directory")?;
    let app_dir = base.join(APP_NAME);

    fs::create_dir_all(&app_dir)
        .with_context(|| format!("Failed to create {}", app_dir.display()))?;
    Ok(app_dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::suffix_array::StringComparison;
    use tempfile::tempdir;

    #[test]
    fn test_explicit_config_path() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("sfx.json");
        fs::write(&path, r#"{"comparison": "ordinal_ignore_case", "parallel_threshold": 8}"#)
            .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.comparison, StringComparison::OrdinalIgnoreCase);
        assert_eq!(config.parallel_threshold, 8);
    }

    #[test]
    fn test_explicit_missing_path_is_default() {
        let dir = tempdir().unwrap();
        let config = load_config(Some(&dir.path().join("missing.json"))).unwrap();
        assert_eq!(config, SuffixArrayConfig::default());
    }
}
