use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use nbnames::Prefix;

use crate::cli::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) prefix: Option<Prefix>,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) debug: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
}

impl Config {
    /// Load the first config file that exists, returning where it came
    /// from. A file that fails to parse is reported on stderr and the next
    /// location is tried.
    pub(crate) fn load() -> (Self, Option<PathBuf>) {
        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => return (config, Some(path)),
                Err(e) => eprintln!("Warning: {e}"),
            }
        }

        (Self::default(), None)
    }

    pub(crate) fn load_from(path: &Path) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).map_err(|source| AppError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str::<Config>(&content).map_err(|source| AppError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/nbnames/config.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("nbnames").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/nbnames/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("nbnames").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.nbnames.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".nbnames.toml"));
        }

        paths
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_paths_are_not_empty() {
        assert!(!Config::get_config_paths().is_empty());
    }

    #[test]
    fn load_from_reads_all_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "prefix = \"ses\"\njson = true\ndebug = true\ntimezone = \"UTC\"\n",
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.prefix, Some(Prefix::Ses));
        assert!(config.json);
        assert!(config.debug);
        assert_eq!(config.timezone.as_deref(), Some("UTC"));
    }

    #[test]
    fn missing_keys_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.prefix, None);
        assert!(!config.json);
    }

    #[test]
    fn invalid_prefix_is_a_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "prefix = \"run\"\n").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, AppError::ConfigParse { .. }));
        assert!(err.to_string().contains("config.toml"));
    }
}
