//! Configuration file discovery and loading.
//!
//! This module handles discovering and loading pbxtree configuration files
//! from the user's home directory and the project's directory tree.

use crate::config::schema::Config;
use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the shared project configuration.
pub const PROJECT_CONFIG_FILE: &str = "pbxtree.yaml";

/// File name of the private, per-checkout project configuration.
pub const LOCAL_CONFIG_FILE: &str = "pbxtree.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
///
/// # Examples
///
/// ```
/// use pbxtree::config::ConfigSource;
/// use std::path::PathBuf;
///
/// let user_config = ConfigSource {
///     path: PathBuf::from("~/.pbxtree/config.yaml"),
///     precedence: 1,
///     config: Default::default(),
/// };
/// assert_eq!(user_config.precedence, 1);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from various sources.
///
/// # Examples
///
/// ```no_run
/// use pbxtree::config::ConfigLoader;
/// use std::path::Path;
///
/// let sources = ConfigLoader::load_all(Path::new("."), None).unwrap();
/// println!("Found {} configuration sources", sources.len());
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Discover and load all configuration files.
    ///
    /// Searches for:
    /// 1. User config at `~/.pbxtree/config.yaml` (precedence 1)
    /// 2. `pbxtree.yaml` walking up from `working_dir` (precedence 2)
    /// 3. `pbxtree.local.yaml` next to it (precedence 3)
    ///
    /// `user_dir` overrides the directory the user config is read from.
    ///
    /// # Errors
    ///
    /// Returns an error if any configuration file exists but cannot be read
    /// or parsed.
    pub fn load_all(working_dir: &Path, user_dir: Option<&Path>) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        if let Some(user_config) = Self::load_user_config(user_dir)? {
            sources.push(user_config);
        }

        sources.extend(Self::discover_project_configs(working_dir)?);
        sources.sort_by_key(|s| s.precedence);

        Ok(sources)
    }

    /// Load the user configuration file, if it exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed, or
    /// if the home directory cannot be determined.
    fn load_user_config(user_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match user_dir {
            Some(dir) => dir.join("config.yaml"),
            None => default_user_dir()?.join("config.yaml"),
        };

        if !config_path.exists() {
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        Ok(Some(ConfigSource {
            path: config_path,
            precedence: 1,
            config,
        }))
    }

    /// Discover project configurations by walking up directories.
    ///
    /// Stops at the first directory containing either `pbxtree.yaml` or
    /// `pbxtree.local.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if any discovered file cannot be read or parsed.
    pub fn discover_project_configs(start_dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut configs = Vec::new();
        let mut current = start_dir.to_path_buf();

        loop {
            for (name, precedence) in [(PROJECT_CONFIG_FILE, 2), (LOCAL_CONFIG_FILE, 3)] {
                let path = current.join(name);
                if path.exists() {
                    let config = Self::load_file(&path)?;
                    configs.push(ConfigSource {
                        path,
                        precedence,
                        config,
                    });
                }
            }

            if !configs.is_empty() || !current.pop() {
                break;
            }
        }

        Ok(configs)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}

/// The default user configuration directory (`~/.pbxtree`).
///
/// # Errors
///
/// Returns an error if the home directory cannot be determined.
pub fn default_user_dir() -> Result<PathBuf> {
    home::home_dir()
        .map(|home| home.join(".pbxtree"))
        .ok_or_else(|| Error::InvalidPath {
            path: PathBuf::from("~/.pbxtree"),
            reason: "Cannot determine home directory".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use tempfile::TempDir;

    #[test]
    fn test_load_nonexistent_file() {
        let result = ConfigLoader::load_file(Path::new("/nonexistent/path/config.yaml"));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_invalid_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("bad.yaml");
        fs::write(&config_path, "invalid: yaml: syntax:").unwrap();

        let result = ConfigLoader::load_file(&config_path);
        assert!(result.is_err());
    }

    #[test]
    fn test_load_valid_config() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.yaml");
        fs::write(&config_path, "output_format: json\n").unwrap();

        let config = ConfigLoader::load_file(&config_path).unwrap();
        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    fn test_discover_no_configs() {
        let temp_dir = TempDir::new().unwrap();
        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert!(configs.is_empty());
    }

    #[test]
    fn test_discover_both_files() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "output_format: json\n").unwrap();
        fs::write(temp_dir.path().join(LOCAL_CONFIG_FILE), "output_format: csv\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(temp_dir.path()).unwrap();
        assert_eq!(configs.len(), 2);

        let shared = configs.iter().find(|c| c.precedence == 2).unwrap();
        let local = configs.iter().find(|c| c.precedence == 3).unwrap();
        assert_eq!(shared.config.output_format, Some(OutputFormat::Json));
        assert_eq!(local.config.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_discover_walks_up_to_first_config() {
        let temp_dir = TempDir::new().unwrap();
        let child = temp_dir.path().join("App.xcodeproj");
        fs::create_dir(&child).unwrap();
        fs::write(temp_dir.path().join(PROJECT_CONFIG_FILE), "output_format: yaml\n").unwrap();

        let configs = ConfigLoader::discover_project_configs(&child).unwrap();
        assert_eq!(configs.len(), 1);
        assert_eq!(configs[0].config.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_load_all_with_user_dir() {
        let user_dir = TempDir::new().unwrap();
        let work_dir = TempDir::new().unwrap();
        fs::write(user_dir.path().join("config.yaml"), "output_format: text\n").unwrap();
        fs::write(work_dir.path().join(PROJECT_CONFIG_FILE), "output_format: csv\n").unwrap();

        let sources = ConfigLoader::load_all(work_dir.path(), Some(user_dir.path())).unwrap();
        assert_eq!(sources.len(), 2);
        assert_eq!(sources[0].precedence, 1);
        assert_eq!(sources[1].precedence, 2);
    }
}
