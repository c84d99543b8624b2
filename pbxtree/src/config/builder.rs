//! Configuration builder.

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use crate::path::normalize::expand_tilde;
use std::path::{Path, PathBuf};

/// Builds the effective configuration from files, environment variables
/// and programmatic overrides.
///
/// # Examples
///
/// ```
/// use pbxtree::config::{Config, ConfigBuilder, OutputFormat};
///
/// let config = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_config(Config {
///         output_format: Some(OutputFormat::Yaml),
///         ..Default::default()
///     })
///     .build()
///     .unwrap();
/// assert_eq!(config.output_format, Some(OutputFormat::Yaml));
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    user_dir: Option<PathBuf>,
    explicit_files: Vec<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder that reads every source.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory the project config search starts from (defaults to the
    /// current directory).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Directory holding the user `config.yaml` (defaults to `~/.pbxtree`).
    #[must_use]
    pub fn with_user_dir(mut self, dir: &Path) -> Self {
        self.user_dir = Some(dir.to_path_buf());
        self
    }

    /// An additional configuration file, applied above every discovered
    /// file and below environment variables. Read even with
    /// [`ConfigBuilder::skip_files`].
    #[must_use]
    pub fn with_file(mut self, path: &Path) -> Self {
        self.explicit_files.push(path.to_path_buf());
        self
    }

    /// Programmatic overrides with the highest precedence.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `PBXTREE_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Load, merge and validate the configuration.
    ///
    /// Build-setting paths are returned with `~` expanded.
    ///
    /// # Errors
    ///
    /// Returns an error if a configuration file cannot be read or parsed,
    /// an environment variable is invalid, or validation fails.
    pub fn build(self) -> Result<Config> {
        let mut config = if self.skip_files {
            Config::default()
        } else {
            let working_dir = match self.working_dir {
                Some(dir) => dir,
                None => std::env::current_dir()?,
            };
            let sources = ConfigLoader::load_all(&working_dir, self.user_dir.as_deref())?;
            for source in &sources {
                log::debug!("loaded configuration from {}", source.path.display());
            }
            ConfigMerger::merge(sources)
        };

        for path in &self.explicit_files {
            let file_config = ConfigLoader::load_file(path)?;
            log::debug!("loaded configuration from {}", path.display());
            ConfigMerger::merge_into(&mut config, &file_config);
        }

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Self::expand_paths(&mut config)?;
        Ok(config)
    }

    fn expand_paths(config: &mut Config) -> Result<()> {
        if let Some(ref mut settings) = config.build_settings {
            for dir in [
                &mut settings.built_products_dir,
                &mut settings.developer_dir,
                &mut settings.sdk_root,
            ]
            .into_iter()
            .flatten()
            {
                *dir = expand_tilde(dir)?;
            }
        }
        Ok(())
    }
}
