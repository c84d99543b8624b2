//! Configuration validation.

use crate::config::schema::{BuildSettings, Config};
use crate::error::{Error, Result};
use crate::path::normalize::expand_tilde;
use std::path::Path;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use pbxtree::config::{BuildSettings, Config, ConfigValidator};
/// use std::path::PathBuf;
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let relative = Config {
///     build_settings: Some(BuildSettings {
///         sdk_root: Some(PathBuf::from("sdk")),
///         ..Default::default()
///     }),
///     ..Default::default()
/// };
/// assert!(ConfigValidator::validate(&relative).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a complete configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref settings) = config.build_settings {
            Self::validate_build_settings(settings)?;
        }
        Ok(())
    }

    /// Every configured build setting must be an absolute path once `~` is
    /// expanded.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] for relative or empty paths.
    pub fn validate_build_settings(settings: &BuildSettings) -> Result<()> {
        let fields = [
            ("build_settings.built_products_dir", &settings.built_products_dir),
            ("build_settings.developer_dir", &settings.developer_dir),
            ("build_settings.sdk_root", &settings.sdk_root),
        ];
        for (field, value) in fields {
            if let Some(path) = value {
                Self::validate_absolute(field, path)?;
            }
        }
        Ok(())
    }

    fn validate_absolute(field: &str, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Path cannot be empty".into(),
            });
        }
        let expanded = expand_tilde(path)?;
        if !expanded.is_absolute() {
            return Err(Error::Validation {
                field: field.into(),
                message: format!("Path must be absolute: {}", path.display()),
            });
        }
        Ok(())
    }
}
