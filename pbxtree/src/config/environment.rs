//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `PBXTREE_*` environment variables that
//! override configuration file values.

use crate::config::schema::{Config, OutputFormat};
use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Overrides `build_settings.built_products_dir`.
pub const BUILT_PRODUCTS_DIR_VAR: &str = "PBXTREE_BUILT_PRODUCTS_DIR";
/// Overrides `build_settings.developer_dir`.
pub const DEVELOPER_DIR_VAR: &str = "PBXTREE_DEVELOPER_DIR";
/// Overrides `build_settings.sdk_root`.
pub const SDKROOT_VAR: &str = "PBXTREE_SDKROOT";
/// Overrides `output_format`.
pub const OUTPUT_FORMAT_VAR: &str = "PBXTREE_OUTPUT_FORMAT";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use pbxtree::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `PBXTREE_OUTPUT_FORMAT` names an unknown format.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(dir) = Self::read_path(BUILT_PRODUCTS_DIR_VAR) {
            config
                .build_settings
                .get_or_insert_with(Default::default)
                .built_products_dir = Some(dir);
        }

        if let Some(dir) = Self::read_path(DEVELOPER_DIR_VAR) {
            config
                .build_settings
                .get_or_insert_with(Default::default)
                .developer_dir = Some(dir);
        }

        if let Some(dir) = Self::read_path(SDKROOT_VAR) {
            config
                .build_settings
                .get_or_insert_with(Default::default)
                .sdk_root = Some(dir);
        }

        if let Ok(format) = env::var(OUTPUT_FORMAT_VAR) {
            if !format.is_empty() {
                config.output_format = Some(format.parse::<OutputFormat>().map_err(|message| {
                    Error::Validation {
                        field: OUTPUT_FORMAT_VAR.into(),
                        message,
                    }
                })?);
            }
        }

        Ok(())
    }

    fn read_path(var: &str) -> Option<PathBuf> {
        env::var_os(var)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for var in [
            BUILT_PRODUCTS_DIR_VAR,
            DEVELOPER_DIR_VAR,
            SDKROOT_VAR,
            OUTPUT_FORMAT_VAR,
        ] {
            env::remove_var(var);
        }
    }

    #[test]
    #[serial]
    fn test_no_env_vars_leaves_config_unchanged() {
        clear_env();
        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    #[serial]
    fn test_build_setting_overrides() {
        clear_env();
        env::set_var(BUILT_PRODUCTS_DIR_VAR, "/env/products");
        env::set_var(SDKROOT_VAR, "/env/sdk");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        let settings = config.build_settings.unwrap();
        assert_eq!(
            settings.built_products_dir,
            Some(PathBuf::from("/env/products"))
        );
        assert_eq!(settings.sdk_root, Some(PathBuf::from("/env/sdk")));
        assert_eq!(settings.developer_dir, None);
    }

    #[test]
    #[serial]
    fn test_empty_value_ignored() {
        clear_env();
        env::set_var(DEVELOPER_DIR_VAR, "");

        let mut config = Config::default();
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert!(config.build_settings.is_none());
    }

    #[test]
    #[serial]
    fn test_output_format_override() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_VAR, "json");

        let mut config = Config {
            output_format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        EnvironmentConfig::apply_overrides(&mut config).unwrap();
        clear_env();

        assert_eq!(config.output_format, Some(OutputFormat::Json));
    }

    #[test]
    #[serial]
    fn test_invalid_output_format() {
        clear_env();
        env::set_var(OUTPUT_FORMAT_VAR, "table");

        let mut config = Config::default();
        let result = EnvironmentConfig::apply_overrides(&mut config);
        clear_env();

        assert!(matches!(result, Err(Error::Validation { .. })));
    }
}
