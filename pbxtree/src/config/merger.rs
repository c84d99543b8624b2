//! Configuration merging and precedence handling.

use crate::config::loader::ConfigSource;
use crate::config::schema::{BuildSettings, Config};

/// Merges configuration sources according to precedence rules.
///
/// # Examples
///
/// ```
/// use pbxtree::config::{Config, ConfigMerger, OutputFormat};
///
/// let low = Config { output_format: Some(OutputFormat::Json), ..Default::default() };
/// let high = Config { output_format: Some(OutputFormat::Csv), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.output_format, Some(OutputFormat::Csv));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge multiple configuration sources into final config.
    ///
    /// Sources should be provided in order from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();

        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }

        result
    }

    /// Merge source config into target (source overwrites target).
    ///
    /// # Merging Rules
    ///
    /// - Simple fields: source overwrites if Some
    /// - Build settings: field-by-field merge
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.output_format.is_some() {
            target.output_format = source.output_format;
        }

        if let Some(ref source_settings) = source.build_settings {
            target.build_settings = Some(match &target.build_settings {
                Some(target_settings) => Self::merge_build_settings(target_settings, source_settings),
                None => source_settings.clone(),
            });
        }
    }

    fn merge_build_settings(target: &BuildSettings, source: &BuildSettings) -> BuildSettings {
        BuildSettings {
            built_products_dir: source
                .built_products_dir
                .clone()
                .or_else(|| target.built_products_dir.clone()),
            developer_dir: source
                .developer_dir
                .clone()
                .or_else(|| target.developer_dir.clone()),
            sdk_root: source.sdk_root.clone().or_else(|| target.sdk_root.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use std::path::PathBuf;

    fn source(precedence: u8, config: Config) -> ConfigSource {
        ConfigSource {
            path: PathBuf::from(format!("/config/{precedence}.yaml")),
            precedence,
            config,
        }
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(ConfigMerger::merge(vec![]), Config::default());
    }

    #[test]
    fn test_higher_precedence_wins() {
        let merged = ConfigMerger::merge(vec![
            source(
                1,
                Config {
                    output_format: Some(OutputFormat::Json),
                    ..Default::default()
                },
            ),
            source(
                2,
                Config {
                    output_format: Some(OutputFormat::Yaml),
                    ..Default::default()
                },
            ),
        ]);
        assert_eq!(merged.output_format, Some(OutputFormat::Yaml));
    }

    #[test]
    fn test_missing_field_keeps_lower_value() {
        let mut target = Config {
            output_format: Some(OutputFormat::Csv),
            ..Default::default()
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.output_format, Some(OutputFormat::Csv));
    }

    #[test]
    fn test_build_settings_merge_field_by_field() {
        let mut target = Config {
            build_settings: Some(BuildSettings {
                built_products_dir: Some(PathBuf::from("/user/products")),
                sdk_root: Some(PathBuf::from("/user/sdk")),
                ..Default::default()
            }),
            ..Default::default()
        };
        let project = Config {
            build_settings: Some(BuildSettings {
                sdk_root: Some(PathBuf::from("/project/sdk")),
                developer_dir: Some(PathBuf::from("/project/developer")),
                ..Default::default()
            }),
            ..Default::default()
        };

        ConfigMerger::merge_into(&mut target, &project);

        let settings = target.build_settings.unwrap();
        assert_eq!(
            settings.built_products_dir,
            Some(PathBuf::from("/user/products"))
        );
        assert_eq!(settings.sdk_root, Some(PathBuf::from("/project/sdk")));
        assert_eq!(
            settings.developer_dir,
            Some(PathBuf::from("/project/developer"))
        );
    }
}
