//! Configuration schema definitions.
//!
//! This module defines the configuration structure for pbxtree: build
//! setting overrides used when resolving real paths, and the preferred
//! output format of the command line tool.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::path::SourceTree;

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use pbxtree::config::{BuildSettings, Config, OutputFormat};
/// use std::path::PathBuf;
///
/// let config = Config {
///     build_settings: Some(BuildSettings {
///         built_products_dir: Some(PathBuf::from("/build/Products")),
///         ..Default::default()
///     }),
///     output_format: Some(OutputFormat::Json),
/// };
/// assert_eq!(config.output_format, Some(OutputFormat::Json));
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Base directories for build-variable source trees.
    pub build_settings: Option<BuildSettings>,

    /// Default output format for listing commands.
    pub output_format: Option<OutputFormat>,
}

impl Config {
    /// The effective build settings, empty when none were configured.
    #[must_use]
    pub fn effective_build_settings(&self) -> BuildSettings {
        self.build_settings.clone().unwrap_or_default()
    }

    /// The effective output format, [`OutputFormat::Text`] by default.
    #[must_use]
    pub fn effective_output_format(&self) -> OutputFormat {
        self.output_format.unwrap_or_default()
    }
}

/// Directories substituted for build-variable source trees.
///
/// Without an entry, `BUILT_PRODUCTS_DIR`, `DEVELOPER_DIR` and `SDKROOT`
/// resolve against the project root.
///
/// # Examples
///
/// ```
/// use pbxtree::config::BuildSettings;
/// use pbxtree::SourceTree;
/// use std::path::{Path, PathBuf};
///
/// let settings = BuildSettings {
///     sdk_root: Some(PathBuf::from("/sdk")),
///     ..Default::default()
/// };
/// assert_eq!(settings.base_for(SourceTree::SdkRoot), Some(Path::new("/sdk")));
/// assert_eq!(settings.base_for(SourceTree::DeveloperDir), None);
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct BuildSettings {
    /// Value of `BUILT_PRODUCTS_DIR`.
    pub built_products_dir: Option<PathBuf>,

    /// Value of `DEVELOPER_DIR`.
    pub developer_dir: Option<PathBuf>,

    /// Value of `SDKROOT`.
    pub sdk_root: Option<PathBuf>,
}

impl BuildSettings {
    /// The configured directory for `tree`, if `tree` is a build variable
    /// and a value is set.
    #[must_use]
    pub fn base_for(&self, tree: SourceTree) -> Option<&Path> {
        match tree {
            SourceTree::BuiltProducts => self.built_products_dir.as_deref(),
            SourceTree::DeveloperDir => self.developer_dir.as_deref(),
            SourceTree::SdkRoot => self.sdk_root.as_deref(),
            SourceTree::Absolute | SourceTree::Group | SourceTree::Project => None,
        }
    }

    /// Whether no directory is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.built_products_dir.is_none() && self.developer_dir.is_none() && self.sdk_root.is_none()
    }
}

/// Output format for listing commands.
///
/// # Examples
///
/// ```
/// use pbxtree::config::OutputFormat;
///
/// let format = OutputFormat::Json;
/// assert_eq!(format.to_string(), "json");
/// assert_eq!("yaml".parse::<OutputFormat>().unwrap(), OutputFormat::Yaml);
/// ```
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable aligned text.
    #[default]
    Text,
    /// JSON output format.
    Json,
    /// YAML output format.
    Yaml,
    /// CSV output format.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Text => write!(f, "text"),
            Self::Json => write!(f, "json"),
            Self::Yaml => write!(f, "yaml"),
            Self::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            "yaml" => Ok(Self::Yaml),
            "csv" => Ok(Self::Csv),
            _ => Err(format!(
                "invalid output format '{s}' (expected text, json, yaml or csv)"
            )),
        }
    }
}
