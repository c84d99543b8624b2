//! Configuration system for pbxtree.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML configuration files (user config and project files)
//! - Environment variable overrides
//! - Programmatic configuration via builder pattern
//! - Validation of build-setting paths
//!
//! # Configuration Precedence
//!
//! Configuration is merged from multiple sources with the following precedence
//! (highest to lowest):
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`PBXTREE_*`)
//! 3. Explicit files (via `ConfigBuilder::with_file`, the CLI's `--config`)
//! 4. Private project config (`pbxtree.local.yaml`)
//! 5. Project config (`pbxtree.yaml`)
//! 6. User config (`~/.pbxtree/config.yaml`)
//! 7. Built-in defaults
//!
//! # Examples
//!
//! Loading from a specific directory:
//!
//! ```no_run
//! use pbxtree::config::ConfigBuilder;
//! use std::path::Path;
//!
//! let config = ConfigBuilder::new()
//!     .with_working_dir(Path::new("/path/to/project"))
//!     .build()
//!     .unwrap();
//! println!("output format: {}", config.effective_output_format());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource};
pub use merger::ConfigMerger;
pub use schema::{BuildSettings, Config, OutputFormat};
pub use validator::ConfigValidator;
