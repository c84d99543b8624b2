//! Error types for the pbxtree library.
//!
//! This module provides the error hierarchy for all resolver operations,
//! using `thiserror` for ergonomic error handling. Every variant belongs to one
//! [`ErrorCategory`], which callers use to tell data problems (integrity,
//! resolution) apart from programming problems (bad arguments).

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pbxtree error.
///
/// # Examples
///
/// ```
/// use pbxtree::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pbxtree library.
#[derive(Debug, Error)]
pub enum Error {
    /// An object does not have exactly one identifiable parent.
    #[error("consistency issue: {violation} for object {object}")]
    Integrity {
        /// Description of the offending object.
        object: String,
        /// What is wrong with the object's referrers.
        violation: IntegrityViolation,
    },

    /// The stored source tree symbol is not one the resolver understands.
    #[error("unable to compute the source tree for object {object}: `{source_tree}`")]
    UnresolvableSourceTree {
        /// Description of the offending object.
        object: String,
        /// The stored source tree symbol.
        source_tree: String,
    },

    /// A move was requested without an object.
    #[error("attempt to move nil object")]
    NilObject,

    /// A move was requested without a destination.
    #[error("attempt to move {object} to nil parent")]
    NilParent {
        /// Description of the object being moved.
        object: String,
    },

    /// A move was requested with the object as its own destination.
    #[error("attempt to move {object} to itself")]
    MoveToSelf {
        /// Description of the object being moved.
        object: String,
    },

    /// A move would place an object below one of its own descendants.
    #[error("attempt to move {object} to a child object {target}")]
    MoveToChild {
        /// Description of the object being moved.
        object: String,
        /// Description of the requested destination.
        target: String,
    },

    /// The requested destination cannot hold children.
    #[error("attempt to move {object} into {target}, which is not a group")]
    NotAGroup {
        /// Description of the object being moved.
        object: String,
        /// Description of the requested destination.
        target: String,
    },

    /// A relative path was given together with the absolute source tree.
    #[error("attempt to set a relative path for an absolute source tree: `{path}`")]
    RelativePathForAbsoluteSourceTree {
        /// The rejected path.
        path: String,
    },

    /// The source tree option could not be recognized.
    #[error("unrecognized source tree option: {}", .option.as_deref().unwrap_or("<none>"))]
    UnrecognizedSourceTreeOption {
        /// The rejected option, if any was given.
        option: Option<String>,
    },

    /// An object id does not exist in the project.
    #[error("unknown object {id}")]
    UnknownObject {
        /// The missing id.
        id: String,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A YAML document or configuration file could not be processed.
    #[error("configuration error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A JSON document could not be processed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// What is wrong with an object's parent links.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IntegrityViolation {
    /// No referrer claims the object.
    NoParent,
    /// More than one group claims the object.
    MultipleParents {
        /// Descriptions of every claiming referrer.
        referrers: Vec<String>,
    },
    /// The object lies on a loop of parent links.
    Cycle,
}

impl fmt::Display for IntegrityViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoParent => write!(f, "no parent"),
            Self::MultipleParents { referrers } => {
                write!(f, "multiple parents ({})", referrers.join(", "))
            }
            Self::Cycle => write!(f, "cyclic parent chain"),
        }
    }
}

/// Broad classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Referrer counts are not exactly one.
    Integrity,
    /// A source tree could not be resolved.
    Resolution,
    /// The caller supplied invalid arguments.
    Argument,
    /// Configuration or document parsing failed.
    Configuration,
    /// Reading or writing files failed.
    Io,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integrity => write!(f, "integrity"),
            Self::Resolution => write!(f, "resolution"),
            Self::Argument => write!(f, "argument"),
            Self::Configuration => write!(f, "configuration"),
            Self::Io => write!(f, "io"),
        }
    }
}

impl Error {
    /// Classify this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::{Error, ErrorCategory};
    ///
    /// assert_eq!(Error::NilObject.category(), ErrorCategory::Argument);
    /// ```
    #[must_use]
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Integrity { .. } => ErrorCategory::Integrity,
            Self::UnresolvableSourceTree { .. } => ErrorCategory::Resolution,
            Self::NilObject
            | Self::NilParent { .. }
            | Self::MoveToSelf { .. }
            | Self::MoveToChild { .. }
            | Self::NotAGroup { .. }
            | Self::RelativePathForAbsoluteSourceTree { .. }
            | Self::UnrecognizedSourceTreeOption { .. }
            | Self::UnknownObject { .. }
            | Self::InvalidPath { .. }
            | Self::NotFound { .. } => ErrorCategory::Argument,
            Self::Validation { .. } | Self::Yaml(_) | Self::Json(_) => {
                ErrorCategory::Configuration
            }
            Self::Io(_) => ErrorCategory::Io,
        }
    }

    /// Check if error reports a parent integrity violation.
    #[must_use]
    pub fn is_integrity(&self) -> bool {
        self.category() == ErrorCategory::Integrity
    }

    /// Check if error reports invalid call arguments.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        self.category() == ErrorCategory::Argument
    }

    /// Check if error indicates a missing object or lookup target.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::Error;
    ///
    /// let err = Error::UnknownObject { id: "ABC".to_string() };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UnknownObject { .. } | Self::NotFound { .. })
    }
}
