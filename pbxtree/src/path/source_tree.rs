//! Symbolic roots that object paths are relative to.
//!
//! Every recognized root appears exactly once in [`SOURCE_TREES`], which maps
//! it to the symbol stored in project data, to the option key accepted from
//! callers, and to the rule used to find its base directory.

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// A symbolic root for an object's `path`.
///
/// # Examples
///
/// ```
/// use pbxtree::path::SourceTree;
///
/// assert_eq!(SourceTree::from_symbol("<group>"), Some(SourceTree::Group));
/// assert_eq!(SourceTree::Project.as_str(), "SOURCE_ROOT");
/// assert_eq!("sdk_root".parse::<SourceTree>().unwrap(), SourceTree::SdkRoot);
/// assert!("root_of_the_internets".parse::<SourceTree>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SourceTree {
    /// The path is absolute and needs no base.
    Absolute,
    /// The path is relative to the parent group's real path.
    Group,
    /// The path is relative to the project root directory.
    Project,
    /// The path is relative to the built products directory.
    BuiltProducts,
    /// The path is relative to the developer directory.
    DeveloperDir,
    /// The path is relative to the SDK root.
    SdkRoot,
}

/// How the base directory of a source tree is found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseRule {
    /// No base; the object's own path is used as is.
    None,
    /// The real path of the object's parent.
    Parent,
    /// The project root directory.
    ProjectRoot,
    /// A build setting override, falling back to the project root directory.
    BuildSetting,
}

/// Source tree, stored symbol, option key, base rule.
pub static SOURCE_TREES: [(SourceTree, &str, &str, BaseRule); 6] = [
    (SourceTree::Absolute, "<absolute>", "absolute", BaseRule::None),
    (SourceTree::Group, "<group>", "group", BaseRule::Parent),
    (SourceTree::Project, "SOURCE_ROOT", "project", BaseRule::ProjectRoot),
    (
        SourceTree::BuiltProducts,
        "BUILT_PRODUCTS_DIR",
        "built_products",
        BaseRule::BuildSetting,
    ),
    (
        SourceTree::DeveloperDir,
        "DEVELOPER_DIR",
        "developer_dir",
        BaseRule::BuildSetting,
    ),
    (SourceTree::SdkRoot, "SDKROOT", "sdk_root", BaseRule::BuildSetting),
];

impl SourceTree {
    fn entry(self) -> &'static (SourceTree, &'static str, &'static str, BaseRule) {
        SOURCE_TREES
            .iter()
            .find(|(tree, ..)| *tree == self)
            .unwrap_or(&SOURCE_TREES[0])
    }

    /// The symbol stored in project data.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.entry().1
    }

    /// The option key accepted by [`SourceTree::from_option`].
    #[must_use]
    pub fn option_key(self) -> &'static str {
        self.entry().2
    }

    /// How the base directory of this source tree is found.
    #[must_use]
    pub fn base_rule(self) -> BaseRule {
        self.entry().3
    }

    /// Parse a stored symbol such as `<group>` or `SDKROOT`.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        SOURCE_TREES
            .iter()
            .find(|(_, stored, ..)| *stored == symbol)
            .map(|(tree, ..)| *tree)
    }

    /// Parse a caller-supplied option.
    ///
    /// Accepts option keys (`absolute`, `group`, `project`, `built_products`,
    /// `developer_dir`, `sdk_root`) as well as stored symbols.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnrecognizedSourceTreeOption`] when `option` is `None`
    /// or matches nothing.
    pub fn from_option(option: Option<&str>) -> Result<Self> {
        let Some(option) = option else {
            return Err(Error::UnrecognizedSourceTreeOption { option: None });
        };
        SOURCE_TREES
            .iter()
            .find(|(_, stored, key, _)| *key == option || *stored == option)
            .map(|(tree, ..)| *tree)
            .ok_or_else(|| Error::UnrecognizedSourceTreeOption {
                option: Some(option.to_string()),
            })
    }
}

impl FromStr for SourceTree {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_option(Some(s))
    }
}

impl fmt::Display for SourceTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
