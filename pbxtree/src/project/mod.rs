//! The project object graph.
//!
//! A [`Project`] owns every [`Object`] in an id-keyed arena. Parent links are
//! not stored as pointers: each object records the set of groups that claim
//! it (its *referrers*), and the project itself may claim objects through a
//! small set of [`ContainerRole`]s. Turning those links into a strict
//! single-parent view is the job of [`crate::hierarchy`].

pub mod document;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::config::BuildSettings;
use crate::error::{Error, Result};
use crate::path::normalize::resolve_components;
use crate::path::SourceTree;

pub use document::DocumentFormat;

/// Opaque identifier of an object in the project arena.
///
/// # Examples
///
/// ```
/// use pbxtree::ObjectId;
///
/// let id = ObjectId::new("1A2B3C");
/// assert_eq!(id.as_str(), "1A2B3C");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(String);

impl ObjectId {
    /// Wrap an identifier string.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ObjectId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// The kind of a tree object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectKind {
    /// A container that can hold other objects.
    Group,
    /// A leaf referencing a file on disk.
    FileReference,
}

impl ObjectKind {
    /// Human readable label, used when an object has neither name nor path.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::FileReference => "File Reference",
        }
    }
}

/// A named reference held by the project itself rather than by a group.
///
/// Role references count as pseudo-referrers when computing an object's
/// parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainerRole {
    /// The root of the group tree.
    MainGroup,
    /// The group collecting build products.
    ProductsGroup,
}

impl ContainerRole {
    /// Every role, in declaration order.
    pub const ALL: [ContainerRole; 2] = [ContainerRole::MainGroup, ContainerRole::ProductsGroup];

    /// The key used for this role in snapshot documents.
    #[must_use]
    pub fn as_key(self) -> &'static str {
        match self {
            Self::MainGroup => "main_group",
            Self::ProductsGroup => "products_group",
        }
    }
}

impl fmt::Display for ContainerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MainGroup => write!(f, "main group"),
            Self::ProductsGroup => write!(f, "products group"),
        }
    }
}

/// A group or file in the project tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Object {
    /// What kind of object this is.
    pub kind: ObjectKind,

    /// Optional display label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Location string, interpreted according to `source_tree`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Stored source tree symbol, e.g. `<group>` or `SOURCE_ROOT`.
    #[serde(default = "default_source_tree")]
    pub source_tree: String,

    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    referrers: BTreeSet<ObjectId>,
}

fn default_source_tree() -> String {
    SourceTree::Group.as_str().to_string()
}

impl Object {
    /// Create a detached object relative to its group.
    #[must_use]
    pub fn new(kind: ObjectKind) -> Self {
        Self {
            kind,
            name: None,
            path: None,
            source_tree: default_source_tree(),
            referrers: BTreeSet::new(),
        }
    }

    /// The label shown in hierarchy paths.
    ///
    /// Falls back to the last component of `path`, then to the kind label.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::{Object, ObjectKind};
    ///
    /// let mut file = Object::new(ObjectKind::FileReference);
    /// file.path = Some("Sources/main.m".to_string());
    /// assert_eq!(file.display_name(), "main.m");
    ///
    /// file.name = Some("Entry Point".to_string());
    /// assert_eq!(file.display_name(), "Entry Point");
    /// ```
    #[must_use]
    pub fn display_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        if let Some(path) = &self.path {
            if let Some(last) = Path::new(path).file_name() {
                return last.to_string_lossy().into_owned();
            }
        }
        self.kind.label().to_string()
    }

    /// Whether this object can hold children.
    #[must_use]
    pub fn is_group(&self) -> bool {
        self.kind == ObjectKind::Group
    }

    /// The groups claiming this object as a child.
    ///
    /// Hierarchy-sensitive code should use [`crate::hierarchy::parent`]
    /// instead, which enforces the single-parent rule.
    #[must_use]
    pub fn referrers(&self) -> &BTreeSet<ObjectId> {
        &self.referrers
    }
}

/// The project object graph: arena, root directory and container roles.
///
/// # Examples
///
/// ```
/// use pbxtree::Project;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let classes = project.new_group(&main, "Classes").unwrap();
/// assert!(project.object(&classes).unwrap().referrers().contains(&main));
/// ```
///
/// Projects are read from snapshots only through [`document`], which checks
/// their structure; there is no public `Deserialize` path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Project {
    root_dir: PathBuf,

    roles: BTreeMap<ContainerRole, ObjectId>,

    objects: BTreeMap<ObjectId, Object>,

    /// `root_dir` anchored to the snapshot's directory when it was relative.
    #[serde(skip)]
    anchored_root: Option<PathBuf>,

    #[serde(skip)]
    build_settings: BuildSettings,

    #[serde(skip)]
    next_id: u64,
}

impl Project {
    /// Create a project rooted at `root_dir` with a main group and a
    /// `Products` group inside it.
    #[must_use]
    pub fn new(root_dir: impl Into<PathBuf>) -> Self {
        let mut project = Self {
            root_dir: root_dir.into(),
            roles: BTreeMap::new(),
            objects: BTreeMap::new(),
            anchored_root: None,
            build_settings: BuildSettings::default(),
            next_id: 0,
        };

        let main = project.allocate_id();
        project
            .objects
            .insert(main.clone(), Object::new(ObjectKind::Group));
        project.roles.insert(ContainerRole::MainGroup, main.clone());

        let products = project.allocate_id();
        let mut group = Object::new(ObjectKind::Group);
        group.name = Some("Products".to_string());
        group.referrers.insert(main);
        project.objects.insert(products.clone(), group);
        project.roles.insert(ContainerRole::ProductsGroup, products);

        project
    }

    /// The directory containing the project; base of `SOURCE_ROOT`.
    ///
    /// For a snapshot with a relative `root_dir` this is the directory
    /// resolved against the snapshot's location.
    #[must_use]
    pub fn root_dir(&self) -> &Path {
        self.anchored_root.as_deref().unwrap_or(self.root_dir.as_path())
    }

    /// The root directory as written in the snapshot, possibly relative.
    #[must_use]
    pub fn stored_root_dir(&self) -> &Path {
        &self.root_dir
    }

    /// Resolve a relative stored `root_dir` against `base`.
    ///
    /// The stored value is kept, so saving the project writes it back
    /// unchanged. Absolute roots are left alone.
    pub fn anchor_root_dir(&mut self, base: &Path) {
        self.anchored_root = self
            .root_dir
            .is_relative()
            .then(|| resolve_components(&base.join(&self.root_dir)));
    }

    /// Build-setting overrides used to resolve build-variable source trees.
    #[must_use]
    pub fn build_settings(&self) -> &BuildSettings {
        &self.build_settings
    }

    /// Replace the build-setting overrides.
    pub fn set_build_settings(&mut self, settings: BuildSettings) {
        self.build_settings = settings;
    }

    /// Builder-style variant of [`Project::set_build_settings`].
    #[must_use]
    pub fn with_build_settings(mut self, settings: BuildSettings) -> Self {
        self.build_settings = settings;
        self
    }

    /// The root of the group tree.
    ///
    /// # Panics
    ///
    /// Never panics: [`Project::new`] creates the role and [`document`]
    /// rejects snapshots without it, and no other constructor exists.
    #[must_use]
    pub fn main_group(&self) -> &ObjectId {
        &self.roles[&ContainerRole::MainGroup]
    }

    /// The products group, if the project designates one.
    #[must_use]
    pub fn products_group(&self) -> Option<&ObjectId> {
        self.roles.get(&ContainerRole::ProductsGroup)
    }

    /// The object held in `role`, if any.
    #[must_use]
    pub fn role(&self, role: ContainerRole) -> Option<&ObjectId> {
        self.roles.get(&role)
    }

    /// Designate `id` for `role`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownObject`] if `id` is not in the project.
    pub fn set_role(&mut self, role: ContainerRole, id: &ObjectId) -> Result<()> {
        self.object(id)?;
        self.roles.insert(role, id.clone());
        Ok(())
    }

    /// The roles through which the project claims `id`.
    pub fn roles_for<'a>(&'a self, id: &'a ObjectId) -> impl Iterator<Item = ContainerRole> + 'a {
        self.roles
            .iter()
            .filter(move |(_, held)| *held == id)
            .map(|(role, _)| *role)
    }

    /// Look up an object.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownObject`] if `id` is not in the project.
    pub fn object(&self, id: &ObjectId) -> Result<&Object> {
        self.objects.get(id).ok_or_else(|| Error::UnknownObject {
            id: id.to_string(),
        })
    }

    /// Look up an object for modification.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownObject`] if `id` is not in the project.
    pub fn object_mut(&mut self, id: &ObjectId) -> Result<&mut Object> {
        self.objects.get_mut(id).ok_or_else(|| Error::UnknownObject {
            id: id.to_string(),
        })
    }

    /// Whether `id` is in the project.
    #[must_use]
    pub fn contains(&self, id: &ObjectId) -> bool {
        self.objects.contains_key(id)
    }

    /// Every object, in id order.
    pub fn objects(&self) -> impl Iterator<Item = (&ObjectId, &Object)> {
        self.objects.iter()
    }

    /// Number of objects in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Whether the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Create a named group inside `parent`.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not exist or is not a group.
    pub fn new_group(&mut self, parent: &ObjectId, name: &str) -> Result<ObjectId> {
        let mut group = Object::new(ObjectKind::Group);
        group.name = Some(name.to_string());
        self.insert_child(parent, group)
    }

    /// Create a file reference inside `parent`, relative to its group.
    ///
    /// # Errors
    ///
    /// Returns an error if `parent` does not exist or is not a group.
    pub fn new_file(&mut self, parent: &ObjectId, path: &str) -> Result<ObjectId> {
        let mut file = Object::new(ObjectKind::FileReference);
        file.path = Some(path.to_string());
        self.insert_child(parent, file)
    }

    fn insert_child(&mut self, parent: &ObjectId, mut object: Object) -> Result<ObjectId> {
        let holder = self.object(parent)?;
        if !holder.is_group() {
            return Err(Error::NotAGroup {
                object: object.display_name(),
                target: self.describe(parent),
            });
        }
        let id = self.allocate_id();
        object.referrers.insert(parent.clone());
        self.objects.insert(id.clone(), object);
        Ok(id)
    }

    /// Record that `referrer` claims `id`.
    ///
    /// This is raw graph plumbing: it performs no single-parent check.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownObject`] if either id is not in the project.
    pub fn add_referrer(&mut self, id: &ObjectId, referrer: &ObjectId) -> Result<()> {
        self.object(referrer)?;
        self.object_mut(id)?.referrers.insert(referrer.clone());
        Ok(())
    }

    /// Remove the claim of `referrer` on `id`. Returns whether it was present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownObject`] if `id` is not in the project.
    pub fn remove_referrer(&mut self, id: &ObjectId, referrer: &ObjectId) -> Result<bool> {
        Ok(self.object_mut(id)?.referrers.remove(referrer))
    }

    /// A short description of an object for messages: display name and id.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::{ObjectId, Project};
    ///
    /// let mut project = Project::new("/project_dir");
    /// let main = project.main_group().clone();
    /// let id = project.new_group(&main, "Classes").unwrap();
    /// assert_eq!(project.describe(&id), format!("`Classes` ({id})"));
    /// assert_eq!(project.describe(&ObjectId::new("nope")), "`nope`");
    /// ```
    #[must_use]
    pub fn describe(&self, id: &ObjectId) -> String {
        match self.objects.get(id) {
            Some(object) => format!("`{}` ({id})", object.display_name()),
            None => format!("`{id}`"),
        }
    }

    /// Check the arena-level structure of a loaded project: the main group
    /// exists and every role and referrer points at a group in the arena.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] describing the first problem found.
    pub fn validate_structure(&self) -> Result<()> {
        let Some(main) = self.roles.get(&ContainerRole::MainGroup) else {
            return Err(Error::Validation {
                field: "roles.main_group".into(),
                message: "project has no main group".into(),
            });
        };
        if !self.objects.get(main).is_some_and(Object::is_group) {
            return Err(Error::Validation {
                field: "roles.main_group".into(),
                message: format!("main group {main} is not a group in the project"),
            });
        }

        for (role, id) in &self.roles {
            if !self.objects.contains_key(id) {
                return Err(Error::Validation {
                    field: format!("roles.{}", role.as_key()),
                    message: format!("{role} refers to unknown object {id}"),
                });
            }
        }

        for (id, object) in &self.objects {
            for referrer in &object.referrers {
                if !self.objects.get(referrer).is_some_and(Object::is_group) {
                    return Err(Error::Validation {
                        field: format!("objects.{id}.referrers"),
                        message: format!("referrer {referrer} is not a group in the project"),
                    });
                }
            }
        }

        Ok(())
    }

    fn allocate_id(&mut self) -> ObjectId {
        loop {
            self.next_id += 1;
            let id = ObjectId(format!("{:024X}", self.next_id));
            if !self.objects.contains_key(&id) {
                return id;
            }
        }
    }
}

/// Serialized form of a [`Project`], before its structure is checked.
#[derive(Debug, Deserialize)]
pub(crate) struct ProjectDocument {
    root_dir: PathBuf,

    #[serde(default)]
    roles: BTreeMap<ContainerRole, ObjectId>,

    #[serde(default)]
    objects: BTreeMap<ObjectId, Object>,
}

impl TryFrom<ProjectDocument> for Project {
    type Error = Error;

    fn try_from(document: ProjectDocument) -> Result<Self> {
        let project = Self {
            root_dir: document.root_dir,
            roles: document.roles,
            objects: document.objects,
            anchored_root: None,
            build_settings: BuildSettings::default(),
            next_id: 0,
        };
        project.validate_structure()?;
        Ok(project)
    }
}
