//! Reading and writing project snapshots.
//!
//! A snapshot is the serde form of a [`Project`]: its root directory, the
//! container roles and the object arena with each object's referrers. YAML
//! and JSON are supported; the format is chosen from the file extension.
//!
//! ```yaml
//! root_dir: /project_dir
//! roles:
//!   main_group: "MAIN"
//! objects:
//!   MAIN:
//!     kind: group
//!   PARENT:
//!     kind: group
//!     name: Parent
//!     path: Parent
//!     referrers: [MAIN]
//! ```
//!
//! A relative `root_dir` is taken relative to the directory holding the
//! snapshot file. It is written back as it was read.

use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::project::{Project, ProjectDocument};

/// Serialization format of a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentFormat {
    /// YAML (`.yaml`, `.yml` and anything unrecognized).
    Yaml,
    /// JSON (`.json`).
    Json,
}

impl DocumentFormat {
    /// Pick the format from a file extension.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::DocumentFormat;
    /// use std::path::Path;
    ///
    /// assert_eq!(DocumentFormat::from_path(Path::new("app.json")), DocumentFormat::Json);
    /// assert_eq!(DocumentFormat::from_path(Path::new("app.yaml")), DocumentFormat::Yaml);
    /// assert_eq!(DocumentFormat::from_path(Path::new("app")), DocumentFormat::Yaml);
    /// ```
    #[must_use]
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("json") => Self::Json,
            _ => Self::Yaml,
        }
    }
}

/// Parse a snapshot and check its structure.
///
/// # Errors
///
/// Returns a parse error for malformed input and [`Error::Validation`] when
/// roles or referrers point at missing objects.
pub fn from_str(contents: &str, format: DocumentFormat) -> Result<Project> {
    let document: ProjectDocument = match format {
        DocumentFormat::Yaml => serde_yaml::from_str(contents)?,
        DocumentFormat::Json => serde_json::from_str(contents)?,
    };
    Project::try_from(document)
}

/// Render a snapshot.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_string(project: &Project, format: DocumentFormat) -> Result<String> {
    Ok(match format {
        DocumentFormat::Yaml => serde_yaml::to_string(project)?,
        DocumentFormat::Json => {
            let mut json = serde_json::to_string_pretty(project)?;
            json.push('\n');
            json
        }
    })
}

/// Load a snapshot file.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if the file does not exist, and the errors of
/// [`from_str`] otherwise.
///
/// # Examples
///
/// ```no_run
/// use pbxtree::project::document;
/// use std::path::Path;
///
/// let project = document::load(Path::new("App.pbxtree.yaml")).unwrap();
/// println!("{} objects", project.len());
/// ```
pub fn load(path: &Path) -> Result<Project> {
    if !path.exists() {
        return Err(Error::NotFound {
            resource: format!("project snapshot {}", path.display()),
        });
    }
    let contents = fs::read_to_string(path)?;
    let mut project = from_str(&contents, DocumentFormat::from_path(path))?;

    project.anchor_root_dir(path.parent().unwrap_or_else(|| Path::new(".")));

    log::debug!(
        "loaded {} objects from {}",
        project.len(),
        path.display()
    );
    Ok(project)
}

/// Write a snapshot file, replacing any existing content.
///
/// # Errors
///
/// Returns an error if serialization or the write fails.
pub fn save(project: &Project, path: &Path) -> Result<()> {
    let contents = to_string(project, DocumentFormat::from_path(path))?;
    fs::write(path, contents)?;
    log::debug!("saved {} objects to {}", project.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hierarchy::{hierarchy_path, parent, Parent};
    use crate::project::{ContainerRole, ObjectId};
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SNAPSHOT: &str = r"
root_dir: /project_dir
roles:
  main_group: MAIN
objects:
  MAIN:
    kind: group
  PARENT:
    kind: group
    name: Parent
    path: Parent
    referrers: [MAIN]
  FILE:
    kind: file_reference
    path: Classes/a.m
    referrers: [PARENT]
";

    #[test]
    fn test_parse_yaml_snapshot() {
        let project = from_str(SNAPSHOT, DocumentFormat::Yaml).unwrap();
        assert_eq!(project.len(), 3);
        assert_eq!(project.main_group(), &ObjectId::new("MAIN"));
        assert_eq!(project.role(ContainerRole::ProductsGroup), None);

        let file = ObjectId::new("FILE");
        assert_eq!(
            parent(&project, &file).unwrap(),
            Parent::Object(ObjectId::new("PARENT"))
        );
        assert_eq!(hierarchy_path(&project, &file).unwrap(), "/Parent/a.m");
        assert_eq!(project.object(&file).unwrap().source_tree, "<group>");
    }

    #[test]
    fn test_json_round_trip_preserves_graph() {
        let project = from_str(SNAPSHOT, DocumentFormat::Yaml).unwrap();
        let json = to_string(&project, DocumentFormat::Json).unwrap();
        let reloaded = from_str(&json, DocumentFormat::Json).unwrap();
        assert_eq!(reloaded, project);
    }

    #[test]
    fn test_missing_main_group_rejected() {
        let err = from_str("root_dir: /p\nroles: {}\nobjects: {}\n", DocumentFormat::Yaml)
            .unwrap_err();
        assert!(matches!(err, Error::Validation { .. }));
    }

    #[test]
    fn test_dangling_referrer_rejected() {
        let snapshot = SNAPSHOT.replace("referrers: [PARENT]", "referrers: [GHOST]");
        assert!(from_str(&snapshot, DocumentFormat::Yaml).is_err());
    }

    #[test]
    fn test_malformed_input() {
        assert!(matches!(
            from_str("{ not json", DocumentFormat::Json),
            Err(Error::Json(_))
        ));
        assert!(matches!(
            from_str("objects: [", DocumentFormat::Yaml),
            Err(Error::Yaml(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("App.pbxtree.json");

        let mut project = Project::new("/project_dir");
        let main = project.main_group().clone();
        project.new_group(&main, "Classes").unwrap();

        save(&project, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded.len(), project.len());
        assert_eq!(loaded.root_dir(), Path::new("/project_dir"));
    }

    #[test]
    fn test_relative_root_dir_resolved_against_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("App.yaml");
        fs::write(
            &path,
            "root_dir: ./App\nroles:\n  main_group: MAIN\nobjects:\n  MAIN:\n    kind: group\n",
        )
        .unwrap();

        let project = load(&path).unwrap();
        assert_eq!(project.root_dir(), temp_dir.path().join("App"));
    }

    #[test]
    fn test_relative_root_dir_survives_save() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("App.yaml");
        fs::write(
            &path,
            "root_dir: ./App\nroles:\n  main_group: MAIN\nobjects:\n  MAIN:\n    kind: group\n",
        )
        .unwrap();

        let mut project = load(&path).unwrap();
        let main = project.main_group().clone();
        project.new_group(&main, "Classes").unwrap();
        save(&project, &path).unwrap();

        let saved = fs::read_to_string(&path).unwrap();
        assert!(saved.contains("root_dir: ./App"), "saved snapshot:\n{saved}");
        assert!(!saved.contains(&temp_dir.path().display().to_string()));

        let reloaded = load(&path).unwrap();
        assert_eq!(reloaded.stored_root_dir(), Path::new("./App"));
        assert_eq!(reloaded.root_dir(), temp_dir.path().join("App"));
        assert_eq!(reloaded.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let err = load(&PathBuf::from("/nonexistent/App.yaml")).unwrap_err();
        assert!(err.is_not_found());
    }
}
