//! Project enumeration under the data root.

use std::path::{Component, Path, PathBuf};

use tanager_core::entities::Project;

use crate::error::LoadError;

/// Directories directly under `root`, one per project.
///
/// A missing root yields an empty list. Order follows the directory listing;
/// callers sort when they need a stable order.
///
/// # Errors
///
/// Returns `LoadError::ProjectListing` if `root` exists but cannot be read.
pub fn list_projects(root: &Path) -> Result<Vec<Project>, LoadError> {
    if !root.exists() {
        tracing::debug!(root = %root.display(), "data root does not exist");
        return Ok(Vec::new());
    }

    let listing_error = |source| LoadError::ProjectListing {
        root: root.to_path_buf(),
        source,
    };

    let mut projects = Vec::new();
    for entry in std::fs::read_dir(root).map_err(listing_error)? {
        let entry = entry.map_err(listing_error)?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => projects.push(Project::new(name, path)),
            Err(raw) => {
                tracing::warn!(name = ?raw, "skipping project directory with non UTF-8 name");
            }
        }
    }
    Ok(projects)
}

/// Resolve a project identifier taken from a URL to its directory.
///
/// Identifiers must stay inside `root`: only plain path segments are allowed.
/// The directory is not required to exist.
///
/// # Errors
///
/// Returns `LoadError::InvalidProjectName` for empty, absolute or dot-segment names.
pub fn project_dir(root: &Path, name: &str) -> Result<PathBuf, LoadError> {
    let relative = Path::new(name);
    let plain = relative
        .components()
        .all(|c| matches!(c, Component::Normal(_)));

    if name.is_empty() || !plain {
        return Err(LoadError::InvalidProjectName {
            name: name.to_string(),
        });
    }
    Ok(root.join(relative))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn lists_only_directories() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join("beta")).expect("dir should create");
        std::fs::create_dir(temp.path().join("alpha")).expect("dir should create");
        std::fs::write(temp.path().join("README.md"), "notes").expect("file should write");

        let mut names: Vec<_> = list_projects(temp.path())
            .expect("listing should succeed")
            .into_iter()
            .map(|p| p.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["alpha".to_string(), "beta".to_string()]);
    }

    #[test]
    fn missing_root_is_empty() {
        let temp = TempDir::new().expect("tempdir should create");
        let projects = list_projects(&temp.path().join("nope")).expect("no error for missing root");
        assert!(projects.is_empty());
    }

    #[test]
    fn root_that_is_a_file_is_a_listing_error() {
        let temp = TempDir::new().expect("tempdir should create");
        let file = temp.path().join("root.txt");
        std::fs::write(&file, "").expect("file should write");

        let err = list_projects(&file).unwrap_err();
        assert!(matches!(err, LoadError::ProjectListing { .. }));
    }

    #[test]
    fn project_paths_point_into_root() {
        let temp = TempDir::new().expect("tempdir should create");
        std::fs::create_dir(temp.path().join("alpha")).expect("dir should create");

        let projects = list_projects(temp.path()).expect("listing should succeed");
        assert_eq!(projects.len(), 1);
        assert_eq!(projects[0].path, temp.path().join("alpha"));
        assert!(projects[0].exists());
    }

    #[rstest]
    #[case("alpha", true)]
    #[case("group/run-1", true)]
    #[case("", false)]
    #[case("..", false)]
    #[case("alpha/../../etc", false)]
    #[case("./alpha", false)]
    #[case("/etc", false)]
    fn project_dir_accepts_plain_segments_only(#[case] name: &str, #[case] ok: bool) {
        let root = Path::new("/data");
        let resolved = project_dir(root, name);
        assert_eq!(resolved.is_ok(), ok, "{name}");
        if let Ok(path) = resolved {
            assert!(path.starts_with(root));
        }
    }
}
