//! Sidebar navigation.

use std::path::Path;

use tanager_core::entities::NavigationEntry;

/// One entry per name, in the given order, targeting `/<name>`.
///
/// No sorting and no deduplication happen here.
#[must_use]
pub fn build_navigation<S: AsRef<str>>(names: &[S]) -> Vec<NavigationEntry> {
    names
        .iter()
        .map(|name| NavigationEntry::for_project(name.as_ref()))
        .collect()
}

/// Enumerate projects under `root`, keep those containing `filter`, sort, and
/// build entries.
///
/// The filter is a case-sensitive substring test. A listing failure is logged
/// and produces an empty navigation so the page can still render.
#[must_use]
pub fn navigation_for(root: &Path, filter: Option<&str>) -> Vec<NavigationEntry> {
    let projects = match tanager_data::list_projects(root) {
        Ok(projects) => projects,
        Err(error) => {
            tracing::error!(%error, "project listing failed");
            return Vec::new();
        }
    };

    let mut names: Vec<String> = projects
        .into_iter()
        .map(|p| p.name)
        .filter(|name| filter.is_none_or(|needle| name.contains(needle)))
        .collect();
    names.sort();
    build_navigation(&names)
}
