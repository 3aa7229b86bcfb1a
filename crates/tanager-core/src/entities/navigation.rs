use serde::Serialize;

/// A clickable sidebar link: label plus target path.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct NavigationEntry {
    pub label: String,
    pub href: String,
}

impl NavigationEntry {
    /// Entry pointing at `/<project>`.
    #[must_use]
    pub fn for_project(name: &str) -> Self {
        Self {
            label: name.to_string(),
            href: format!("/{name}"),
        }
    }
}
