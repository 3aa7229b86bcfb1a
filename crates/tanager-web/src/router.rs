//! URL to page/endpoint resolution.
//!
//! Two page states exist: the landing page (no project selected) and a
//! project view. Any non-empty path selects a project, existing or not; the
//! loaders report missing projects on the page itself.

/// Internal endpoint backing the sidebar filter and refresh controls.
pub const NAV_ENDPOINT: &str = "/_tanager/nav";

/// Which page a path selects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Default,
    Project(String),
}

impl Route {
    /// Percent-decode `path`, strip leading/trailing separators and classify.
    #[must_use]
    pub fn from_path(path: &str) -> Self {
        let decoded = urlencoding::decode(path)
            .map_or_else(|_| path.to_string(), std::borrow::Cow::into_owned);
        let name = decoded.trim_matches('/');
        if name.is_empty() {
            Self::Default
        } else {
            Self::Project(name.to_string())
        }
    }
}

/// What a request URL asks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    Page {
        route: Route,
        generation: Option<usize>,
    },
    Navigation {
        filter: Option<String>,
    },
    Favicon,
}

impl Endpoint {
    /// Classify a request target such as `/beta?generation=3`.
    #[must_use]
    pub fn from_url(url: &str) -> Self {
        let (path, query) = url.split_once('?').unwrap_or((url, ""));

        match path {
            "/favicon.ico" => Self::Favicon,
            NAV_ENDPOINT => Self::Navigation {
                filter: query_param(query, "filter"),
            },
            _ => Self::Page {
                route: Route::from_path(path),
                generation: query_param(query, "generation").and_then(|g| g.parse().ok()),
            },
        }
    }
}

/// Decoded value of the first `key=value` pair named `key`.
#[must_use]
pub fn query_param(query: &str, key: &str) -> Option<String> {
    query
        .split('&')
        .map(|pair| pair.split_once('=').unwrap_or((pair, "")))
        .find(|(k, _)| *k == key)
        .map(|(_, value)| {
            let value = value.replace('+', " ");
            urlencoding::decode(&value).map_or(value.clone(), std::borrow::Cow::into_owned)
        })
}
