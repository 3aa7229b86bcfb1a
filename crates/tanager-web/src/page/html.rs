//! Small HTML helpers shared by the page builders.

use std::fmt::{self, Write};

use tanager_data::LoadError;

#[must_use]
pub fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Stable identifier for an error kind, exposed as `data-error`.
#[must_use]
pub const fn error_kind(error: &LoadError) -> &'static str {
    match error {
        LoadError::NoStatisticsFile { .. } => "no-statistics-file",
        LoadError::MalformedStatisticsFile { .. } => "malformed-statistics-file",
        LoadError::StatisticsFileRead { .. } => "statistics-file-read",
        LoadError::DistributionData { .. } => "distribution-data",
        LoadError::ProjectListing { .. } => "project-listing",
        LoadError::InvalidPattern { .. } => "invalid-pattern",
        LoadError::InvalidProjectName { .. } => "invalid-project-name",
    }
}

/// Labelled error element shown in place of a chart.
pub fn error_message(out: &mut String, error: &LoadError) -> fmt::Result {
    writeln!(
        out,
        "<h3 class=\"message error\" data-error=\"{}\">ERROR: {}</h3>",
        error_kind(error),
        escape(&error.to_string())
    )
}

/// Neutral note, e.g. for an empty but valid file.
pub fn note(out: &mut String, class: &str, text: &str) -> fmt::Result {
    writeln!(out, "<p class=\"message {class}\">{}</p>", escape(text))
}
