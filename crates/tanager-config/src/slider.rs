//! Generation slider configuration.

use serde::{Deserialize, Serialize};

const fn default_mark_budget() -> usize {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SliderConfig {
    /// Maximum number of labelled tick marks before the step is widened.
    #[serde(default = "default_mark_budget")]
    pub mark_budget: usize,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            mark_budget: default_mark_budget(),
        }
    }
}
