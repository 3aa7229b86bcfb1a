//! Entity structs for all domain objects.

mod distribution;
mod navigation;
mod project;
mod statistics;

pub use distribution::{DensityCurve, DistributionSample};
pub use navigation::NavigationEntry;
pub use project::Project;
pub use statistics::{StatisticsRecord, StatisticsSeries};
