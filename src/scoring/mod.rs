pub mod engine;
pub mod features;
pub mod statistics;
pub mod types;

pub use engine::{MAX_OPPORTUNITIES, compute};
pub use features::NO_TOKEN;
pub use statistics::{FeatureStats, SampleStatistics};
pub use types::{FeatureVector, OpportunityItem, Weights};
