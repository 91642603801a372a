mod repo_classifier;
mod usage_aggregator;

pub use repo_classifier::{RepoClassifier, CURRENT_REPO, UNKNOWN_REPO};
pub use usage_aggregator::UsageAggregator;
