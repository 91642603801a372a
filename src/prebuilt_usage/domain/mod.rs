pub mod report_metadata;
pub mod repo;
pub mod source_link;
pub mod usage_record;

pub use report_metadata::{ReportMetadata, ReportSummary};
pub use repo::{DependencyType, FileUsage, Package, Repo};
pub use source_link::SourceLinkTemplate;
pub use usage_record::{UsageData, UsageRecord, ValidUsage};
