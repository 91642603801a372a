/// Mock implementations for testing
mod mock_progress_reporter;
mod mock_project_locator;
mod mock_provenance_provider;
mod mock_usage_report_reader;

pub use mock_progress_reporter::MockProgressReporter;
pub use mock_project_locator::MockProjectLocator;
pub use mock_provenance_provider::MockProvenanceProvider;
pub use mock_usage_report_reader::MockUsageReportReader;
