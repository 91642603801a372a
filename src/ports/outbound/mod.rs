/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, child processes, console).
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;
pub mod project_locator;
pub mod provenance_provider;
pub mod usage_report_reader;

pub use formatter::ReportFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
pub use project_locator::ProjectLocator;
pub use provenance_provider::ProvenanceProvider;
pub use usage_report_reader::UsageReportReader;
