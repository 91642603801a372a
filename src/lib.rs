//! prebuilt-report - Prebuilt package usage reporting for source-built repositories
//!
//! This library turns the prebuilt usage XML produced by a source build into a
//! Repo → Package → File report, following hexagonal architecture and
//! Domain-Driven Design principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Domain Layer** (`prebuilt_usage`): Usage records, repo classification and aggregation
//! - **Application Layer** (`application`): Use cases and application services
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): Concrete implementations of ports
//! - **Shared** (`shared`): Common utilities and error types
//!
//! # Example
//!
//! ```no_run
//! use prebuilt_report::prelude::*;
//! use std::path::PathBuf;
//!
//! # fn main() -> Result<()> {
//! // Create adapters
//! let report_reader = FileSystemReader::new();
//! let project_locator = WalkDirProjectLocator::new();
//! let provenance_provider = DotnetProvenanceProvider::from_path();
//! let progress_reporter = StderrProgressReporter::new();
//!
//! // Create use case
//! let use_case = GenerateReportUseCase::new(
//!     report_reader,
//!     project_locator,
//!     provenance_provider,
//!     progress_reporter,
//! );
//!
//! // Execute
//! let request = ReportRequest::new(
//!     PathBuf::from("prebuilt-usage.xml"),
//!     PathBuf::from("."),
//!     false,
//! );
//! let response = use_case.execute(request)?;
//!
//! // Format output
//! let formatter = HtmlFormatter::new();
//! let output = formatter.format(&ReportModel::from_response(&response))?;
//! println!("{}", output);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod ports;
pub mod prebuilt_usage;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemReader, FileSystemWriter, WalkDirProjectLocator,
    };
    pub use crate::adapters::outbound::formatters::{HtmlFormatter, JsonFormatter};
    pub use crate::adapters::outbound::process::DotnetProvenanceProvider;
    pub use crate::application::dto::{OutputFormat, ReportRequest, ReportResponse};
    pub use crate::application::factories::FormatterFactory;
    pub use crate::application::read_models::ReportModel;
    pub use crate::application::use_cases::GenerateReportUseCase;
    pub use crate::ports::outbound::{
        OutputPresenter, ProgressReporter, ProjectLocator, ProvenanceProvider, ReportFormatter,
        UsageReportReader,
    };
    pub use crate::prebuilt_usage::domain::{
        DependencyType, FileUsage, Package, Repo, ReportMetadata, ReportSummary,
        SourceLinkTemplate, UsageData, UsageRecord,
    };
    pub use crate::prebuilt_usage::services::{RepoClassifier, UsageAggregator};
    pub use crate::shared::error::{ExitCode, ReportError};
    pub use crate::shared::Result;
}
