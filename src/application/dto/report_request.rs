use crate::prebuilt_usage::domain::SourceLinkTemplate;
use std::path::PathBuf;

/// ReportRequest - Internal request DTO for the report generation use case
#[derive(Debug, Clone)]
pub struct ReportRequest {
    /// Path to the prebuilt usage XML produced by the build
    pub report_file: PathBuf,
    /// Root of the source tree that usage paths are relative to
    pub repository_root: PathBuf,
    /// Hosted-source links instead of local paths when true
    pub is_pipeline_run: bool,
    /// URL template used for hosted-source links
    pub source_link: SourceLinkTemplate,
}

impl ReportRequest {
    pub fn new(report_file: PathBuf, repository_root: PathBuf, is_pipeline_run: bool) -> Self {
        Self {
            report_file,
            repository_root,
            is_pipeline_run,
            source_link: SourceLinkTemplate::default(),
        }
    }

    pub fn with_source_link(mut self, source_link: SourceLinkTemplate) -> Self {
        self.source_link = source_link;
        self
    }
}
