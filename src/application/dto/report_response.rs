use crate::prebuilt_usage::domain::{ReportMetadata, ReportSummary, Repo};

/// ReportResponse - Output of the report generation use case
///
/// `repos` is the ordered hierarchy handed to the renderer.
#[derive(Debug, Clone)]
pub struct ReportResponse {
    pub repos: Vec<Repo>,
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
}

impl ReportResponse {
    pub fn new(repos: Vec<Repo>, metadata: ReportMetadata, summary: ReportSummary) -> Self {
        Self {
            repos,
            metadata,
            summary,
        }
    }
}
