//! Borrowed view over a finished report.

use crate::application::dto::ReportResponse;
use crate::prebuilt_usage::domain::{ReportMetadata, ReportSummary, Repo};

/// Everything a formatter needs, borrowed from a [`ReportResponse`].
#[derive(Debug, Clone, Copy)]
pub struct ReportModel<'a> {
    pub metadata: &'a ReportMetadata,
    pub summary: ReportSummary,
    pub repos: &'a [Repo],
}

impl<'a> ReportModel<'a> {
    pub fn new(metadata: &'a ReportMetadata, summary: ReportSummary, repos: &'a [Repo]) -> Self {
        Self {
            metadata,
            summary,
            repos,
        }
    }

    pub fn from_response(response: &'a ReportResponse) -> Self {
        Self::new(&response.metadata, response.summary, &response.repos)
    }
}
