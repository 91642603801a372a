use crate::prebuilt_usage::domain::Repo;

/// Metadata describing a single report-generation run
#[derive(Debug, Clone)]
pub struct ReportMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    is_pipeline_run: bool,
}

impl ReportMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        is_pipeline_run: bool,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            is_pipeline_run,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn is_pipeline_run(&self) -> bool {
        self.is_pipeline_run
    }
}

/// Totals over an aggregated report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReportSummary {
    pub repo_count: usize,
    pub package_count: usize,
    pub usage_count: usize,
    pub direct_count: usize,
    pub transitive_count: usize,
    pub skipped_record_count: usize,
}

impl ReportSummary {
    pub fn from_repos(repos: &[Repo], skipped_record_count: usize) -> Self {
        let mut summary = Self {
            repo_count: repos.len(),
            skipped_record_count,
            ..Self::default()
        };

        for package in repos.iter().flat_map(|r| r.packages()) {
            summary.package_count += 1;
            for file in package.files() {
                summary.usage_count += 1;
                if file.is_direct_dependency() {
                    summary.direct_count += 1;
                } else {
                    summary.transitive_count += 1;
                }
            }
        }

        summary
    }
}
