use crate::application::dto::{ReportRequest, ReportResponse};
use crate::application::services::{FileLinkResolver, ProvenanceExplainer};
use crate::ports::outbound::{
    ProgressReporter, ProjectLocator, ProvenanceProvider, UsageReportReader,
};
use crate::prebuilt_usage::domain::{
    FileUsage, ReportMetadata, ReportSummary, UsageData, UsageRecord, ValidUsage,
};
use crate::prebuilt_usage::services::{RepoClassifier, UsageAggregator};
use crate::shared::error::ReportError;
use crate::shared::Result;
use chrono::{SecondsFormat, Utc};

/// Name recorded in report metadata
const TOOL_NAME: &str = env!("CARGO_PKG_NAME");

/// Version recorded in report metadata
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// GenerateReportUseCase - Core use case for prebuilt usage reporting
///
/// Reads the usage report, resolves every usage to a project link and (for
/// transitive usages) a provenance explanation, and folds the result into the
/// Repo → Package → File hierarchy. Records are processed strictly in input
/// order on the calling thread.
///
/// # Type Parameters
/// * `R` - UsageReportReader implementation
/// * `L` - ProjectLocator implementation
/// * `P` - ProvenanceProvider implementation
/// * `PR` - ProgressReporter implementation
pub struct GenerateReportUseCase<R, L, P, PR> {
    report_reader: R,
    project_locator: L,
    provenance_provider: P,
    progress_reporter: PR,
}

impl<R, L, P, PR> GenerateReportUseCase<R, L, P, PR>
where
    R: UsageReportReader,
    L: ProjectLocator,
    P: ProvenanceProvider,
    PR: ProgressReporter,
{
    /// Creates a new GenerateReportUseCase with injected dependencies
    pub fn new(
        report_reader: R,
        project_locator: L,
        provenance_provider: P,
        progress_reporter: PR,
    ) -> Self {
        Self {
            report_reader,
            project_locator,
            provenance_provider,
            progress_reporter,
        }
    }

    /// Executes the report generation use case
    ///
    /// # Errors
    /// Returns an error if the report cannot be read or parsed, or if a usage
    /// belongs to a repo that was never declared. Malformed records, missing
    /// project files and provenance failures are not errors.
    pub fn execute(&self, request: ReportRequest) -> Result<ReportResponse> {
        // Step 1: Read and parse the usage report
        let usage_data = self.read_and_report_usage_data(&request)?;

        // Step 2: Seed repos from the declared project directories
        let mut aggregator = UsageAggregator::new(Self::declared_repo_names(&usage_data));

        // Step 3: Resolve and aggregate every usage
        let skipped = self.aggregate_usages(&request, &usage_data.usages, &mut aggregator)?;

        // Step 4: Build and return response
        let repos = aggregator.finish();
        let summary = ReportSummary::from_repos(&repos, skipped);
        self.progress_reporter.report_completion(&format!(
            "✅ Aggregated {} usage(s) of {} package(s) across {} repo(s)",
            summary.usage_count, summary.package_count, summary.repo_count
        ));

        Ok(ReportResponse::new(repos, Self::build_metadata(&request), summary))
    }

    fn read_and_report_usage_data(&self, request: &ReportRequest) -> Result<UsageData> {
        self.progress_reporter.report(&format!(
            "📖 Loading prebuilt usage report from: {}",
            request.report_file.display()
        ));

        let usage_data = self.report_reader.read_usage_data(&request.report_file)?;

        self.progress_reporter.report(&format!(
            "✅ Detected {} project directory(ies) and {} usage record(s)",
            usage_data.project_directories.len(),
            usage_data.usages.len()
        ));

        Ok(usage_data)
    }

    /// Repo names for the declared project directories, classified the same
    /// way as usage paths. Blank entries are ignored.
    fn declared_repo_names(usage_data: &UsageData) -> Vec<String> {
        usage_data
            .project_directories
            .iter()
            .map(|dir| dir.trim())
            .filter(|dir| !dir.is_empty())
            .map(|dir| RepoClassifier::classify(Some(dir)).to_string())
            .collect()
    }

    /// Folds `usages` into `aggregator`, returning the number of malformed
    /// records that were skipped.
    fn aggregate_usages(
        &self,
        request: &ReportRequest,
        usages: &[UsageRecord],
        aggregator: &mut UsageAggregator,
    ) -> Result<usize> {
        let link_resolver = FileLinkResolver::new(
            &self.project_locator,
            request.repository_root.clone(),
            request.is_pipeline_run,
            request.source_link.clone(),
        );
        let explainer = ProvenanceExplainer::new(&self.provenance_provider);

        let total = usages.len();
        let mut skipped = 0;

        for (idx, record) in usages.iter().enumerate() {
            let Some(usage) = record.as_valid() else {
                tracing::debug!(index = idx, ?record, "skipping malformed usage record");
                skipped += 1;
                continue;
            };

            self.progress_reporter
                .report_progress(idx + 1, total, Some(usage.package_id));

            let repo_name = RepoClassifier::classify(Some(usage.file_path));
            if !aggregator.contains_repo(repo_name) {
                self.progress_reporter.report_error(&format!(
                    "❌ Usage in {} maps to undeclared repo '{}'",
                    usage.file_path, repo_name
                ));
                return Err(ReportError::UndeclaredRepo {
                    repo: repo_name.to_string(),
                    package: usage.package_id.to_string(),
                    file: usage.file_path.to_string(),
                }
                .into());
            }

            let file = Self::resolve_file(repo_name, &usage, &link_resolver, &explainer);
            aggregator.add_usage(repo_name, usage.package_id, usage.package_version, file)?;
        }

        if skipped > 0 {
            self.progress_reporter.report_error(&format!(
                "⚠️  Warning: Skipped {} usage record(s) missing a file path, id or version.",
                skipped
            ));
        }

        Ok(skipped)
    }

    fn resolve_file<LL, PP>(
        repo_name: &str,
        usage: &ValidUsage<'_>,
        link_resolver: &FileLinkResolver<LL>,
        explainer: &ProvenanceExplainer<PP>,
    ) -> FileUsage
    where
        LL: ProjectLocator,
        PP: ProvenanceProvider,
    {
        FileUsage::new(
            repo_name.to_string(),
            FileLinkResolver::<LL>::project_directory_name(usage.file_path).to_string(),
            usage.file_path.to_string(),
            link_resolver.resolve(usage.file_path),
            usage.is_direct_dependency,
            explainer.explain(usage),
        )
    }

    fn build_metadata(request: &ReportRequest) -> ReportMetadata {
        ReportMetadata::new(
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            TOOL_NAME.to_string(),
            TOOL_VERSION.to_string(),
            request.is_pipeline_run,
        )
    }
}
