use crate::application::read_models::ReportModel;
use crate::ports::outbound::ReportFormatter;
use crate::prebuilt_usage::domain::{FileUsage, Package, ReportSummary, Repo};
use crate::shared::Result;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    metadata: JsonMetadata<'a>,
    summary: JsonSummary,
    repos: Vec<JsonRepo<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonMetadata<'a> {
    generated_at: &'a str,
    tool_name: &'a str,
    tool_version: &'a str,
    is_pipeline_run: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonSummary {
    repo_count: usize,
    package_count: usize,
    usage_count: usize,
    direct_count: usize,
    transitive_count: usize,
    skipped_record_count: usize,
}

impl From<ReportSummary> for JsonSummary {
    fn from(summary: ReportSummary) -> Self {
        Self {
            repo_count: summary.repo_count,
            package_count: summary.package_count,
            usage_count: summary.usage_count,
            direct_count: summary.direct_count,
            transitive_count: summary.transitive_count,
            skipped_record_count: summary.skipped_record_count,
        }
    }
}

#[derive(Debug, Serialize)]
struct JsonRepo<'a> {
    name: &'a str,
    packages: Vec<JsonPackage<'a>>,
}

#[derive(Debug, Serialize)]
struct JsonPackage<'a> {
    name: &'a str,
    version: &'a str,
    files: Vec<JsonFile<'a>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonFile<'a> {
    repo: &'a str,
    project: &'a str,
    file_path: &'a str,
    link: &'a str,
    dependency_type: &'static str,
    #[serde(skip_serializing_if = "str::is_empty")]
    provenance: &'a str,
}

impl<'a> From<&'a Repo> for JsonRepo<'a> {
    fn from(repo: &'a Repo) -> Self {
        Self {
            name: repo.name(),
            packages: repo.packages().iter().map(JsonPackage::from).collect(),
        }
    }
}

impl<'a> From<&'a Package> for JsonPackage<'a> {
    fn from(package: &'a Package) -> Self {
        Self {
            name: package.name(),
            version: package.version(),
            files: package.files().iter().map(JsonFile::from).collect(),
        }
    }
}

impl<'a> From<&'a FileUsage> for JsonFile<'a> {
    fn from(file: &'a FileUsage) -> Self {
        Self {
            repo: file.repo(),
            project: file.project(),
            file_path: file.file_path(),
            link: file.link(),
            dependency_type: file.dependency_type().as_str(),
            provenance: file.provenance(),
        }
    }
}

/// JsonFormatter adapter rendering the report hierarchy as pretty JSON
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, model: &ReportModel<'_>) -> Result<String> {
        let report = JsonReport {
            metadata: JsonMetadata {
                generated_at: model.metadata.generated_at(),
                tool_name: model.metadata.tool_name(),
                tool_version: model.metadata.tool_version(),
                is_pipeline_run: model.metadata.is_pipeline_run(),
            },
            summary: model.summary.into(),
            repos: model.repos.iter().map(JsonRepo::from).collect(),
        };

        serde_json::to_string_pretty(&report)
            .map_err(|e| anyhow::anyhow!("Failed to serialize JSON report: {}", e))
    }
}
