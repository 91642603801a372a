use crate::ports::outbound::UsageReportReader;
use crate::prebuilt_usage::domain::{UsageData, UsageRecord};
use crate::shared::error::ReportError;
use crate::shared::security::{validate_file_size, validate_regular_file, MAX_FILE_SIZE};
use crate::shared::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// `<UsageData>` root of the prebuilt usage report
#[derive(Debug, Deserialize)]
struct UsageDataXml {
    #[serde(rename = "ProjectDirectories", default)]
    project_directories: Option<ProjectDirectoriesXml>,
    #[serde(rename = "Usages", default)]
    usages: Option<UsagesXml>,
}

#[derive(Debug, Deserialize)]
struct ProjectDirectoriesXml {
    #[serde(rename = "Dir", default)]
    dirs: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct UsagesXml {
    #[serde(rename = "Usage", default)]
    usages: Vec<UsageXml>,
}

#[derive(Debug, Deserialize)]
struct UsageXml {
    #[serde(rename = "@File")]
    file: Option<String>,
    #[serde(rename = "@Id")]
    id: Option<String>,
    #[serde(rename = "@Version")]
    version: Option<String>,
    #[serde(rename = "@IsDirectDependency")]
    is_direct_dependency: Option<String>,
}

impl From<UsageXml> for UsageRecord {
    fn from(usage: UsageXml) -> Self {
        let is_direct_dependency = usage
            .is_direct_dependency
            .as_deref()
            .is_some_and(|v| v.trim().eq_ignore_ascii_case("true"));

        UsageRecord {
            file_path: usage.file,
            package_id: usage.id,
            package_version: usage.version,
            is_direct_dependency,
        }
    }
}

/// FileSystemReader adapter for reading the prebuilt usage XML from disk
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    /// Parses usage report XML content.
    pub fn parse_usage_data(
        content: &str,
    ) -> std::result::Result<UsageData, quick_xml::de::DeError> {
        let document: UsageDataXml = quick_xml::de::from_str(content)?;

        let project_directories = document
            .project_directories
            .map(|p| p.dirs)
            .unwrap_or_default();
        let usages = document
            .usages
            .map(|u| u.usages.into_iter().map(UsageRecord::from).collect())
            .unwrap_or_default();

        Ok(UsageData::new(project_directories, usages))
    }

    /// Reads a file after rejecting symlinks, non-regular files and oversized files
    fn safe_read_file(&self, path: &Path) -> Result<String> {
        let file_size = validate_regular_file(path, "prebuilt usage report")?;
        validate_file_size(file_size, path, MAX_FILE_SIZE)?;

        fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Failed to read prebuilt usage report: {}", e))
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl UsageReportReader for FileSystemReader {
    fn read_usage_data(&self, report_path: &Path) -> Result<UsageData> {
        if !report_path.exists() {
            return Err(ReportError::ReportFileNotFound {
                path: report_path.to_path_buf(),
            }
            .into());
        }

        let content = self.safe_read_file(report_path).map_err(|e| ReportError::FileReadError {
            path: report_path.to_path_buf(),
            details: e.to_string(),
        })?;

        let usage_data =
            Self::parse_usage_data(&content).map_err(|e| ReportError::ReportParseError {
                path: report_path.to_path_buf(),
                details: e.to_string(),
            })?;

        tracing::debug!(
            path = %report_path.display(),
            directories = usage_data.project_directories.len(),
            usages = usage_data.usages.len(),
            "parsed prebuilt usage report"
        );

        Ok(usage_data)
    }
}
