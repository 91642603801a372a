/// A single prebuilt usage as read from the usage report.
///
/// Every attribute is optional because the report is machine-generated and
/// records with missing fields must be skipped rather than rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageRecord {
    pub file_path: Option<String>,
    pub package_id: Option<String>,
    pub package_version: Option<String>,
    pub is_direct_dependency: bool,
}

impl UsageRecord {
    pub fn new(
        file_path: Option<&str>,
        package_id: Option<&str>,
        package_version: Option<&str>,
        is_direct_dependency: bool,
    ) -> Self {
        Self {
            file_path: file_path.map(str::to_string),
            package_id: package_id.map(str::to_string),
            package_version: package_version.map(str::to_string),
            is_direct_dependency,
        }
    }

    /// Returns a borrowed view when file path, id and version are all present
    /// and non-empty, `None` for a malformed record.
    pub fn as_valid(&self) -> Option<ValidUsage<'_>> {
        fn non_empty(value: &Option<String>) -> Option<&str> {
            value.as_deref().filter(|v| !v.is_empty())
        }

        Some(ValidUsage {
            file_path: non_empty(&self.file_path)?,
            package_id: non_empty(&self.package_id)?,
            package_version: non_empty(&self.package_version)?,
            is_direct_dependency: self.is_direct_dependency,
        })
    }
}

/// A usage record whose mandatory attributes are all present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidUsage<'a> {
    pub file_path: &'a str,
    pub package_id: &'a str,
    pub package_version: &'a str,
    pub is_direct_dependency: bool,
}

/// Contents of a usage report: declared project directories and usages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageData {
    /// Raw `ProjectDirectories/Dir` values, e.g. `src/runtime/`
    pub project_directories: Vec<String>,
    pub usages: Vec<UsageRecord>,
}

impl UsageData {
    pub fn new(project_directories: Vec<String>, usages: Vec<UsageRecord>) -> Self {
        Self {
            project_directories,
            usages,
        }
    }
}
