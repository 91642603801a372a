use std::path::Path;
use prebuilt_report::prelude::*;

/// Mock UsageReportReader for testing
pub struct MockUsageReportReader {
    pub data: UsageData,
    pub should_fail: bool,
}

impl MockUsageReportReader {
    pub fn new(project_directories: &[&str], usages: Vec<UsageRecord>) -> Self {
        Self {
            data: UsageData::new(
                project_directories.iter().map(|d| d.to_string()).collect(),
                usages,
            ),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            data: UsageData::new(Vec::new(), Vec::new()),
            should_fail: true,
        }
    }
}

impl UsageReportReader for MockUsageReportReader {
    fn read_usage_data(&self, _report_path: &Path) -> Result<UsageData> {
        if self.should_fail {
            anyhow::bail!("Mock usage report read failure");
        }
        Ok(self.data.clone())
    }
}
