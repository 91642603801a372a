use crate::prebuilt_usage::domain::UsageData;
use crate::shared::Result;
use std::path::Path;

/// UsageReportReader port for loading the prebuilt usage report
///
/// This port abstracts reading and parsing the report document into the
/// declared project directories and the flat list of usage records.
pub trait UsageReportReader {
    /// Reads and parses the usage report at `report_path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The report file does not exist
    /// - The file cannot be read due to permissions or I/O errors
    /// - The document is not well-formed
    fn read_usage_data(&self, report_path: &Path) -> Result<UsageData>;
}
