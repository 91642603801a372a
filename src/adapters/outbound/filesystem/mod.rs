/// Filesystem adapters for file I/O operations
mod file_writer;
mod project_locator;
mod usage_report_reader;

pub use file_writer::FileSystemWriter;
pub use project_locator::WalkDirProjectLocator;
pub use usage_report_reader::FileSystemReader;
