use crate::ports::outbound::OutputPresenter;
use crate::shared::error::ReportError;
use crate::shared::security::validate_not_symlink;
use crate::shared::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// FileSystemWriter adapter for writing the rendered report to a file
///
/// Content is written to a temporary file in the destination directory and
/// renamed into place, so a failed write never leaves a truncated report.
pub struct FileSystemWriter {
    output_path: PathBuf,
}

impl FileSystemWriter {
    pub fn new(output_path: PathBuf) -> Self {
        Self { output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    fn parent_directory(&self) -> &Path {
        match self.output_path.parent() {
            Some(parent) if parent != Path::new("") => parent,
            _ => Path::new("."),
        }
    }

    fn write_error(&self, details: impl std::fmt::Display) -> ReportError {
        ReportError::FileWriteError {
            path: self.output_path.clone(),
            details: details.to_string(),
        }
    }
}

impl OutputPresenter for FileSystemWriter {
    fn present(&self, content: &str) -> Result<()> {
        let parent = self.parent_directory();
        if !parent.is_dir() {
            return Err(ReportError::OutputDirectoryNotFound {
                path: parent.to_path_buf(),
            }
            .into());
        }

        validate_not_symlink(&self.output_path, "write").map_err(|e| self.write_error(e))?;

        let mut temp_file = NamedTempFile::new_in(parent).map_err(|e| self.write_error(e))?;
        temp_file
            .write_all(content.as_bytes())
            .and_then(|_| temp_file.flush())
            .map_err(|e| self.write_error(e))?;
        temp_file
            .persist(&self.output_path)
            .map_err(|e| self.write_error(e.error))?;

        eprintln!("✅ Output complete: {}", self.output_path.display());
        Ok(())
    }
}
