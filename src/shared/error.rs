use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow build pipelines to distinguish a misconfigured
/// invocation from a report that failed while being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Report written successfully
    Success = 0,
    /// Unexpected failure while generating the report
    GenerationFailed = 1,
    /// Invalid command-line arguments, produced when clap rejects the invocation
    InvalidArguments = 2,
    /// Missing report file, missing output directory or invalid config file
    ConfigurationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::GenerationFailed => write!(f, "Generation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ConfigurationError => write!(f, "Configuration Error (3)"),
        }
    }
}

/// Application-specific errors for prebuilt usage reporting.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("Prebuilt report file does not exist: {path}\n\n💡 Hint: Pass the usage XML produced by the build with --report-file")]
    ReportFileNotFound { path: PathBuf },

    #[error("Output directory does not exist: {path}\n\n💡 Hint: Create the directory before generating the report")]
    OutputDirectoryNotFound { path: PathBuf },

    #[error("Failed to parse prebuilt report file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file is a well-formed usage XML document")]
    ReportParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    #[error("Usage of {package} in {file} belongs to repo '{repo}', which is not a declared project directory\n\n💡 Hint: Add src/{repo}/ to the ProjectDirectories section of the usage report")]
    UndeclaredRepo {
        repo: String,
        package: String,
        file: String,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ReportError {
    /// Exit code a caller should use when this error aborts the run.
    pub fn exit_code(&self) -> ExitCode {
        match self {
            ReportError::ReportFileNotFound { .. }
            | ReportError::OutputDirectoryNotFound { .. }
            | ReportError::InvalidConfig { .. } => ExitCode::ConfigurationError,
            _ => ExitCode::GenerationFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_values() {
        assert_eq!(ExitCode::Success.as_i32(), 0);
        assert_eq!(ExitCode::GenerationFailed.as_i32(), 1);
        assert_eq!(ExitCode::InvalidArguments.as_i32(), 2);
        assert_eq!(ExitCode::ConfigurationError.as_i32(), 3);
    }

    #[test]
    fn test_exit_code_display() {
        assert_eq!(format!("{}", ExitCode::Success), "Success (0)");
        assert_eq!(
            format!("{}", ExitCode::ConfigurationError),
            "Configuration Error (3)"
        );
    }

    #[test]
    fn test_report_file_not_found_display() {
        let error = ReportError::ReportFileNotFound {
            path: PathBuf::from("/build/prebuilt-usage.xml"),
        };
        let display = error.to_string();
        assert!(display.contains("Prebuilt report file does not exist"));
        assert!(display.contains("/build/prebuilt-usage.xml"));
        assert!(display.contains("💡 Hint:"));
    }

    #[test]
    fn test_output_directory_not_found_display() {
        let error = ReportError::OutputDirectoryNotFound {
            path: PathBuf::from("/build/reports"),
        };
        let display = error.to_string();
        assert!(display.contains("Output directory does not exist"));
        assert!(display.contains("/build/reports"));
    }

    #[test]
    fn test_undeclared_repo_display() {
        let error = ReportError::UndeclaredRepo {
            repo: "aspnetcore".to_string(),
            package: "Newtonsoft.Json".to_string(),
            file: "src/aspnetcore/src/Foo/obj/project.assets.json".to_string(),
        };
        let display = error.to_string();
        assert!(display.contains("'aspnetcore'"));
        assert!(display.contains("Newtonsoft.Json"));
        assert!(display.contains("src/aspnetcore/"));
    }

    #[test]
    fn test_exit_code_mapping() {
        let missing_input = ReportError::ReportFileNotFound {
            path: PathBuf::from("a.xml"),
        };
        let missing_output = ReportError::OutputDirectoryNotFound {
            path: PathBuf::from("out"),
        };
        let parse = ReportError::ReportParseError {
            path: PathBuf::from("a.xml"),
            details: "unexpected EOF".to_string(),
        };
        assert_eq!(missing_input.exit_code(), ExitCode::ConfigurationError);
        assert_eq!(missing_output.exit_code(), ExitCode::ConfigurationError);
        assert_eq!(parse.exit_code(), ExitCode::GenerationFailed);
    }
}
