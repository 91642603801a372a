use clap::Parser;
use prebuilt_report::application::dto::OutputFormat;
use prebuilt_report::shared::error::ExitCode;
use std::path::PathBuf;
use std::process;

/// Generate an HTML or JSON report of prebuilt package usages
#[derive(Parser, Debug)]
#[command(name = "prebuilt-report")]
#[command(version)]
#[command(
    about = "Generate a report of prebuilt package usages in a source-built repository",
    long_about = None
)]
pub struct Args {
    /// Prebuilt usage XML produced by the build
    #[arg(short, long, value_name = "FILE")]
    pub report_file: PathBuf,

    /// Existing directory the report is written into
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: PathBuf,

    /// Root of the source tree that usage paths are relative to [default: .]
    #[arg(long, value_name = "DIR")]
    pub repository_root: Option<PathBuf>,

    /// Link projects to the hosted repository instead of local paths
    #[arg(long)]
    pub pipeline_run: bool,

    /// Directory containing the dotnet executable (defaults to dotnet on PATH)
    #[arg(long, value_name = "DIR")]
    pub dotnet_path: Option<PathBuf>,

    /// Output format: html or json [default: html]
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Path to config file (auto-discovers prebuilt-report.config.yml if not specified)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Parse the process arguments, exiting with the matching exit code when
    /// parsing stops early (`--help`, `--version` or a usage error).
    pub fn parse_args() -> Self {
        Self::try_parse().unwrap_or_else(|e| {
            let _ = e.print();
            process::exit(exit_code_for_parse_error(&e).as_i32())
        })
    }
}

/// Help and version output are not failures; everything else clap rejects is.
pub fn exit_code_for_parse_error(error: &clap::Error) -> ExitCode {
    if error.use_stderr() {
        ExitCode::InvalidArguments
    } else {
        ExitCode::Success
    }
}
