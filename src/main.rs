mod cli;
mod config;

use cli::Args;
use config::ConfigFile;
use owo_colors::OwoColorize;
use prebuilt_report::adapters::outbound::console::StderrProgressReporter;
use prebuilt_report::adapters::outbound::filesystem::{
    FileSystemReader, FileSystemWriter, WalkDirProjectLocator,
};
use prebuilt_report::adapters::outbound::process::DotnetProvenanceProvider;
use prebuilt_report::application::dto::{OutputFormat, ReportRequest};
use prebuilt_report::application::factories::FormatterFactory;
use prebuilt_report::application::read_models::ReportModel;
use prebuilt_report::application::use_cases::GenerateReportUseCase;
use prebuilt_report::ports::outbound::OutputPresenter;
use prebuilt_report::prebuilt_usage::domain::SourceLinkTemplate;
use prebuilt_report::shared::error::{ExitCode, ReportError};
use prebuilt_report::shared::Result;
use std::io;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

/// Effective settings after merging CLI arguments over the config file.
#[derive(Debug)]
struct Settings {
    report_file: PathBuf,
    output_dir: PathBuf,
    repository_root: PathBuf,
    is_pipeline_run: bool,
    dotnet_path: Option<PathBuf>,
    format: OutputFormat,
    source_link: SourceLinkTemplate,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run() {
        eprintln!("\n{}\n", "❌ An error occurred:".red().bold());
        eprintln!("{}", e);

        // Display error chain
        for cause in e.chain().skip(1) {
            eprintln!("\nCaused by: {}", cause);
        }

        eprintln!();
        process::exit(exit_code_for(&e).as_i32());
    }
}

fn run() -> Result<()> {
    // Parse command-line arguments
    let args = Args::parse_args();

    // Load config file (explicit path or auto-discovered in the current directory)
    let config = load_config(args.config.as_deref())?;

    let settings = merge_settings(args, config)?;
    validate_inputs(&settings.report_file, &settings.output_dir)?;

    // Create adapters (Dependency Injection)
    let report_reader = FileSystemReader::new();
    let project_locator = WalkDirProjectLocator::new();
    let provenance_provider = match settings.dotnet_path.as_deref() {
        Some(dir) => DotnetProvenanceProvider::new(dir),
        None => DotnetProvenanceProvider::from_path(),
    };
    let progress_reporter = StderrProgressReporter::new();

    // Create use case with injected dependencies
    let use_case = GenerateReportUseCase::new(
        report_reader,
        project_locator,
        provenance_provider,
        progress_reporter,
    );

    let request = ReportRequest::new(
        settings.report_file,
        settings.repository_root,
        settings.is_pipeline_run,
    )
    .with_source_link(settings.source_link);

    // Execute use case
    let response = use_case.execute(request)?;

    // Display progress message
    eprintln!("{}", FormatterFactory::progress_message(settings.format));

    // Create formatter using factory
    let formatter = FormatterFactory::create(settings.format);
    let formatted_output = formatter.format(&ReportModel::from_response(&response))?;

    // Present output
    let presenter =
        FileSystemWriter::new(settings.output_dir.join(settings.format.output_file_name()));
    presenter.present(&formatted_output)?;

    Ok(())
}

fn load_config(explicit_path: Option<&Path>) -> Result<ConfigFile> {
    if let Some(path) = explicit_path {
        let config = config::load_config_from_path(path)?;
        eprintln!("⚙️  Loaded config from: {}", path.display());
        return Ok(config);
    }

    match config::discover_config(Path::new("."))? {
        Some(config) => {
            eprintln!("⚙️  Loaded config from: {}", config::CONFIG_FILENAME);
            Ok(config)
        }
        None => Ok(ConfigFile::default()),
    }
}

/// Applies CLI argument > config file > default precedence.
fn merge_settings(args: Args, config: ConfigFile) -> Result<Settings> {
    let format = match (args.format, config.format.as_deref()) {
        (Some(format), _) => format,
        (None, Some(value)) => value
            .parse::<OutputFormat>()
            .map_err(|message| ReportError::InvalidConfig { message })?,
        (None, None) => OutputFormat::default(),
    };

    let source_link = config
        .source_link
        .as_ref()
        .map(|source_link| source_link.to_template())
        .unwrap_or_default();

    Ok(Settings {
        report_file: args.report_file,
        output_dir: args.output_dir,
        repository_root: args
            .repository_root
            .or(config.repository_root)
            .unwrap_or_else(|| PathBuf::from(".")),
        is_pipeline_run: args.pipeline_run || config.is_pipeline_run.unwrap_or(false),
        dotnet_path: args.dotnet_path.or(config.dotnet_path),
        format,
        source_link,
    })
}

/// Fails fast on a missing report file or output directory, before any
/// processing starts.
fn validate_inputs(report_file: &Path, output_dir: &Path) -> Result<()> {
    if !report_file.is_file() {
        return Err(ReportError::ReportFileNotFound {
            path: report_file.to_path_buf(),
        }
        .into());
    }

    if !output_dir.is_dir() {
        return Err(ReportError::OutputDirectoryNotFound {
            path: output_dir.to_path_buf(),
        }
        .into());
    }

    Ok(())
}

fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    error
        .downcast_ref::<ReportError>()
        .map(ReportError::exit_code)
        .unwrap_or(ExitCode::GenerationFailed)
}
