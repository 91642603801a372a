//! Configuration file support for prebuilt-report.
//!
//! Provides YAML-based configuration through `prebuilt-report.config.yml`
//! files, including data structures, file loading, and validation.

use prebuilt_report::prebuilt_usage::domain::SourceLinkTemplate;
use prebuilt_report::shared::error::ReportError;
use prebuilt_report::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const CONFIG_FILENAME: &str = "prebuilt-report.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub format: Option<String>,
    pub repository_root: Option<PathBuf>,
    pub dotnet_path: Option<PathBuf>,
    pub is_pipeline_run: Option<bool>,
    pub source_link: Option<SourceLinkConfig>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: BTreeMap<String, serde_yaml_ng::Value>,
}

/// Overrides for the hosted-source link template. Omitted values keep
/// their defaults.
#[derive(Debug, Deserialize, Default)]
pub struct SourceLinkConfig {
    pub organization: Option<String>,
    pub project: Option<String>,
    pub repository: Option<String>,
    pub commit: Option<String>,
}

impl SourceLinkConfig {
    pub fn to_template(&self) -> SourceLinkTemplate {
        let pick = |value: &Option<String>, default: &str| {
            value.clone().unwrap_or_else(|| default.to_string())
        };
        SourceLinkTemplate::new(
            pick(&self.organization, SourceLinkTemplate::DEFAULT_ORGANIZATION),
            pick(&self.project, SourceLinkTemplate::DEFAULT_PROJECT),
            pick(&self.repository, SourceLinkTemplate::DEFAULT_REPOSITORY),
            pick(&self.commit, SourceLinkTemplate::DEFAULT_COMMIT),
        )
    }

    fn entries(&self) -> [(&'static str, &Option<String>); 4] {
        [
            ("organization", &self.organization),
            ("project", &self.project),
            ("repository", &self.repository),
            ("commit", &self.commit),
        ]
    }
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).map_err(|e| ReportError::InvalidConfig {
        message: format!(
            "Failed to read config file: {} ({})\n\n💡 Hint: Check that the file exists and is readable.",
            path.display(),
            e
        ),
    })?;

    let config: ConfigFile =
        serde_yaml_ng::from_str(&content).map_err(|e| ReportError::InvalidConfig {
            message: format!(
                "Failed to parse config file: {} ({})\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
                path.display(),
                e
            ),
        })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref source_link) = config.source_link {
        for (field, value) in source_link.entries() {
            if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
                return Err(ReportError::InvalidConfig {
                    message: format!(
                        "source_link.{} must not be empty.\n\n\
                         💡 Hint: Remove the field to use the default value.",
                        field
                    ),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
