use crate::ports::outbound::ProvenanceProvider;
use crate::shared::Result;
use anyhow::Context;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[cfg(windows)]
const DOTNET_EXECUTABLE: &str = "dotnet.exe";
#[cfg(not(windows))]
const DOTNET_EXECUTABLE: &str = "dotnet";

/// DotnetProvenanceProvider adapter running `dotnet nuget why <file> <package>`
///
/// The call blocks until the child exits; there is no timeout.
pub struct DotnetProvenanceProvider {
    program: PathBuf,
}

impl DotnetProvenanceProvider {
    /// Uses the `dotnet` executable inside `dotnet_dir`.
    pub fn new(dotnet_dir: &Path) -> Self {
        Self {
            program: dotnet_dir.join(DOTNET_EXECUTABLE),
        }
    }

    /// Uses `dotnet` as resolved from `PATH`.
    pub fn from_path() -> Self {
        Self::with_program(PathBuf::from(DOTNET_EXECUTABLE))
    }

    /// Uses an explicit executable, mainly for tests.
    pub fn with_program(program: PathBuf) -> Self {
        Self { program }
    }

    pub fn program(&self) -> &Path {
        &self.program
    }
}

impl ProvenanceProvider for DotnetProvenanceProvider {
    fn explain(&self, file_path: &str, package_id: &str) -> Result<String> {
        let output = Command::new(&self.program)
            .args(["nuget", "why", file_path, package_id])
            .stdin(Stdio::null())
            .stderr(Stdio::null())
            .output()
            .with_context(|| format!("failed to start {}", self.program.display()))?;

        if !output.status.success() {
            anyhow::bail!(
                "{} nuget why exited with {}",
                self.program.display(),
                output.status
            );
        }

        String::from_utf8(output.stdout).context("nuget why produced non-UTF-8 output")
    }
}
