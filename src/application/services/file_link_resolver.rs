use crate::ports::outbound::ProjectLocator;
use crate::prebuilt_usage::domain::SourceLinkTemplate;
use std::path::{Component, Path, PathBuf};

/// Project descriptor extension searched for under the source tree
const PROJECT_FILE_EXTENSION: &str = "csproj";

/// Marks where build output starts inside a usage path
const ARTIFACTS_MARKER: &str = "/artifacts";

/// FileLinkResolver turns a usage path into a browsable link to the
/// project descriptor that caused the usage.
///
/// Resolution is best-effort: a descriptor that cannot be found yields an
/// empty link rather than an error.
pub struct FileLinkResolver<L> {
    locator: L,
    repository_root: PathBuf,
    is_pipeline_run: bool,
    source_link: SourceLinkTemplate,
}

impl<L: ProjectLocator> FileLinkResolver<L> {
    pub fn new(
        locator: L,
        repository_root: PathBuf,
        is_pipeline_run: bool,
        source_link: SourceLinkTemplate,
    ) -> Self {
        Self {
            locator,
            repository_root,
            is_pipeline_run,
            source_link,
        }
    }

    /// Name of the directory containing the usage file, i.e. the
    /// second-to-last `/`-separated component. Empty when there is none.
    pub fn project_directory_name(file_path: &str) -> &str {
        let mut components = file_path.rsplit('/');
        components.next();
        components.next().unwrap_or_default()
    }

    /// Portion of the usage path before the first `/artifacts`, which
    /// approximates the source-controlled part of the path.
    pub fn relative_repo_path(file_path: &str) -> &str {
        match file_path.find(ARTIFACTS_MARKER) {
            Some(idx) => &file_path[..idx],
            None => file_path,
        }
    }

    /// Directory searched for the project descriptor of `file_path`.
    pub fn search_root(&self, file_path: &str) -> PathBuf {
        let relative = Self::relative_repo_path(file_path).trim_start_matches('/');
        self.repository_root.join(relative)
    }

    /// Resolves `file_path` to a local path or hosted-source URL of its
    /// `<project>.csproj`, or an empty string when none exists.
    pub fn resolve(&self, file_path: &str) -> String {
        let project = Self::project_directory_name(file_path);
        if project.is_empty() {
            tracing::debug!(file_path, "usage path has no project directory");
            return String::new();
        }

        let file_name = format!("{}.{}", project, PROJECT_FILE_EXTENSION);
        let search_root = self.search_root(file_path);

        let Some(project_file) = self.locator.find_file(&search_root, &file_name) else {
            tracing::debug!(
                file_path,
                search_root = %search_root.display(),
                "no {} found for usage",
                file_name
            );
            return String::new();
        };

        if self.is_pipeline_run {
            self.source_link.format(&self.repository_relative(&project_file))
        } else {
            std::path::absolute(&project_file)
                .unwrap_or(project_file)
                .display()
                .to_string()
        }
    }

    /// `/`-separated path of `project_file` below the repository root, with a
    /// leading `/`.
    fn repository_relative(&self, project_file: &Path) -> String {
        let relative = project_file
            .strip_prefix(&self.repository_root)
            .unwrap_or(project_file);

        let mut out = String::new();
        for component in relative.components() {
            if let Component::Normal(part) = component {
                out.push('/');
                out.push_str(&part.to_string_lossy());
            }
        }
        out
    }
}
