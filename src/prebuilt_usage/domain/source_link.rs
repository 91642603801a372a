/// Hosted-source URL template used for links in pipeline runs.
///
/// Produces `https://dev.azure.com/{organization}/{project}/_git/{repository}?version={commit}&path={path}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLinkTemplate {
    organization: String,
    project: String,
    repository: String,
    commit: String,
}

impl SourceLinkTemplate {
    pub const DEFAULT_ORGANIZATION: &'static str = "dnceng";
    pub const DEFAULT_PROJECT: &'static str = "internal";
    pub const DEFAULT_REPOSITORY: &'static str = "dotnet-dotnet";
    pub const DEFAULT_COMMIT: &'static str = "commitSha";

    pub fn new(organization: String, project: String, repository: String, commit: String) -> Self {
        Self {
            organization,
            project,
            repository,
            commit,
        }
    }

    pub fn organization(&self) -> &str {
        &self.organization
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn repository(&self) -> &str {
        &self.repository
    }

    pub fn commit(&self) -> &str {
        &self.commit
    }

    /// Formats the URL for `path`, a repository-relative path such as
    /// `/src/runtime/src/Foo/Foo.csproj`.
    pub fn format(&self, path: &str) -> String {
        format!(
            "https://dev.azure.com/{}/{}/_git/{}?version={}&path={}",
            self.organization, self.project, self.repository, self.commit, path
        )
    }
}

impl Default for SourceLinkTemplate {
    fn default() -> Self {
        Self::new(
            Self::DEFAULT_ORGANIZATION.to_string(),
            Self::DEFAULT_PROJECT.to_string(),
            Self::DEFAULT_REPOSITORY.to_string(),
            Self::DEFAULT_COMMIT.to_string(),
        )
    }
}
