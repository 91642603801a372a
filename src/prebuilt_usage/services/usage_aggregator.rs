use crate::prebuilt_usage::domain::{FileUsage, Package, Repo};
use crate::prebuilt_usage::services::{CURRENT_REPO, UNKNOWN_REPO};
use crate::shared::error::ReportError;
use crate::shared::Result;
use std::collections::HashMap;

/// UsageAggregator folds resolved usages into the Repo → Package → File
/// hierarchy.
///
/// Repos are seeded up front from the declared roots, followed by the
/// `Unknown` and `Current Repo` sentinels. Packages are deduplicated per repo
/// by their exact (name, version) pair, and both repos and packages keep
/// their first-insertion order.
pub struct UsageAggregator {
    repos: Vec<Repo>,
    repo_index: HashMap<String, usize>,
    package_index: HashMap<(usize, String, String), usize>,
}

impl UsageAggregator {
    /// Creates an aggregator with one empty repo per declared root name.
    ///
    /// Duplicate names keep their first position.
    pub fn new<I, S>(declared_roots: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut aggregator = Self {
            repos: Vec::new(),
            repo_index: HashMap::new(),
            package_index: HashMap::new(),
        };

        for name in declared_roots {
            aggregator.seed_repo(name.into());
        }
        aggregator.seed_repo(UNKNOWN_REPO.to_string());
        aggregator.seed_repo(CURRENT_REPO.to_string());

        aggregator
    }

    fn seed_repo(&mut self, name: String) {
        if self.repo_index.contains_key(&name) {
            return;
        }
        self.repo_index.insert(name.clone(), self.repos.len());
        self.repos.push(Repo::new(name));
    }

    /// Whether `repo_name` was seeded as a declared root or sentinel.
    pub fn contains_repo(&self, repo_name: &str) -> bool {
        self.repo_index.contains_key(repo_name)
    }

    /// Appends `file` to the (name, version) package of `repo_name`, creating
    /// the package on first encounter.
    ///
    /// # Errors
    /// Returns [`ReportError::UndeclaredRepo`] when `repo_name` was never seeded.
    pub fn add_usage(
        &mut self,
        repo_name: &str,
        package_name: &str,
        package_version: &str,
        file: FileUsage,
    ) -> Result<()> {
        let repo_idx = *self
            .repo_index
            .get(repo_name)
            .ok_or_else(|| ReportError::UndeclaredRepo {
                repo: repo_name.to_string(),
                package: package_name.to_string(),
                file: file.file_path().to_string(),
            })?;

        let packages = self.repos[repo_idx].packages_mut();
        let key = (
            repo_idx,
            package_name.to_string(),
            package_version.to_string(),
        );
        let package_idx = *self.package_index.entry(key).or_insert_with(|| {
            packages.push(Package::new(
                package_name.to_string(),
                package_version.to_string(),
            ));
            packages.len() - 1
        });

        packages[package_idx].push_file(file);
        Ok(())
    }

    /// Returns the non-empty repos in seeding order.
    pub fn finish(self) -> Vec<Repo> {
        self.repos.into_iter().filter(|r| !r.is_empty()).collect()
    }
}
