use std::fmt;

/// Whether a package is referenced by the project itself or pulled in
/// through another package.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DependencyType {
    Direct,
    Transitive,
}

impl DependencyType {
    pub fn from_direct_flag(is_direct_dependency: bool) -> Self {
        if is_direct_dependency {
            DependencyType::Direct
        } else {
            DependencyType::Transitive
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DependencyType::Direct => "Direct",
            DependencyType::Transitive => "Transitive",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One concrete occurrence of a prebuilt package in a project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileUsage {
    repo: String,
    project: String,
    file_path: String,
    link: String,
    is_direct_dependency: bool,
    provenance: String,
}

impl FileUsage {
    pub fn new(
        repo: String,
        project: String,
        file_path: String,
        link: String,
        is_direct_dependency: bool,
        provenance: String,
    ) -> Self {
        // Provenance only explains transitive usages.
        let provenance = if is_direct_dependency {
            String::new()
        } else {
            provenance
        };

        Self {
            repo,
            project,
            file_path,
            link,
            is_direct_dependency,
            provenance,
        }
    }

    pub fn repo(&self) -> &str {
        &self.repo
    }

    /// Name of the directory containing the referencing project.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Usage path exactly as recorded in the report.
    pub fn file_path(&self) -> &str {
        &self.file_path
    }

    /// Local path or hosted URL of the project descriptor, empty if unresolved.
    pub fn link(&self) -> &str {
        &self.link
    }

    pub fn is_direct_dependency(&self) -> bool {
        self.is_direct_dependency
    }

    pub fn dependency_type(&self) -> DependencyType {
        DependencyType::from_direct_flag(self.is_direct_dependency)
    }

    pub fn provenance(&self) -> &str {
        &self.provenance
    }
}

/// A distinct (name, version) pair and every usage of it within one repo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Package {
    name: String,
    version: String,
    files: Vec<FileUsage>,
}

impl Package {
    pub fn new(name: String, version: String) -> Self {
        Self {
            name,
            version,
            files: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn files(&self) -> &[FileUsage] {
        &self.files
    }

    pub(crate) fn push_file(&mut self, file: FileUsage) {
        self.files.push(file);
    }
}

/// A named grouping of packages, in first-seen order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Repo {
    name: String,
    packages: Vec<Package>,
}

impl Repo {
    pub fn new(name: String) -> Self {
        Self {
            name,
            packages: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn packages(&self) -> &[Package] {
        &self.packages
    }

    pub fn is_empty(&self) -> bool {
        self.packages.is_empty()
    }

    pub fn usage_count(&self) -> usize {
        self.packages.iter().map(|p| p.files().len()).sum()
    }

    pub(crate) fn packages_mut(&mut self) -> &mut Vec<Package> {
        &mut self.packages
    }
}
