use crate::shared::Result;

/// ProvenanceProvider port for explaining why a package is in the graph
///
/// Implementations typically shell out to a package-management tool and
/// return its textual output unchanged.
pub trait ProvenanceProvider {
    /// Explains why `package_id` is referenced by the project at `file_path`
    ///
    /// # Errors
    /// Returns an error if the tool cannot be started, exits unsuccessfully
    /// or produces unreadable output
    fn explain(&self, file_path: &str, package_id: &str) -> Result<String>;
}

impl<T: ProvenanceProvider + ?Sized> ProvenanceProvider for &T {
    fn explain(&self, file_path: &str, package_id: &str) -> Result<String> {
        (**self).explain(file_path, package_id)
    }
}
