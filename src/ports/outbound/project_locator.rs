use std::path::{Path, PathBuf};

/// ProjectLocator port for finding project descriptors on disk
///
/// Abstracts the recursive directory listing used to resolve a usage back
/// to its project file, so link resolution can be tested without real I/O.
pub trait ProjectLocator {
    /// Finds the first file named `file_name` anywhere under `search_root`
    ///
    /// A missing or unreadable `search_root` yields `None`, never an error.
    fn find_file(&self, search_root: &Path, file_name: &str) -> Option<PathBuf>;
}

impl<T: ProjectLocator + ?Sized> ProjectLocator for &T {
    fn find_file(&self, search_root: &Path, file_name: &str) -> Option<PathBuf> {
        (**self).find_file(search_root, file_name)
    }
}
