//! [`SnapshotTree`] builder for tests that read inputs from disk.

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary directory laid out like a captured host snapshot.
///
/// # Example
///
/// ```rust,no_run
/// use snap_test_utils::SnapshotTree;
///
/// let tree = SnapshotTree::new();
/// let path = tree.write("etc/httpd/conf/httpd.conf", "Listen 80\n");
/// assert!(path.ends_with("httpd.conf"));
/// ```
pub struct SnapshotTree {
    temp_dir: TempDir,
}

impl Default for SnapshotTree {
    fn default() -> Self {
        Self::new()
    }
}

impl SnapshotTree {
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: &str) -> PathBuf {
        let path = self.root().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }
}
