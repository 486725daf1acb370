//! Origin paths of captured inputs

use std::fmt;
use std::path::{Path, PathBuf};

/// Where a captured input came from, as a `/`-separated string.
///
/// Parsers only use the path as metadata: the file name drives load
/// ordering and the full path ends up on every parsed entry. Separators are
/// unified and repeated or trailing slashes dropped, so the same file
/// always yields the same string whichever platform captured it.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NormalizedPath {
    inner: String,
}

impl NormalizedPath {
    pub fn new(path: impl AsRef<Path>) -> Self {
        let raw = path.as_ref().to_string_lossy().replace('\\', "/");
        let absolute = raw.starts_with('/');
        let joined = raw
            .split('/')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("/");
        let inner = match (absolute, joined.is_empty()) {
            (true, true) => "/".to_string(),
            (true, false) => format!("/{joined}"),
            (false, _) => joined,
        };
        Self { inner }
    }

    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Platform path for reading the file.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Last path component, `None` for the root or an empty path.
    pub fn file_name(&self) -> Option<&str> {
        let name = self.inner.rsplit('/').next()?;
        (!name.is_empty()).then_some(name)
    }

    /// Text after the last dot of the file name. Dotfiles have none.
    pub fn extension(&self) -> Option<&str> {
        let (stem, ext) = self.file_name()?.rsplit_once('.')?;
        (!stem.is_empty()).then_some(ext)
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inner)
    }
}

macro_rules! from_path_like {
    ($($ty:ty),*) => {
        $(impl From<$ty> for NormalizedPath {
            fn from(path: $ty) -> Self {
                Self::new(path)
            }
        })*
    };
}

from_path_like!(&str, String, &Path, PathBuf);
