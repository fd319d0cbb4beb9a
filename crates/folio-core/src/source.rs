use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The single PDF the viewer displays.
///
/// Immutable for the lifetime of the view. Renderers branch on the variant:
/// a path is opened directly, in-memory bytes are handed over as a buffer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DocumentSource {
    Path(PathBuf),
    InMemory(Arc<[u8]>),
}

impl DocumentSource {
    pub fn path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn in_memory(bytes: impl Into<Arc<[u8]>>) -> Self {
        Self::InMemory(bytes.into())
    }
}

impl From<PathBuf> for DocumentSource {
    fn from(value: PathBuf) -> Self {
        Self::Path(value)
    }
}

impl From<&Path> for DocumentSource {
    fn from(value: &Path) -> Self {
        Self::Path(value.to_path_buf())
    }
}

impl From<Vec<u8>> for DocumentSource {
    fn from(value: Vec<u8>) -> Self {
        Self::InMemory(value.into())
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::InMemory(bytes) => write!(f, "<in-memory, {} bytes>", bytes.len()),
        }
    }
}
