//! Asset sources - where assets come from.

use std::path::{Path, PathBuf};
use std::sync::Arc;

/// The source of an asset - where to load it from.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AssetSource {
    /// Load from a file on disk.
    Disk {
        /// The path as provided; relative paths resolve against the reader's base path.
        path: PathBuf,
    },

    /// Load from raw bytes (already in memory).
    Bytes {
        /// Identifier for this data, used in logs and error messages.
        id: String,
        /// The raw bytes.
        data: Arc<[u8]>,
    },
}

impl AssetSource {
    /// Create a disk source from a path.
    pub fn disk(path: impl AsRef<Path>) -> Self {
        AssetSource::Disk {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Create a bytes source with an identifier.
    pub fn bytes(id: impl Into<String>, data: impl Into<Arc<[u8]>>) -> Self {
        AssetSource::Bytes {
            id: id.into(),
            data: data.into(),
        }
    }

    /// Get the original path if this is a disk source.
    pub fn path(&self) -> Option<&Path> {
        match self {
            AssetSource::Disk { path } => Some(path),
            AssetSource::Bytes { .. } => None,
        }
    }

    /// File extension, taken from the path or from a dotted bytes identifier.
    pub fn extension(&self) -> Option<&str> {
        match self {
            AssetSource::Disk { path } => path.extension().and_then(|e| e.to_str()),
            AssetSource::Bytes { id, .. } => {
                let (_, ext) = id.rsplit_once('.')?;
                (!ext.contains('/') && !ext.contains(':')).then_some(ext)
            }
        }
    }

    /// Get a string representation of this source for logging/debugging.
    pub fn display_path(&self) -> String {
        match self {
            AssetSource::Disk { path } => path.display().to_string(),
            AssetSource::Bytes { id, .. } => format!("bytes://{}", id),
        }
    }

    /// Check if this is a disk source.
    pub fn is_disk(&self) -> bool {
        matches!(self, AssetSource::Disk { .. })
    }

    /// Check if this is a bytes source.
    pub fn is_bytes(&self) -> bool {
        matches!(self, AssetSource::Bytes { .. })
    }
}

impl From<&Path> for AssetSource {
    fn from(path: &Path) -> Self {
        AssetSource::disk(path)
    }
}

impl From<PathBuf> for AssetSource {
    fn from(path: PathBuf) -> Self {
        AssetSource::Disk { path }
    }
}

impl From<&str> for AssetSource {
    fn from(path: &str) -> Self {
        AssetSource::disk(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disk_extension() {
        let source = AssetSource::disk("fonts/ascii.png");
        assert_eq!(source.extension(), Some("png"));
        assert_eq!(source.path(), Some(Path::new("fonts/ascii.png")));
        assert!(source.is_disk());
    }

    #[test]
    fn test_bytes_extension() {
        let source = AssetSource::bytes("embedded/ascii.png", vec![1u8, 2, 3]);
        assert_eq!(source.extension(), Some("png"));
        assert_eq!(source.display_path(), "bytes://embedded/ascii.png");

        let hashed = AssetSource::bytes("hash:0011", vec![0u8]);
        assert_eq!(hashed.extension(), None);
    }

    #[test]
    fn test_from_str_is_disk() {
        let source: AssetSource = "ascii.png".into();
        assert!(source.is_disk());
        assert!(!source.is_bytes());
    }
}
