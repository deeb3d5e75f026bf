//! Content digests for change detection
//!
//! Digests are used only for equality testing between rendered content and
//! what is already on disk, never for security. Target files are small text
//! manifests, so files are read fully into memory before hashing.

use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;

use crate::Result;
use crate::error::CoreError;

/// Compute the SHA256 digest of a byte buffer as a lowercase hex string
pub fn hash_bytes(data: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hex::encode(hasher.finalize())
}

/// Compute the SHA256 digest of a file's contents as a lowercase hex string
pub fn hash_file(path: &Path) -> Result<String> {
    let data = fs::read(path).map_err(|e| CoreError::io("digest read", path, e))?;
    Ok(hash_bytes(&data))
}

/// Digest of the content currently at a target path.
///
/// `Missing` marks a path with no file behind it. It is a distinct case
/// rather than an empty-string digest so the "first write always happens"
/// rule is explicit: `Missing` never matches any real digest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExistingDigest {
    /// No file exists at the path
    Missing,
    /// Digest of the file's current bytes
    Digest(String),
}

impl ExistingDigest {
    /// Read the digest of whatever is currently at `path`
    pub fn of(path: &Path) -> Result<Self> {
        if path.exists() {
            Ok(ExistingDigest::Digest(hash_file(path)?))
        } else {
            Ok(ExistingDigest::Missing)
        }
    }

    /// Whether this digest equals a freshly computed content digest
    pub fn matches(&self, new_digest: &str) -> bool {
        match self {
            ExistingDigest::Missing => false,
            ExistingDigest::Digest(existing) => existing == new_digest,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_hash_bytes() {
        let hash = hash_bytes(b"hello world");
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
    }

    #[test]
    fn test_hash_file() -> Result<()> {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"hello world").unwrap();
        file.flush().unwrap();

        let hash = hash_file(file.path())?;
        assert_eq!(
            hash,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        Ok(())
    }

    #[test]
    fn test_missing_never_matches() {
        let missing = ExistingDigest::of(Path::new("/nonexistent/gradlestub-test")).unwrap();
        assert_eq!(missing, ExistingDigest::Missing);
        assert!(!missing.matches(&hash_bytes(b"")));
        assert!(!missing.matches(""));
    }

    #[test]
    fn test_existing_matches_same_content() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"content").unwrap();
        file.flush().unwrap();

        let existing = ExistingDigest::of(file.path()).unwrap();
        assert!(existing.matches(&hash_bytes(b"content")));
        assert!(!existing.matches(&hash_bytes(b"other")));
    }
}
