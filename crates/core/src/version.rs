//! Version descriptor types
//!
//! A version descriptor carries the library list and Java toolchain version
//! for one game release. It is parsed from the upstream version JSON but
//! never fetched by this crate; the caller supplies the bytes or path.

use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::Result;
use crate::error::CoreError;

/// A `group:artifact:version` library reference with its platform filter
/// already resolved to a plain boolean.
#[derive(Debug, Clone, Deserialize)]
pub struct Library {
    /// Maven coordinate string
    pub name: String,
    /// Whether the library applies on the current platform
    #[serde(default = "default_allowed")]
    pub allowed: bool,
}

fn default_allowed() -> bool {
    true
}

impl Library {
    pub fn new(name: impl Into<String>, allowed: bool) -> Self {
        Self {
            name: name.into(),
            allowed,
        }
    }
}

/// Java toolchain requirement of a version
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JavaVersion {
    pub major_version: u32,
}

/// A version descriptor: ordered library list plus toolchain requirement.
///
/// Immutable for the duration of one render call. Library names are not
/// guaranteed unique; duplicates survive into rendered output.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Version {
    /// Version identifier, e.g. `1.20.4`
    pub id: String,
    /// Absent in very old descriptors; treated as a contract violation
    #[serde(default)]
    pub java_version: Option<JavaVersion>,
    /// Ordered library references
    #[serde(default)]
    pub libraries: Vec<Library>,
}

impl Version {
    /// Parse a descriptor from version JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parse a descriptor from a version JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| CoreError::io("descriptor read", path, e))?;
        Self::from_json(&data)
    }

    /// The major Java version required by this descriptor.
    ///
    /// A descriptor without one is invalid input; this is checked before any
    /// file I/O happens.
    pub fn java_major(&self) -> Result<u32> {
        self.java_version
            .map(|v| v.major_version)
            .ok_or_else(|| CoreError::MissingJavaVersion(self.id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_version_json() {
        let version = Version::from_json(
            r#"{
                "id": "1.20.4",
                "javaVersion": { "majorVersion": 17 },
                "libraries": [
                    { "name": "org.example:foo:1.0", "allowed": true },
                    { "name": "org.example:bar:2.0", "allowed": false }
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(version.id, "1.20.4");
        assert_eq!(version.java_major().unwrap(), 17);
        assert_eq!(version.libraries.len(), 2);
        assert!(version.libraries[0].allowed);
        assert!(!version.libraries[1].allowed);
    }

    #[test]
    fn test_missing_java_version_is_an_error() {
        let version = Version::from_json(r#"{ "id": "b1.7.3", "libraries": [] }"#).unwrap();
        let err = version.java_major().unwrap_err();
        assert!(matches!(err, CoreError::MissingJavaVersion(ref id) if id == "b1.7.3"));
    }

    #[test]
    fn test_allowed_defaults_to_true() {
        let version = Version::from_json(
            r#"{ "id": "1.20.4", "libraries": [{ "name": "org.example:foo:1.0" }] }"#,
        )
        .unwrap();
        assert!(version.libraries[0].allowed);
    }
}
