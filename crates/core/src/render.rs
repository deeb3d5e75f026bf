//! Rendering of the Gradle project descriptor files
//!
//! Rendering is a pure function of the version descriptor and the renderer's
//! injected configuration: same inputs, byte-identical output. That property
//! is what makes the digest comparison in [`crate::sync`] meaningful.

use std::borrow::Cow;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::version::Version;

/// File name of the generated dependency manifest
pub const BUILD_GRADLE: &str = "build.gradle";

/// File name of the generated settings file
pub const SETTINGS_GRADLE: &str = "settings.gradle";

/// Extra compile-only dependencies that are stripped from the version JSON.
/// This also includes dependencies with bad OS filtering rules when they are
/// needed on all systems for compiling.
const EXTRA_DEPENDENCIES: [&str; 3] = [
    "org.jetbrains:annotations:24.1.0",
    "com.google.code.findbugs:jsr305:3.0.2",
    "ca.weblite:java-objc-bridge:1.1",
];

/// Build script template with `%java_version%` and `%deps%` placeholders.
/// Substitution is literal text replacement; coordinate strings are limited
/// to letters, digits, `.`, `:` and `-`, so no escaping is needed.
const BUILD_GRADLE_TEMPLATE: &str = "\
plugins {
    id 'java'
}

java {
    toolchain {
        languageVersion = JavaLanguageVersion.of(%java_version%)
    }
}

repositories {
    mavenCentral()
    maven {
        name = 'Mojang'
        url = 'https://libraries.minecraft.net/'
    }
}

dependencies {
%deps%
}
";

/// Fixed settings file content, pinning the toolchain resolver plugin
const SETTINGS_GRADLE_CONTENT: &str = "\
plugins {
    id 'org.gradle.toolchains.foojay-resolver-convention' version '0.8.0'
}
";

/// Renders the two project descriptor files for a version.
///
/// Templates and the extra-dependency list are injected at construction so
/// tests can substitute alternates; [`Renderer::default`] carries the
/// production values.
#[derive(Debug, Clone)]
pub struct Renderer {
    build_template: Cow<'static, str>,
    settings_content: Cow<'static, str>,
    extra_dependencies: Vec<String>,
}

impl Default for Renderer {
    fn default() -> Self {
        Self {
            build_template: Cow::Borrowed(BUILD_GRADLE_TEMPLATE),
            settings_content: Cow::Borrowed(SETTINGS_GRADLE_CONTENT),
            extra_dependencies: EXTRA_DEPENDENCIES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl Renderer {
    /// Create a renderer with explicit templates and extra dependencies
    pub fn new(
        build_template: impl Into<Cow<'static, str>>,
        settings_content: impl Into<Cow<'static, str>>,
        extra_dependencies: Vec<String>,
    ) -> Self {
        Self {
            build_template: build_template.into(),
            settings_content: settings_content.into(),
            extra_dependencies,
        }
    }

    /// Render the build script and settings file for a version.
    ///
    /// Libraries not allowed on the current platform are dropped; the extra
    /// dependencies are always appended. The combined coordinates are sorted
    /// lexicographically, duplicates included, and emitted one
    /// `implementation` line each.
    pub fn render(&self, version: &Version) -> Result<Rendered> {
        let java_version = version.java_major()?;

        let mut coordinates: Vec<&str> = version
            .libraries
            .iter()
            .filter(|lib| lib.allowed)
            .map(|lib| lib.name.as_str())
            .chain(self.extra_dependencies.iter().map(String::as_str))
            .collect();
        coordinates.sort();

        let deps = coordinates
            .iter()
            .map(|coord| format!("    implementation '{coord}'"))
            .collect::<Vec<_>>()
            .join("\n");

        let build_gradle = self
            .build_template
            .replace("%java_version%", &java_version.to_string())
            .replace("%deps%", &deps);

        Ok(Rendered {
            build_gradle: build_gradle.into_bytes(),
            settings_gradle: self.settings_content.as_bytes().to_vec(),
        })
    }
}

/// Rendered byte content of the two descriptor files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub build_gradle: Vec<u8>,
    pub settings_gradle: Vec<u8>,
}

impl Rendered {
    /// The ordered (path, content) pairs to sync into `output`
    pub fn into_pairs(self, output: &Path) -> Vec<(PathBuf, Vec<u8>)> {
        vec![
            (output.join(BUILD_GRADLE), self.build_gradle),
            (output.join(SETTINGS_GRADLE), self.settings_gradle),
        ]
    }
}
