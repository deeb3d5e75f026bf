//! gradlestub-core: Gradle project-descriptor generation for game versions
//!
//! This crate renders a minimal `build.gradle`/`settings.gradle` pair for a
//! version descriptor and syncs them into an output directory, writing only
//! the files whose content digest actually changed.

mod error;
mod hash;
mod render;
mod sync;
mod version;

pub use error::CoreError;
pub use hash::{ExistingDigest, hash_bytes, hash_file};
pub use render::{BUILD_GRADLE, Rendered, Renderer, SETTINGS_GRADLE};
pub use sync::{SyncOptions, sync, write_if_changed};
pub use version::{JavaVersion, Library, Version};

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;
