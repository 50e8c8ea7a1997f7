//! Minecraft version data: manifest models, release selection and pack format table.

/// Resource pack format table.
pub mod formats;
/// Data models and structures.
pub mod models;
/// Version management functionality.
pub mod versions;

pub use formats::CombinedVersionTable;
pub use versions::VersionManager;
