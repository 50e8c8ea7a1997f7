//! Version manifest models.
//!
//! Only the parts of Mojang's manifest the tracker reads are modeled; unknown
//! fields are ignored and everything except `id` is optional.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Main version manifest from Mojang containing all available versions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionManifest {
    #[serde(default)]
    pub latest: Option<LatestVersions>,
    #[serde(default)]
    pub versions: Vec<VersionInfo>,
}

/// Latest advertised release.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LatestVersions {
    pub release: String,
}

/// Basic information about a Minecraft version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionInfo {
    pub id: String,
    #[serde(rename = "type", default)]
    pub version_type: Option<String>,
    #[serde(rename = "releaseTime", default)]
    pub release_time: Option<DateTime<Utc>>,
}

impl VersionInfo {
    /// Stable releases, plus entries that don't state a type at all.
    pub fn is_release(&self) -> bool {
        self.version_type
            .as_deref()
            .is_none_or(|kind| kind == "release")
    }
}
