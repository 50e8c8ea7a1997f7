//! Version management: downloading the manifest and picking the newest release.

use super::models::{VersionInfo, VersionManifest};
use crate::backend::utils::net::HttpFetcher;
use crate::simple_error;
use crate::utils::Result;
use log::{debug, info, warn};

/// Version manager for handling Minecraft version operations.
pub struct VersionManager {
    fetcher: HttpFetcher,
    manifest_url: String,
    manifest: Option<VersionManifest>,
}

impl VersionManager {
    pub fn new(fetcher: HttpFetcher, manifest_url: impl Into<String>) -> Self {
        Self {
            fetcher,
            manifest_url: manifest_url.into(),
            manifest: None,
        }
    }

    /// Downloads and parses the version manifest.
    pub async fn update_manifest(&mut self) -> Result<()> {
        info!("Fetching version manifest from {}", self.manifest_url);

        let body = self.fetcher.get_text(&self.manifest_url).await?;
        let manifest = parse_manifest(&body)?;
        debug!("Manifest lists {} versions", manifest.versions.len());

        self.manifest = Some(manifest);
        Ok(())
    }

    /// The newest release of the loaded manifest.
    pub fn latest_release(&self) -> Result<&VersionInfo> {
        let manifest = self
            .manifest
            .as_ref()
            .ok_or_else(|| simple_error!("Version manifest not loaded"))?;

        latest_release(manifest)
    }
}

/// Parses manifest JSON text.
pub fn parse_manifest(text: &str) -> Result<VersionManifest> {
    serde_json::from_str(text)
        .map_err(|e| simple_error!(Parse, "Failed to parse version manifest: {e}"))
}

/// Picks the newest release, trusting the manifest's newest-first ordering.
///
/// Entries typed as anything but `release` (snapshots, old betas) are skipped;
/// entries without a type are taken as releases.
pub fn latest_release(manifest: &VersionManifest) -> Result<&VersionInfo> {
    let version = manifest
        .versions
        .iter()
        .find(|v| v.is_release())
        .ok_or_else(|| simple_error!(EmptyManifest, "No Minecraft versions found in manifest"))?;

    if let Some(latest) = &manifest.latest {
        if latest.release != version.id {
            warn!(
                "Manifest advertises {} as latest release but lists {} first",
                latest.release, version.id
            );
        }
    }

    Ok(version)
}
