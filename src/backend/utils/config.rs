use std::path::PathBuf;
use std::time::Duration;

use crate::backend::utils::net::RetryPolicy;

/// Mojang version manifest.
pub const MANIFEST_URL: &str = "https://piston-meta.mojang.com/mc/game/version_manifest.json";
/// Minecraft wiki host; pages live under `/w/`.
pub const WIKI_BASE_URL: &str = "https://minecraft.wiki";

pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(6);
pub const MAX_RETRIES: u32 = 4;
pub const BASE_DELAY: Duration = Duration::from_secs(1);

/// Fixed settings for a single tracker run.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    pub manifest_url: String,
    pub wiki_base_url: String,
    pub retry: RetryPolicy,
    /// Directory that receives `download/` and `output/`.
    pub output_root: PathBuf,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            manifest_url: MANIFEST_URL.to_string(),
            wiki_base_url: WIKI_BASE_URL.to_string(),
            retry: RetryPolicy::default(),
            output_root: PathBuf::from("."),
        }
    }
}
