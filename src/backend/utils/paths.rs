//! Path utilities.

use std::path::PathBuf;

/// Reserved for raw downloads; created but not written to yet.
const DOWNLOAD_DIR: &str = "download";
const OUTPUT_DIR: &str = "output";
const RP_VERSION_FILE: &str = "rp_version.json";
const MCV_FILE: &str = "mcv.txt";

/// Output layout rooted at a base directory.
#[derive(Debug, Clone)]
pub struct OutputPaths {
    root: PathBuf,
}

impl OutputPaths {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[inline]
    pub fn download_dir(&self) -> PathBuf {
        self.root.join(DOWNLOAD_DIR)
    }

    #[inline]
    pub fn output_dir(&self) -> PathBuf {
        self.root.join(OUTPUT_DIR)
    }

    /// `output/rp_version.json`
    pub fn rp_version_file(&self) -> PathBuf {
        self.output_dir().join(RP_VERSION_FILE)
    }

    /// `output/mcv.txt`
    pub fn mcv_file(&self) -> PathBuf {
        self.output_dir().join(MCV_FILE)
    }
}
