/// Value recorded for a field the page doesn't mention.
pub const MISSING_FORMAT: &str = "0";

/// Pack formats scraped from a version page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionFields {
    pub resource_pack_format: String,
    pub data_pack_format: String,
}

impl Default for VersionFields {
    fn default() -> Self {
        Self {
            resource_pack_format: MISSING_FORMAT.to_string(),
            data_pack_format: MISSING_FORMAT.to_string(),
        }
    }
}
