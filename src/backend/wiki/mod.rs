//! Minecraft wiki scraping.

pub mod models;
pub mod page;

pub use models::VersionFields;
pub use page::{extract_fields, page_url};
