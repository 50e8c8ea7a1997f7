//! Resource pack format table: known releases plus the freshly scraped one.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Serializer, Value};

use crate::simple_error;
use crate::utils::Result;

/// Resource pack formats of past releases, newest first.
pub const HISTORICAL_FORMATS: &[(&str, &str)] = &[
    ("1.21.8", "64"),
    ("1.21.7", "64"),
    ("1.21.6", "63"),
    ("1.21.5", "55"),
    ("1.21.4", "46"),
    ("1.21.3", "42"),
    ("1.21.2", "42"),
    ("1.21.1", "34"),
    ("1.21", "34"),
    ("1.20.6", "32"),
    ("1.20.5", "32"),
    ("1.20.4", "22"),
    ("1.20.3", "22"),
    ("1.20.2", "18"),
    ("1.20.1", "15"),
    ("1.20", "15"),
    ("1.19.4", "13"),
    ("1.19.3", "12"),
    ("1.19.2", "9"),
    ("1.19.1", "9"),
    ("1.19", "9"),
    ("1.18.2", "8"),
    ("1.18.1", "8"),
    ("1.18", "8"),
    ("1.17.1", "7"),
    ("1.17", "7"),
    ("1.16.5", "6"),
    ("1.16.4", "6"),
    ("1.16.3", "6"),
    ("1.16.2", "6"),
    ("1.16.1", "5"),
    ("1.16", "5"),
    ("1.15.2", "5"),
    ("1.15.1", "5"),
    ("1.15", "5"),
    ("1.14.4", "4"),
    ("1.14.3", "4"),
    ("1.14.2", "4"),
    ("1.14.1", "4"),
    ("1.14", "4"),
    ("1.13.2", "4"),
    ("1.13.1", "4"),
    ("1.13", "4"),
    ("1.12.2", "3"),
    ("1.12.1", "3"),
    ("1.12", "3"),
    ("1.11.2", "3"),
    ("1.11.1", "3"),
    ("1.11", "3"),
    ("1.10.2", "2"),
    ("1.10.1", "2"),
    ("1.10", "2"),
    ("1.9.4", "2"),
    ("1.9.3", "2"),
    ("1.9.2", "2"),
    ("1.9.1", "2"),
    ("1.9", "2"),
    ("1.8.9", "1"),
    ("1.8.8", "1"),
    ("1.8.7", "1"),
    ("1.8.6", "1"),
    ("1.8.5", "1"),
    ("1.8.4", "1"),
    ("1.8.3", "1"),
    ("1.8.2", "1"),
    ("1.8.1", "1"),
    ("1.8", "1"),
    ("1.7.10", "1"),
    ("1.7.9", "1"),
    ("1.7.8", "1"),
    ("1.7.7", "1"),
    ("1.7.6", "1"),
    ("1.7.5", "1"),
    ("1.7.4", "1"),
    ("1.7.2", "1"),
    ("1.6.4", "1"),
    ("1.6.2", "1"),
    ("1.6.1", "1"),
];

/// Version id to resource pack format, in output order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CombinedVersionTable(Map<String, Value>);

impl CombinedVersionTable {
    /// Puts the scraped entry first, followed by every historical entry.
    ///
    /// The scraped value always wins when the historical table already has the
    /// same version.
    pub fn merge(latest_version: &str, resource_pack_format: &str) -> Self {
        Self::merge_with(latest_version, resource_pack_format, HISTORICAL_FORMATS)
    }

    pub fn merge_with(
        latest_version: &str,
        resource_pack_format: &str,
        historical: &[(&str, &str)],
    ) -> Self {
        let mut entries = Map::with_capacity(historical.len() + 1);
        entries.insert(
            latest_version.to_string(),
            Value::String(resource_pack_format.to_string()),
        );

        for (version, format) in historical {
            if *version != latest_version {
                entries.insert(version.to_string(), Value::String(format.to_string()));
            }
        }

        Self(entries)
    }

    #[cfg(test)]
    pub fn get(&self, version: &str) -> Option<&str> {
        self.0.get(version).and_then(Value::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Pretty JSON with 4-space indentation; non-ASCII is written as-is.
    pub fn to_json(&self) -> Result<String> {
        let mut ser = Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(b"    "));
        self.serialize(&mut ser)?;
        String::from_utf8(ser.into_inner())
            .map_err(|e| simple_error!(Parse, "Version table is not valid UTF-8: {e}"))
    }
}
