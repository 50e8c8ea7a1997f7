//! Version page lookup on the Minecraft wiki.

use std::sync::LazyLock;

use log::debug;
use scraper::{ElementRef, Html, Selector};

use super::models::VersionFields;

const RESOURCE_PACK_LABEL: &str = "Resource pack format";
const DATA_PACK_LABEL: &str = "Data pack format";

static ROW: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("valid selector"));
static HEADER: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("th").expect("valid selector"));
static DATA: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("valid selector"));

/// `<base>/w/Java_Edition_<version>`, with spaces turned into underscores.
pub fn page_url(wiki_base_url: &str, version: &str) -> String {
    format!(
        "{}/w/Java_Edition_{}",
        wiki_base_url.trim_end_matches('/'),
        version.replace(' ', "_")
    )
}

/// Scans every table row with a header and a data cell for the two pack formats.
///
/// Fields that never show up keep their default of `"0"`. A later matching
/// row overrides an earlier one.
pub fn extract_fields(html: &str) -> VersionFields {
    let document = parse_rows(html);
    let mut fields = VersionFields::default();

    for row in document.select(&ROW) {
        let (Some(th), Some(td)) = (row.select(&HEADER).next(), row.select(&DATA).next()) else {
            continue;
        };

        let label = stripped_text(&th);
        if label.contains(RESOURCE_PACK_LABEL) {
            fields.resource_pack_format = cell_value(&td);
        } else if label.contains(DATA_PACK_LABEL) {
            fields.data_pack_format = cell_value(&td);
        }
    }

    debug!(
        "Extracted resource pack {} / data pack {}",
        fields.resource_pack_format, fields.data_pack_format
    );
    fields
}

/// Parses `html`, keeping table rows that are not inside a `<table>`.
///
/// The HTML5 tree builder discards bare `<tr>`, `<th>` and `<td>` tags, so a
/// page without any surviving row is parsed again inside a table.
fn parse_rows(html: &str) -> Html {
    let document = Html::parse_document(html);
    if document.select(&ROW).next().is_some() {
        return document;
    }
    Html::parse_fragment(&format!("<table>{html}</table>"))
}

/// Text of every descendant text node, each trimmed, glued together.
fn stripped_text(el: &ElementRef<'_>) -> String {
    el.text().map(str::trim).collect()
}

/// Cell text up to the first citation marker such as `[a]`.
fn cell_value(td: &ElementRef<'_>) -> String {
    let text = stripped_text(td);
    text.split('[').next().unwrap_or_default().trim().to_string()
}
