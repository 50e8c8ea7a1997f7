//! One tracker run: manifest, wiki page, pack formats, output files.

use log::info;

use crate::backend::launcher::{CombinedVersionTable, VersionManager};
use crate::backend::utils::config::TrackerConfig;
use crate::backend::utils::net::HttpFetcher;
use crate::backend::utils::paths::OutputPaths;
use crate::backend::utils::system::files::{ensure_directory, write_text};
use crate::backend::wiki::{self, VersionFields};
use crate::utils::Result;

/// What a successful run found and wrote.
#[derive(Debug, Clone)]
pub struct RunReport {
    pub version: String,
    pub fields: VersionFields,
    pub table: CombinedVersionTable,
}

pub struct FormatTracker {
    config: TrackerConfig,
    paths: OutputPaths,
    fetcher: HttpFetcher,
}

impl FormatTracker {
    pub fn new(config: TrackerConfig) -> Result<Self> {
        let fetcher = HttpFetcher::new(config.retry)?;
        let paths = OutputPaths::new(config.output_root.clone());
        Ok(Self {
            config,
            paths,
            fetcher,
        })
    }

    #[cfg(test)]
    pub fn paths(&self) -> &OutputPaths {
        &self.paths
    }

    /// Runs the whole sequence once.
    ///
    /// Any fetch or manifest failure returns early; output files are only
    /// written once everything they contain is known.
    pub async fn run(&self) -> Result<RunReport> {
        ensure_directory(self.paths.download_dir()).await?;
        ensure_directory(self.paths.output_dir()).await?;

        let mut versions = VersionManager::new(self.fetcher.clone(), &self.config.manifest_url);
        versions.update_manifest().await?;
        let latest = versions.latest_release()?;
        let version = latest.id.clone();
        match latest.release_time {
            Some(released) => info!("Latest version: {version} (released {})", released.date_naive()),
            None => info!("Latest version: {version}"),
        }

        let url = wiki::page_url(&self.config.wiki_base_url, &version);
        info!("Fetching wiki page {url}");
        let html = self.fetcher.get_text(&url).await?;
        let fields = wiki::extract_fields(&html);

        let table = CombinedVersionTable::merge(&version, &fields.resource_pack_format);
        let json = table.to_json()?;

        write_text(self.paths.rp_version_file(), &json).await?;
        write_text(self.paths.mcv_file(), &format!("{version}\n")).await?;

        info!("---------------------------------------");
        info!("Minecraft Version:     {version}");
        info!("Resourcepack Version:  {}", fields.resource_pack_format);
        info!("Datapack Version:      {}", fields.data_pack_format);
        info!("---------------------------------------");
        info!(
            "Saved {} versions to {}",
            table.len(),
            self.paths.output_dir().display()
        );

        Ok(RunReport {
            version,
            fields,
            table,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::launcher::formats::HISTORICAL_FORMATS;
    use crate::backend::utils::net::RetryPolicy;
    use crate::utils::error::ErrorKind;
    use std::time::Duration;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const MANIFEST: &str = r#"{
        "latest": {"release": "1.21.0", "snapshot": "1.21.0"},
        "versions": [
            {"id": "1.21.0", "type": "release", "releaseTime": "2024-06-13T08:24:03+00:00"},
            {"id": "1.20.0", "type": "release"}
        ]
    }"#;

    const PAGE: &str = r#"<html><body><table>
        <tr><th>Resource pack format</th><td>4[a]</td></tr>
        <tr><th>Data pack format</th><td>48</td></tr>
    </table></body></html>"#;

    fn config(server: &MockServer, root: &std::path::Path) -> TrackerConfig {
        TrackerConfig {
            manifest_url: format!("{}/mc/game/version_manifest.json", server.uri()),
            wiki_base_url: server.uri(),
            retry: RetryPolicy {
                timeout: Duration::from_secs(5),
                retries: 0,
                base_delay: Duration::from_millis(1),
            },
            output_root: root.to_path_buf(),
        }
    }

    async fn mount_manifest(server: &MockServer, body: &str) {
        Mock::given(method("GET"))
            .and(path("/mc/game/version_manifest.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string(body))
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn writes_table_and_version_file() {
        let server = MockServer::start().await;
        mount_manifest(&server, MANIFEST).await;
        Mock::given(method("GET"))
            .and(path("/w/Java_Edition_1.21.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(1)
            .mount(&server)
            .await;
        let tmp = tempfile::tempdir().unwrap();

        let tracker = FormatTracker::new(config(&server, tmp.path())).unwrap();
        let report = tracker.run().await.unwrap();

        assert_eq!(report.version, "1.21.0");
        assert_eq!(report.fields.resource_pack_format, "4");
        assert_eq!(report.fields.data_pack_format, "48");

        let mcv = std::fs::read_to_string(tracker.paths().mcv_file()).unwrap();
        assert_eq!(mcv, "1.21.0\n");

        let json = std::fs::read_to_string(tracker.paths().rp_version_file()).unwrap();
        let written: serde_json::Map<String, serde_json::Value> =
            serde_json::from_str(&json).unwrap();
        assert_eq!(written["1.21.0"], "4");
        for (version, format) in HISTORICAL_FORMATS {
            assert_eq!(written[*version], *format);
        }
        assert_eq!(written.keys().next().map(String::as_str), Some("1.21.0"));
        assert!(tracker.paths().download_dir().is_dir());
    }

    #[tokio::test]
    async fn empty_manifest_stops_before_page_fetch() {
        let server = MockServer::start().await;
        mount_manifest(&server, r#"{"versions": []}"#).await;
        Mock::given(method("GET"))
            .and(path("/w/Java_Edition_1.21.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string(PAGE))
            .expect(0)
            .mount(&server)
            .await;
        let tmp = tempfile::tempdir().unwrap();

        let tracker = FormatTracker::new(config(&server, tmp.path())).unwrap();
        let err = tracker.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EmptyManifest);
        assert!(!tracker.paths().rp_version_file().exists());
        assert!(!tracker.paths().mcv_file().exists());
    }

    #[tokio::test]
    async fn malformed_manifest_is_fatal() {
        let server = MockServer::start().await;
        mount_manifest(&server, "not json").await;
        let tmp = tempfile::tempdir().unwrap();

        let tracker = FormatTracker::new(config(&server, tmp.path())).unwrap();
        let err = tracker.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(!tracker.paths().mcv_file().exists());
    }

    #[tokio::test]
    async fn failed_page_fetch_writes_nothing() {
        let server = MockServer::start().await;
        mount_manifest(&server, MANIFEST).await;
        Mock::given(method("GET"))
            .and(path("/w/Java_Edition_1.21.0"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;
        let tmp = tempfile::tempdir().unwrap();

        let tracker = FormatTracker::new(config(&server, tmp.path())).unwrap();
        let err = tracker.run().await.unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Http);
        assert!(!tracker.paths().rp_version_file().exists());
        assert!(!tracker.paths().mcv_file().exists());
    }

    #[tokio::test]
    async fn page_without_formats_records_zero() {
        let server = MockServer::start().await;
        mount_manifest(&server, MANIFEST).await;
        Mock::given(method("GET"))
            .and(path("/w/Java_Edition_1.21.0"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<p>stub</p>"))
            .mount(&server)
            .await;
        let tmp = tempfile::tempdir().unwrap();

        let tracker = FormatTracker::new(config(&server, tmp.path())).unwrap();
        let report = tracker.run().await.unwrap();

        assert_eq!(report.fields, VersionFields::default());
        assert_eq!(report.table.get("1.21.0"), Some("0"));
    }
}
