mod backend;
mod utils;

use anyhow::Context;
use backend::FormatTracker;
use backend::utils::config::TrackerConfig;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    utils::logging::init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> anyhow::Result<()> {
    let tracker = FormatTracker::new(TrackerConfig::default())
        .context("Failed to create HTTP client")?;
    let report = tracker.run().await.map_err(|e| {
        let reason = e.kind().abort_reason();
        anyhow::Error::new(e).context(reason)
    })?;
    log::debug!(
        "{} -> resource pack {}, data pack {} ({} table entries)",
        report.version,
        report.fields.resource_pack_format,
        report.fields.data_pack_format,
        report.table.len()
    );
    Ok(())
}
