//! End-to-end dashboard refresh.

use crate::aggregate::Aggregator;
use crate::config::DashboardConfig;
use crate::patch::{self, PatchOutcome, Region, TABLE_REGION, TOTAL_REGION};
use crate::render::{render_table, render_total};
use crate::sort::sort_records;
use chrono::Utc;
use pubdash_core::{HttpClient, PackageRecord, PackageRegistry, RepositoryHost, Result};
use pubdash_github::GitHubHost;
use pubdash_pub::PubDevRegistry;
use std::path::Path;

/// What a run produced, including the outcome of each patch.
#[derive(Debug)]
pub struct RunReport {
    /// Records in final (sorted) order.
    pub records: Vec<PackageRecord>,
    pub table: Result<PatchOutcome>,
    pub total: Result<PatchOutcome>,
}

impl RunReport {
    /// `true` when neither patch failed. A region without markers counts as success.
    pub fn is_success(&self) -> bool {
        self.table.is_ok() && self.total.is_ok()
    }
}

/// Runs the pipeline against the configured upstream services.
///
/// Only client construction can fail here; upstream and patch failures are
/// reported through [`RunReport`].
///
/// # Examples
///
/// ```no_run
/// use pubdash::config::DashboardConfig;
///
/// # async fn example() -> pubdash_core::Result<()> {
/// let config = DashboardConfig {
///     packages: vec!["http".into()],
///     ..DashboardConfig::default()
/// };
/// let report = pubdash::run(&config).await?;
/// println!("{} packages", report.records.len());
/// # Ok(())
/// # }
/// ```
pub async fn run(config: &DashboardConfig) -> Result<RunReport> {
    let http = HttpClient::new(&config.network.http_config())?;
    let registry = PubDevRegistry::with_base_url(http.clone(), config.network.registry_url.clone());
    let host = GitHubHost::with_base_url(
        http,
        config.network.github_api_url.clone(),
        config.token.clone(),
    );

    Ok(run_with(config, &registry, &host).await)
}

/// Runs the pipeline with caller-supplied clients.
pub async fn run_with(
    config: &DashboardConfig,
    registry: &dyn PackageRegistry,
    host: &dyn RepositoryHost,
) -> RunReport {
    let aggregator = Aggregator::new(registry, host);

    let names = aggregator
        .input_names(&config.publishers, &config.packages)
        .await;
    tracing::info!("{} package names to process", names.len());

    let mut records = aggregator.collect(&names).await;
    sort_records(&mut records, config.sort_field, config.sort_mode);

    let table_body = patch::table_replacement(&render_table(&records, config.sort_field), Utc::now());
    let table = apply(&config.filename, TABLE_REGION, &table_body);
    let total = apply(&config.filename, TOTAL_REGION, &render_total(&records));

    RunReport {
        records,
        table,
        total,
    }
}

fn apply(path: &Path, region: Region, replacement: &str) -> Result<PatchOutcome> {
    let outcome = patch::patch_file(path, region, replacement);
    match &outcome {
        Ok(PatchOutcome::Replaced) => tracing::info!("{}: patched {}", path.display(), region.begin),
        Ok(PatchOutcome::MarkersNotFound) => {
            tracing::warn!("{}: marker {} not found, left unchanged", path.display(), region.begin);
        }
        Err(e) => tracing::error!("{}", e),
    }
    outcome
}
