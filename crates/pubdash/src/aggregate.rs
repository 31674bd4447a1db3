//! Record assembly.
//!
//! Each requested name goes through a fixed sequence of stages:
//!
//! 1. registry lookup (stops here with an unresolved record on failure)
//! 2. score lookup
//! 3. repository link resolution over repository, issue tracker, homepage
//! 4. repository-host metadata and contributors, when a link resolved
//!
//! Every stage takes the record by value and returns it, so a record is
//! complete once [`Aggregator::build_record`] returns and is not touched
//! afterwards. Failures in stages 2-4 are logged and leave the affected
//! fields at their zero values.

use crate::names::merge_names;
use pubdash_core::{PackageRecord, PackageRegistry, RepositoryHost, link};

/// Drives the registry and repository-host clients, one request at a time.
pub struct Aggregator<'a> {
    registry: &'a dyn PackageRegistry,
    host: &'a dyn RepositoryHost,
}

impl<'a> Aggregator<'a> {
    pub fn new(registry: &'a dyn PackageRegistry, host: &'a dyn RepositoryHost) -> Self {
        Self { registry, host }
    }

    /// Expands publishers and merges the result with explicit package names.
    pub async fn input_names(&self, publishers: &[String], packages: &[String]) -> Vec<String> {
        let mut discovered = Vec::new();

        for publisher in merge_names(publishers, Vec::<&str>::new()) {
            match self.registry.list_publisher_packages(&publisher).await {
                Ok(names) => {
                    tracing::info!("publisher {}: {} packages", publisher, names.len());
                    discovered.extend(names);
                }
                Err(e) => tracing::warn!("publisher {}: lookup failed: {}", publisher, e),
            }
        }

        merge_names(discovered, packages)
    }

    /// Builds one record per name, in the order given.
    pub async fn collect(&self, names: &[String]) -> Vec<PackageRecord> {
        let mut records = Vec::with_capacity(names.len());
        for name in names {
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            records.push(self.build_record(name).await);
        }
        records
    }

    pub async fn build_record(&self, name: &str) -> PackageRecord {
        tracing::info!("package {}: fetching", name);

        let record = match self.registry.fetch_package(name).await {
            Ok(Some(info)) => PackageRecord::resolved(info),
            Ok(None) => {
                tracing::info!("package {}: not found on registry", name);
                return PackageRecord::unresolved(name);
            }
            Err(e) => {
                tracing::warn!("package {}: registry lookup failed: {}", name, e);
                return PackageRecord::unresolved(name);
            }
        };

        let record = self.with_score(record).await;
        let record = self.with_repository(record).await;

        tracing::info!("package {}: resolved", name);
        record
    }

    async fn with_score(&self, mut record: PackageRecord) -> PackageRecord {
        match self.registry.fetch_score(&record.name).await {
            Ok(score) => record.score = score,
            Err(e) => tracing::warn!("package {}: score lookup failed: {}", record.name, e),
        }
        record
    }

    async fn with_repository(&self, mut record: PackageRecord) -> PackageRecord {
        let Some(repo) = link::resolve_first(record.link_candidates()) else {
            tracing::info!("package {}: no repository link", record.name);
            return record;
        };

        tracing::info!("package {}: repository {}", record.name, repo.slug());

        match self.host.fetch_repo_meta(&repo).await {
            Ok(meta) => record.repo_meta = meta,
            Err(e) => tracing::warn!("{}: repository lookup failed: {}", repo.slug(), e),
        }

        match self.host.fetch_contributors(&repo).await {
            Ok(contributors) => {
                record.repo_meta.contributor_count = contributors.total;
                record.top_contributors = contributors.top;
            }
            Err(e) => tracing::warn!("{}: contributors lookup failed: {}", repo.slug(), e),
        }

        record.repo = Some(repo);
        record
    }
}
