//! Shared fakes for pipeline integration tests.

use async_trait::async_trait;
use pubdash_core::{
    Contributor, Contributors, DashError, PackageInfo, PackageRegistry, RepoMeta, RepoRef,
    RepositoryHost, Result, ScoreInfo,
};
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory registry. Names not in `packages` are unknown.
#[derive(Default)]
pub(crate) struct FakeRegistry {
    pub packages: HashMap<String, (PackageInfo, ScoreInfo)>,
    pub publishers: HashMap<String, Vec<String>>,
    pub lookups: Mutex<Vec<String>>,
}

impl FakeRegistry {
    pub(crate) fn with_package(mut self, info: PackageInfo, score: ScoreInfo) -> Self {
        self.packages.insert(info.name.clone(), (info, score));
        self
    }

    pub(crate) fn with_publisher(mut self, publisher: &str, names: &[&str]) -> Self {
        self.publishers.insert(
            publisher.to_string(),
            names.iter().map(|n| n.to_string()).collect(),
        );
        self
    }
}

#[async_trait]
impl PackageRegistry for FakeRegistry {
    async fn fetch_package(&self, name: &str) -> Result<Option<PackageInfo>> {
        self.lookups.lock().unwrap().push(name.to_string());
        Ok(self.packages.get(name).map(|(info, _)| info.clone()))
    }

    async fn fetch_score(&self, name: &str) -> Result<ScoreInfo> {
        Ok(self
            .packages
            .get(name)
            .map(|(_, score)| score.clone())
            .unwrap_or_default())
    }

    async fn list_publisher_packages(&self, publisher: &str) -> Result<Vec<String>> {
        self.publishers
            .get(publisher)
            .cloned()
            .ok_or_else(|| DashError::Status {
                status: 404,
                url: publisher.to_string(),
            })
    }
}

/// In-memory repository host. Unknown repositories answer 404.
#[derive(Default)]
pub(crate) struct FakeHost {
    pub repos: HashMap<String, (RepoMeta, Vec<Contributor>)>,
}

impl FakeHost {
    pub(crate) fn with_repo(mut self, slug: &str, meta: RepoMeta, contributors: Vec<Contributor>) -> Self {
        self.repos.insert(slug.to_string(), (meta, contributors));
        self
    }

    fn lookup(&self, repo: &RepoRef) -> Result<&(RepoMeta, Vec<Contributor>)> {
        self.repos.get(&repo.slug()).ok_or_else(|| DashError::Status {
            status: 404,
            url: repo.slug(),
        })
    }
}

#[async_trait]
impl RepositoryHost for FakeHost {
    async fn fetch_repo_meta(&self, repo: &RepoRef) -> Result<RepoMeta> {
        self.lookup(repo).map(|(meta, _)| meta.clone())
    }

    async fn fetch_contributors(&self, repo: &RepoRef) -> Result<Contributors> {
        self.lookup(repo).map(|(_, contributors)| Contributors {
            top: contributors.iter().take(3).cloned().collect(),
            total: contributors.len(),
        })
    }
}

pub(crate) fn package(name: &str, published_at: &str, repository: &str) -> PackageInfo {
    PackageInfo {
        name: name.to_string(),
        version: "1.0.0".to_string(),
        description: format!("The {} package", name),
        repository_url: repository.to_string(),
        published_at: published_at.to_string(),
        ..PackageInfo::default()
    }
}

pub(crate) fn likes(count: u64) -> ScoreInfo {
    ScoreInfo {
        like_count: count,
        ..ScoreInfo::default()
    }
}

pub(crate) fn contributor(id: u64) -> Contributor {
    Contributor {
        id,
        login: format!("user{}", id),
        profile_url: format!("https://github.com/user{}", id),
    }
}

/// A document with both regions, surrounded by text that must survive patching.
pub(crate) const DOCUMENT: &str = "# My packages\n\n\
<!-- md:PubDashboard begin -->old table<!-- md:PubDashboard end -->\n\n\
Total packages: <!-- md:PubDashboard-total begin -->0<!-- md:PubDashboard-total end -->\n\n\
Footer\n";
