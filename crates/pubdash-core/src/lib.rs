//! Core abstractions for pubdash.
//!
//! This crate provides the pieces shared by the registry and repository-host
//! clients and by the dashboard pipeline.
//!
//! # Architecture
//!
//! pubdash-core defines:
//! - **Traits**: `PackageRegistry`, `RepositoryHost`
//! - **HTTP**: a JSON-over-HTTP client with optional bearer authentication
//! - **Records**: `PackageRecord` and the score/repository data it aggregates
//! - **Link resolution**: extracting `owner/repo` from free-form URLs
//! - **Error Types**: `DashError` and the `Result` alias

pub mod error;
pub mod http;
pub mod link;
pub mod record;
pub mod registry;

// Re-export commonly used types
pub use error::{DashError, PatchAction, Result};
pub use http::{HttpClient, HttpConfig};
pub use record::{
    Contributor, Contributors, PackageInfo, PackageRecord, RepoMeta, RepoRef, ResolveCode,
    ScoreInfo,
};
pub use registry::{PackageRegistry, RepositoryHost};
