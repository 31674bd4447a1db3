//! pub.dev registry support for pubdash.
//!
//! Provides package metadata, score and publisher lookups against the
//! pub.dev REST API.

pub mod registry;
pub mod types;

pub use registry::{PUB_DEV_URL, PubDevRegistry, package_url};
