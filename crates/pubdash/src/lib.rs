//! pub.dev package dashboard generator.
//!
//! Collects package metadata from the pub.dev registry and repository
//! statistics from GitHub, renders them as a Markdown table and splices the
//! table (plus a package count) into marker-delimited regions of a document.
//!
//! # Pipeline
//!
//! 1. [`aggregate`]: expand publishers, merge names, build one record per name
//! 2. [`sort`]: order records by the configured field and direction
//! 3. [`render`]: produce the table and the count
//! 4. [`patch`]: replace the table and count regions in the target file

pub mod aggregate;
pub mod cli;
pub mod config;
pub mod names;
pub mod patch;
pub mod pipeline;
pub mod render;
pub mod sort;

// Re-export commonly used types
pub use config::{DashboardConfig, SortField, SortMode};
pub use patch::PatchOutcome;
pub use pipeline::{RunReport, run, run_with};
