//! Download orchestration and the external download service.
//!
//! This module provides:
//! - The `DownloadService` seam over the external downloader
//! - Per-collection and flat-list download orchestration
//! - Saving per-collection URL lists

pub mod orchestrator;
pub mod service;

pub use orchestrator::{download_collections, download_urls, save_urls};
pub use service::{DownloadOptions, DownloadService, YtDlpService};
