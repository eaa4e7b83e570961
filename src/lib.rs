//! Twitch Downloader - download VODs and complete video collections.
//!
//! This library resolves a Twitch channel's video collections into ordered
//! video URL lists and drives an external downloader to fetch them into a
//! structured directory tree.
//!
//! # Features
//!
//! - Paginated enumeration of a channel's collections
//! - Expansion of collections into ordered video URL lists
//! - Output-path template resolution
//! - Batch download orchestration via yt-dlp
//! - Saving per-collection URL lists for later manual processing
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use twitch_downloader::{runner, Config, TwitchApi, YtDlpService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = TwitchApi::new(&config.api.client_id)?;
//!     let service = YtDlpService::new(&config.options.downloader_bin);
//!
//!     runner::run(&api, &service, &config).await?;
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod cli;
pub mod collections;
pub mod config;
pub mod download;
pub mod error;
pub mod fs;
pub mod output;
pub mod runner;
pub mod template;

// Re-exports for convenience
pub use api::TwitchApi;
pub use collections::{CollectionsApi, CollectionsIndex};
pub use config::Config;
pub use download::{DownloadOptions, DownloadService, YtDlpService};
pub use error::{Error, Result};
