//! Configuration structures and loading logic.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::template::{DEFAULT_COLLECTION_TEMPLATE, DEFAULT_URLS_TEMPLATE};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub targeted_channels: ChannelsConfig,

    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Channel targeting configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ChannelsConfig {
    /// Names of the channels whose collections are processed.
    #[serde(default)]
    pub names: Vec<String>,
}

/// Discovery API configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Twitch client ID sent with every discovery API request.
    #[serde(default)]
    pub client_id: String,
}

/// Run options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Collection ids to process directly, bypassing channel search.
    #[serde(default)]
    pub collection_ids: Vec<String>,

    /// Individual video URLs to download as a flat batch.
    #[serde(default)]
    pub urls: Vec<String>,

    /// Only list each channel's collections instead of downloading.
    #[serde(default)]
    pub show_collections: bool,

    /// Write per-collection urls.txt files instead of downloading.
    #[serde(default)]
    pub save_urls: bool,

    /// Path where the files will be saved.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Quality/format selector passed to the downloader.
    #[serde(default = "default_format")]
    pub format: String,

    /// Output template for collection downloads.
    #[serde(default = "default_collection_template")]
    pub collection_template: String,

    /// Output template for flat URL downloads.
    #[serde(default = "default_urls_template")]
    pub urls_template: String,

    /// Downloader executable to drive.
    #[serde(default = "default_downloader_bin")]
    pub downloader_bin: String,

    /// Extra arguments passed to the downloader verbatim.
    #[serde(default)]
    pub downloader_args: Vec<String>,

    /// Warn when a collection's reported item count differs from the
    /// number of items actually returned.
    #[serde(default)]
    pub verify_item_counts: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            collection_ids: Vec::new(),
            urls: Vec::new(),
            show_collections: false,
            save_urls: false,
            output_dir: default_output_dir(),
            format: default_format(),
            collection_template: default_collection_template(),
            urls_template: default_urls_template(),
            downloader_bin: default_downloader_bin(),
            downloader_args: Vec::new(),
            verify_item_counts: false,
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("downloads")
}

fn default_format() -> String {
    "best".to_string()
}

fn default_collection_template() -> String {
    DEFAULT_COLLECTION_TEMPLATE.to_string()
}

fn default_urls_template() -> String {
    DEFAULT_URLS_TEMPLATE.to_string()
}

fn default_downloader_bin() -> String {
    "yt-dlp".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
