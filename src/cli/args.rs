//! Command-line argument definitions using clap.

use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

/// Twitch collection downloader CLI.
#[derive(Parser, Debug)]
#[command(
    name = "twitch-downloader",
    version,
    about = "Download VODs and complete video collections from Twitch",
    long_about = "A CLI tool to download complete video collections from Twitch channels\n\
                  using an external downloader, or to save their video URL lists for\n\
                  later manual processing."
)]
pub struct Args {
    /// Names of the channels to get the collections of.
    /// Can specify multiple channels separated by spaces.
    #[arg(short = 'C', long, value_delimiter = ' ', num_args = 1..)]
    pub channels: Option<Vec<String>>,

    /// Ids of the collections to process directly.
    #[arg(long = "collection-ids", num_args = 1..)]
    pub collection_ids: Option<Vec<String>>,

    /// URLs of individual videos to download.
    #[arg(short = 'u', long, num_args = 1..)]
    pub urls: Option<Vec<String>>,

    /// Show the collections of the channels instead of downloading.
    #[arg(long)]
    pub show_collections: bool,

    /// Save the video URLs in per-collection folders instead of
    /// downloading them.
    #[arg(long)]
    pub save_urls: bool,

    /// Path where the files will be saved.
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Twitch client ID needed to access the API (get one on https://dev.twitch.tv/).
    #[arg(short = 't', long = "client-id", env = "TWITCH_CLIENT_ID")]
    pub client_id: Option<String>,

    /// Quality/format selector passed to the downloader.
    #[arg(short, long)]
    pub format: Option<String>,

    /// Output template for collection downloads.
    #[arg(long)]
    pub collection_template: Option<String>,

    /// Output template for flat URL downloads.
    #[arg(long)]
    pub urls_template: Option<String>,

    /// Downloader executable to drive.
    #[arg(long)]
    pub downloader: Option<String>,

    /// Path to the configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Warn when reported and fetched item counts differ.
    #[arg(long)]
    pub verify_item_counts: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(channels) = self.channels {
            config.targeted_channels.names = channels;
        }

        if let Some(client_id) = self.client_id {
            config.api.client_id = client_id;
        }

        if let Some(collection_ids) = self.collection_ids {
            config.options.collection_ids = collection_ids;
        }

        if let Some(urls) = self.urls {
            config.options.urls = urls;
        }

        if let Some(output_dir) = self.output_dir {
            config.options.output_dir = output_dir;
        }

        if let Some(format) = self.format {
            config.options.format = format;
        }

        if let Some(template) = self.collection_template {
            config.options.collection_template = template;
        }

        if let Some(template) = self.urls_template {
            config.options.urls_template = template;
        }

        if let Some(downloader) = self.downloader {
            config.options.downloader_bin = downloader;
        }

        // Boolean flags (only override if set)
        if self.show_collections {
            config.options.show_collections = true;
        }

        if self.save_urls {
            config.options.save_urls = true;
        }

        if self.verify_item_counts {
            config.options.verify_item_counts = true;
        }
    }
}
