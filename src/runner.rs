//! Run control flow: entry-strategy selection and pipeline sequencing.

use crate::collections::{
    enumerate_collections, expand_collections, CollectionsApi, CollectionsIndex,
};
use crate::config::Config;
use crate::download::{download_collections, download_urls, save_urls, DownloadService};
use crate::error::Result;
use crate::output::{print_heading, print_info};

/// Execute one full run against the resolved configuration.
///
/// Explicit collection ids and channel-name search are alternative entry
/// strategies into the same expansion/download pipeline. Flat URLs are an
/// independent path that may fire in the same run as collection
/// resolution.
pub async fn run<A, S>(api: &A, service: &S, config: &Config) -> Result<()>
where
    A: CollectionsApi + ?Sized,
    S: DownloadService + ?Sized,
{
    let mut index = CollectionsIndex::new();

    if !config.options.collection_ids.is_empty() {
        print_heading("Processing collection IDs");

        let mut collections = Vec::new();
        for collection_id in &config.options.collection_ids {
            collections.push(api.collection(collection_id).await?);
        }

        index = expand_collections(api, collections, config.options.verify_item_counts).await?;
    } else if !config.targeted_channels.names.is_empty() {
        for channel_name in &config.targeted_channels.names {
            print_heading(&format!("Processing: {}", channel_name));

            let channel = api.search_channel(channel_name).await?;
            print_info(&format!(
                "Found channel '{}' for query '{}'",
                channel.name, channel_name
            ));

            let collections = enumerate_collections(api, &channel.id).await?;

            if config.options.show_collections {
                for collection in &collections {
                    println!("{} - {}", collection.title, collection.id);
                }
                continue;
            }

            let expanded =
                expand_collections(api, collections, config.options.verify_item_counts).await?;
            index.extend(expanded);
        }

        // Listing collections is a terminal state; nothing is downloaded.
        if config.options.show_collections {
            return Ok(());
        }
    }

    if !config.options.urls.is_empty() {
        download_urls(service, config, &config.options.urls).await?;
    }

    if config.options.save_urls {
        save_urls(config, &index)?;
    } else if !index.is_empty() {
        download_collections(service, config, &index).await?;
    }

    Ok(())
}
