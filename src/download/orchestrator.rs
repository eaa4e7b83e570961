//! Batch-download orchestration over the collections index.

use std::fs::File;
use std::io::Write;

use crate::collections::CollectionsIndex;
use crate::config::Config;
use crate::download::service::{DownloadOptions, DownloadService};
use crate::error::{Error, Result};
use crate::fs::paths::{collection_dir, ensure_dir};
use crate::output::{print_heading, print_warning};
use crate::template::{resolve_template, TemplateKey};

/// Download every video of every collection in the index, in source order.
///
/// The collection template is resolved afresh for each video and the
/// external downloader is invoked with exactly one URL at a time. A user
/// interrupt stops the whole run immediately; no further items are
/// attempted. Any other downloader error propagates and aborts the run.
pub async fn download_collections<S>(
    service: &S,
    config: &Config,
    index: &CollectionsIndex,
) -> Result<()>
where
    S: DownloadService + ?Sized,
{
    print_heading("Starting the collection downloads");

    let download_dir = config.options.output_dir.display().to_string();

    for entry in index {
        for video in &entry.videos {
            let ordinal = video.ordinal.to_string();
            let output_template = resolve_template(
                &config.options.collection_template,
                &[
                    (TemplateKey::DownloadDir, download_dir.as_str()),
                    (TemplateKey::Uploader, entry.collection.owner_name.as_str()),
                    (TemplateKey::CollectionName, entry.collection.title.as_str()),
                    (TemplateKey::VideoIndex, ordinal.as_str()),
                ],
            );

            let options = DownloadOptions {
                output_template,
                format: config.options.format.clone(),
                extra_args: config.options.downloader_args.clone(),
            };

            invoke(service, std::slice::from_ref(&video.url), &options).await?;
        }
    }

    Ok(())
}

/// Download a flat list of URLs with a single downloader invocation.
///
/// Only the download directory is resolved here; the downloader fills in
/// the per-video placeholders itself.
pub async fn download_urls<S>(service: &S, config: &Config, urls: &[String]) -> Result<()>
where
    S: DownloadService + ?Sized,
{
    print_heading("Starting the video downloads");

    let download_dir = config.options.output_dir.display().to_string();
    let output_template = resolve_template(
        &config.options.urls_template,
        &[(TemplateKey::DownloadDir, download_dir.as_str())],
    );

    let options = DownloadOptions {
        output_template,
        format: config.options.format.clone(),
        extra_args: config.options.downloader_args.clone(),
    };

    invoke(service, urls, &options).await
}

/// Invoke the download service once, surfacing a user interrupt as a
/// one-line notice before aborting the run.
async fn invoke<S>(service: &S, urls: &[String], options: &DownloadOptions) -> Result<()>
where
    S: DownloadService + ?Sized,
{
    match service.download(urls, options).await {
        Err(Error::Interrupted) => {
            print_warning("User interrupted the program, stopping ...");
            Err(Error::Interrupted)
        }
        other => other,
    }
}

/// Write each collection's video URLs to a `urls.txt` in its directory,
/// one URL per line in ordinal order, overwriting any prior file.
pub fn save_urls(config: &Config, index: &CollectionsIndex) -> Result<()> {
    print_heading("Saving all urls");

    for entry in index {
        let dir = collection_dir(&config.options.output_dir, &entry.collection)?;
        ensure_dir(&dir)?;

        let mut file = File::create(dir.join("urls.txt"))?;
        for video in &entry.videos {
            writeln!(file, "{}", video.url)?;
        }
    }

    Ok(())
}
