//! Configuration validation logic.

use regex::Regex;
use url::Url;

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Channel name pattern: 4-25 chars, alphanumeric and underscores.
const CHANNEL_NAME_PATTERN: &str = r"^[a-zA-Z0-9_]{4,25}$";

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_client_id(&config.api.client_id)?;
    validate_channel_names(&config.targeted_channels.names)?;
    validate_urls(&config.options.urls)?;
    validate_work_sources(config)?;

    Ok(())
}

/// Validate the API client id.
pub fn validate_client_id(client_id: &str) -> Result<()> {
    if client_id.is_empty() {
        return Err(Error::MissingConfig(
            "client_id (get one on https://dev.twitch.tv/)".to_string(),
        ));
    }

    let lower = client_id.to_lowercase();
    if lower.contains("replaceme") || lower.contains("your_client_id") {
        return Err(Error::ConfigValidation {
            field: "client_id".to_string(),
            message: "Client ID appears to be a placeholder. Please provide your actual client ID."
                .to_string(),
        });
    }

    Ok(())
}

/// Validate channel names against the allowed name pattern.
pub fn validate_channel_names<S: AsRef<str>, I: IntoIterator<Item = S>>(names: I) -> Result<()> {
    let pattern = Regex::new(CHANNEL_NAME_PATTERN).unwrap();

    for name in names {
        let name = name.as_ref();
        if !pattern.is_match(name) {
            return Err(Error::ConfigValidation {
                field: "channels".to_string(),
                message: format!(
                    "Channel name '{}' is invalid. Names are 4-25 alphanumeric/underscore characters.",
                    name
                ),
            });
        }
    }

    Ok(())
}

/// Validate that every flat URL parses as an http(s) URL.
pub fn validate_urls<S: AsRef<str>, I: IntoIterator<Item = S>>(urls: I) -> Result<()> {
    for url in urls {
        let parsed = Url::parse(url.as_ref())?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(Error::ConfigValidation {
                field: "urls".to_string(),
                message: format!("URL '{}' must use http or https", url.as_ref()),
            });
        }
    }

    Ok(())
}

/// Validate that the run has something to do.
fn validate_work_sources(config: &Config) -> Result<()> {
    let has_channels = !config.targeted_channels.names.is_empty();

    if !has_channels
        && config.options.collection_ids.is_empty()
        && config.options.urls.is_empty()
    {
        return Err(Error::MissingConfig(
            "channels, collection_ids, or urls (at least one work source required)".to_string(),
        ));
    }

    if config.options.show_collections && !has_channels {
        return Err(Error::ConfigValidation {
            field: "show_collections".to_string(),
            message: "Listing collections requires at least one channel name.".to_string(),
        });
    }

    Ok(())
}
