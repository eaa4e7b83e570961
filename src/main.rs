//! Twitch Downloader - CLI entry point.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use twitch_downloader::{
    api::TwitchApi,
    cli::Args,
    config::{validate_config, Config},
    download::YtDlpService,
    error::{exit_codes, Error, Result},
    output::{print_banner, print_config_summary, print_error, print_info, print_warning},
    runner,
};

#[tokio::main]
async fn main() -> ExitCode {
    match run().await {
        Ok(()) => ExitCode::from(exit_codes::SUCCESS as u8),
        // The interrupt notice is printed at the download call site.
        Err(Error::Interrupted) => ExitCode::from(exit_codes::ABORT as u8),
        Err(e) => {
            print_error(&format!("{}", e));
            match e {
                Error::Config(_) | Error::ConfigValidation { .. } | Error::MissingConfig(_) => {
                    ExitCode::from(exit_codes::CONFIG_ERROR as u8)
                }
                Error::Api(_) | Error::ChannelNotFound(_) | Error::Http(_) | Error::Json(_) => {
                    ExitCode::from(exit_codes::API_ERROR as u8)
                }
                Error::Download(_) | Error::DownloaderNotFound(_) => {
                    ExitCode::from(exit_codes::DOWNLOAD_ERROR as u8)
                }
                _ => ExitCode::from(exit_codes::UNEXPECTED_ERROR as u8),
            }
        }
    }
}

async fn run() -> Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Set up logging
    let log_level = if args.debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt().with_env_filter(filter).with_target(false).init();

    // Print banner
    print_banner();

    // Load configuration
    let config_path = args.config.clone();
    let mut config = if config_path.exists() {
        Config::load(&config_path)?
    } else {
        print_warning(&format!(
            "Configuration file not found: {}",
            config_path.display()
        ));
        print_info("Using default configuration with CLI arguments");
        Config::default()
    };

    // Merge CLI arguments into config
    args.merge_into_config(&mut config);

    // Validate configuration
    validate_config(&config)?;

    // Print configuration summary
    print_config_summary(
        &config.targeted_channels.names,
        &config.options.collection_ids,
        &config.options.output_dir.display().to_string(),
    );

    // Initialize API client and the external download service
    let api = TwitchApi::new(&config.api.client_id)?;
    let service = YtDlpService::new(&config.options.downloader_bin);

    runner::run(&api, &service, &config).await
}
