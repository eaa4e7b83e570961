//! External download service invocation.
//!
//! The actual media retrieval is delegated to yt-dlp, driven as a
//! subprocess with an output template and a format selector.

use std::process::{ExitStatus, Stdio};

use async_trait::async_trait;
use tokio::process::Command;

use crate::error::{Error, Result};

/// Exit code yt-dlp reports when terminated by SIGINT.
const SIGINT_EXIT_CODE: i32 = 130;

/// Options handed to the external downloader for one invocation.
#[derive(Debug, Clone)]
pub struct DownloadOptions {
    /// Output path template, in the downloader's own placeholder syntax.
    pub output_template: String,
    /// Quality/format selector.
    pub format: String,
    /// Additional raw arguments passed through verbatim.
    pub extra_args: Vec<String>,
}

/// The black-box service that performs the actual media retrieval.
#[async_trait]
pub trait DownloadService {
    /// Download the given URLs with the given options.
    ///
    /// Returns `Error::Interrupted` when the user interrupts the download;
    /// any other failure is surfaced as `Error::Download`.
    async fn download(&self, urls: &[String], options: &DownloadOptions) -> Result<()>;
}

/// `DownloadService` backed by the yt-dlp executable.
pub struct YtDlpService {
    bin: String,
}

impl YtDlpService {
    pub fn new(bin: &str) -> Self {
        Self {
            bin: bin.to_string(),
        }
    }
}

#[async_trait]
impl DownloadService for YtDlpService {
    async fn download(&self, urls: &[String], options: &DownloadOptions) -> Result<()> {
        let bin =
            which::which(&self.bin).map_err(|_| Error::DownloaderNotFound(self.bin.clone()))?;

        let mut command = Command::new(&bin);
        command
            .arg("-o")
            .arg(&options.output_template)
            .arg("-f")
            .arg(&options.format)
            .args(&options.extra_args)
            .args(urls)
            .stdin(Stdio::null());

        tracing::debug!("Invoking downloader: {:?}", command);

        let mut child = command
            .spawn()
            .map_err(|e| Error::Download(format!("Failed to spawn {}: {}", bin.display(), e)))?;

        // Race the child against Ctrl-C so an interrupt stops the whole run
        // instead of only the current invocation.
        let status = tokio::select! {
            status = child.wait() => status?,
            _ = tokio::signal::ctrl_c() => {
                let _ = child.kill().await;
                let _ = child.wait().await;
                return Err(Error::Interrupted);
            }
        };

        if status.success() {
            return Ok(());
        }

        if interrupted(&status) {
            return Err(Error::Interrupted);
        }

        Err(Error::Download(format!(
            "{} exited with {}",
            bin.display(),
            status
        )))
    }
}

/// Whether the downloader was ended by a user interrupt rather than failing.
fn interrupted(status: &ExitStatus) -> bool {
    if status.code() == Some(SIGINT_EXIT_CODE) {
        return true;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        // SIGINT delivered to the child directly, no exit code reported.
        if status.signal() == Some(2) {
            return true;
        }
    }

    false
}
