//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::collections::Collection;
use crate::error::Result;
use crate::fs::naming::sanitize_path_component;

/// Directory a collection's artifacts are stored under:
/// `{output_dir}/{uploader}/{collection_name}/`.
pub fn collection_dir(output_dir: &Path, collection: &Collection) -> Result<PathBuf> {
    let uploader = sanitize_path_component(&collection.owner_name)?;
    let title = sanitize_path_component(&collection.title)?;
    Ok(output_dir.join(uploader).join(title))
}

/// Ensure a directory exists, creating it if necessary.
///
/// Creation is recursive and idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}
