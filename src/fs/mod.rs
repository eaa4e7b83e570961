//! Filesystem module.
//!
//! Provides:
//! - Path and directory management
//! - Path component sanitization

pub mod naming;
pub mod paths;

pub use naming::sanitize_path_component;
pub use paths::{collection_dir, ensure_dir};
