//! Output-path template resolution.
//!
//! Templates use the external downloader's `%(name)s` placeholder syntax.
//! Only the keys this program holds authoritative values for are
//! substituted; everything else is left in place for the downloader to
//! resolve itself.

/// Default output template for collection downloads.
pub const DEFAULT_COLLECTION_TEMPLATE: &str =
    "%(download_dir)s/%(uploader)s/%(collection_name)s/%(video_index)s - %(title)s.%(ext)s";

/// Default output template for flat URL-list downloads.
pub const DEFAULT_URLS_TEMPLATE: &str = "%(download_dir)s/%(uploader)s/%(title)s.%(ext)s";

/// Placeholder keys recognized across both template kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateKey {
    DownloadDir,
    Uploader,
    CollectionName,
    VideoIndex,
    Title,
    Ext,
}

impl TemplateKey {
    /// The literal placeholder token this key substitutes.
    pub fn token(&self) -> &'static str {
        match self {
            TemplateKey::DownloadDir => "%(download_dir)s",
            TemplateKey::Uploader => "%(uploader)s",
            TemplateKey::CollectionName => "%(collection_name)s",
            TemplateKey::VideoIndex => "%(video_index)s",
            TemplateKey::Title => "%(title)s",
            TemplateKey::Ext => "%(ext)s",
        }
    }
}

/// Resolve a template by literal substitution of the provided key values.
///
/// Keys without a provided value and unrecognized placeholders pass through
/// textually unchanged. Resolution is pure: the input template is never
/// mutated, and resolving twice with identical inputs yields identical
/// output.
pub fn resolve_template(template: &str, values: &[(TemplateKey, &str)]) -> String {
    let mut resolved = template.to_string();
    for (key, value) in values {
        resolved = resolved.replace(key.token(), value);
    }
    resolved
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_download_dir_key() {
        assert_eq!(
            resolve_template("%(download_dir)s/x", &[(TemplateKey::DownloadDir, "dl")]),
            "dl/x"
        );
    }

    #[test]
    fn test_uploader_key() {
        assert_eq!(
            resolve_template("%(uploader)s", &[(TemplateKey::Uploader, "Foo")]),
            "Foo"
        );
    }

    #[test]
    fn test_collection_name_key() {
        assert_eq!(
            resolve_template(
                "%(collection_name)s",
                &[(TemplateKey::CollectionName, "Highlights")]
            ),
            "Highlights"
        );
    }

    #[test]
    fn test_video_index_key() {
        assert_eq!(
            resolve_template("%(video_index)s - x", &[(TemplateKey::VideoIndex, "7")]),
            "7 - x"
        );
    }

    #[test]
    fn test_title_key() {
        assert_eq!(
            resolve_template("%(title)s", &[(TemplateKey::Title, "A Title")]),
            "A Title"
        );
    }

    #[test]
    fn test_ext_key() {
        assert_eq!(
            resolve_template("file.%(ext)s", &[(TemplateKey::Ext, "mp4")]),
            "file.mp4"
        );
    }

    #[test]
    fn test_unprovided_keys_pass_through() {
        let resolved = resolve_template(
            DEFAULT_COLLECTION_TEMPLATE,
            &[
                (TemplateKey::DownloadDir, "downloads"),
                (TemplateKey::CollectionName, "Highlights"),
                (TemplateKey::VideoIndex, "1"),
            ],
        );
        assert_eq!(
            resolved,
            "downloads/%(uploader)s/Highlights/1 - %(title)s.%(ext)s"
        );
    }

    #[test]
    fn test_unrecognized_placeholder_unchanged() {
        assert_eq!(
            resolve_template("%(download_dir)s/%(bogus)s", &[(TemplateKey::DownloadDir, "dl")]),
            "dl/%(bogus)s"
        );
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let values = [
            (TemplateKey::DownloadDir, "dl"),
            (TemplateKey::VideoIndex, "3"),
        ];
        let once = resolve_template(DEFAULT_COLLECTION_TEMPLATE, &values);
        let twice = resolve_template(DEFAULT_COLLECTION_TEMPLATE, &values);
        assert_eq!(once, twice);
    }
}
