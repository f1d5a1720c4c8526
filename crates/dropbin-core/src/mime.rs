//! Fixed extension-to-MIME lookup table.
//!
//! Validation only ever compares the client-reported MIME type against
//! the types implied by the allowed extensions. The filename itself is
//! never inspected.

/// Extension (lowercase, no dot) to MIME type.
const EXTENSION_MIME: &[(&str, &str)] = &[
    ("jpg", "image/jpeg"),
    ("jpeg", "image/jpeg"),
    ("png", "image/png"),
    ("gif", "image/gif"),
    ("webp", "image/webp"),
    ("bmp", "image/bmp"),
    ("svg", "image/svg+xml"),
    ("avif", "image/avif"),
    ("pdf", "application/pdf"),
    ("txt", "text/plain"),
    ("csv", "text/csv"),
    ("json", "application/json"),
    ("zip", "application/zip"),
];

/// Normalize a configured extension: strip a leading dot, lowercase.
///
/// `".PNG"`, `"png"` and `" .png "` all normalize to `"png"`.
#[must_use]
pub fn normalize_extension(ext: &str) -> String {
    let trimmed = ext.trim();
    trimmed
        .strip_prefix('.')
        .unwrap_or(trimmed)
        .to_ascii_lowercase()
}

/// MIME type implied by an extension, if the table knows it.
///
/// Accepts both `".png"` and `"png"`, case-insensitively.
#[must_use]
pub fn mime_for_extension(ext: &str) -> Option<&'static str> {
    let ext = normalize_extension(ext);
    EXTENSION_MIME
        .iter()
        .find(|(e, _)| *e == ext)
        .map(|&(_, mime)| mime)
}

/// Whether a MIME type is an image type (`image/*`).
#[must_use]
pub fn is_image_mime(mime: &str) -> bool {
    mime.split_once('/')
        .is_some_and(|(top, sub)| top.eq_ignore_ascii_case("image") && !sub.is_empty())
}

/// Coarse file category, used to pick an icon for an extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    /// Any `image/*` type.
    Image,
    /// Text and document formats.
    Document,
    /// Everything else, including unknown extensions.
    Other,
}

impl FileKind {
    /// Category of a configured extension.
    #[must_use]
    pub fn of_extension(ext: &str) -> Self {
        match mime_for_extension(ext) {
            Some(mime) if is_image_mime(mime) => Self::Image,
            Some(mime) if mime.starts_with("text/") || mime == "application/pdf" => {
                Self::Document
            }
            _ => Self::Other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn jpeg_aliases_share_a_type() {
        assert_eq!(mime_for_extension(".jpg"), Some("image/jpeg"));
        assert_eq!(mime_for_extension(".jpeg"), Some("image/jpeg"));
    }

    #[test]
    fn lookup_ignores_dot_and_case() {
        assert_eq!(mime_for_extension("PNG"), Some("image/png"));
        assert_eq!(mime_for_extension(".Gif"), Some("image/gif"));
        assert_eq!(mime_for_extension(" .png "), Some("image/png"));
    }

    #[test]
    fn unknown_extension_has_no_type() {
        assert_eq!(mime_for_extension(".exe"), None);
        assert_eq!(mime_for_extension(""), None);
        assert_eq!(mime_for_extension("."), None);
    }

    #[test]
    fn image_mime_detection() {
        assert!(is_image_mime("image/png"));
        assert!(is_image_mime("IMAGE/JPEG"));
        assert!(!is_image_mime("image/"));
        assert!(!is_image_mime("application/pdf"));
        assert!(!is_image_mime(""));
    }

    #[test]
    fn file_kind_of_extension() {
        assert_eq!(FileKind::of_extension(".png"), FileKind::Image);
        assert_eq!(FileKind::of_extension(".pdf"), FileKind::Document);
        assert_eq!(FileKind::of_extension(".txt"), FileKind::Document);
        assert_eq!(FileKind::of_extension(".zip"), FileKind::Other);
        assert_eq!(FileKind::of_extension(".nope"), FileKind::Other);
    }
}
