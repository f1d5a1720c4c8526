//! Client-side validation of candidate files.
//!
//! [`validate`] checks one file against the size limit and the allowed
//! types; [`partition`] runs it over a whole selected batch.

use serde::{Deserialize, Serialize};

use crate::messages::Locale;
use crate::mime;
use crate::types::{FileMeta, FileSummary};

/// Per-file size limit and allowed extensions, fixed at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadLimits {
    max_size_bytes: u64,
    allowed_extensions: Vec<String>,
}

impl UploadLimits {
    /// Create limits from a byte limit and extensions such as `".png"`.
    ///
    /// Extensions are normalized (leading dot stripped, lowercased) and
    /// de-duplicated, keeping the first occurrence's position.
    /// Extensions missing from the MIME table are kept for display but
    /// never match any file.
    #[must_use]
    pub fn new<S: AsRef<str>>(max_size_bytes: u64, allowed_extensions: &[S]) -> Self {
        let mut normalized: Vec<String> = Vec::with_capacity(allowed_extensions.len());
        for ext in allowed_extensions {
            let ext = mime::normalize_extension(ext.as_ref());
            if !ext.is_empty() && !normalized.contains(&ext) {
                normalized.push(ext);
            }
        }
        Self {
            max_size_bytes,
            allowed_extensions: normalized,
        }
    }

    /// Maximum accepted size per file, in bytes (inclusive).
    #[must_use]
    pub const fn max_size_bytes(&self) -> u64 {
        self.max_size_bytes
    }

    /// Allowed extensions, normalized, in configuration order.
    #[must_use]
    pub fn allowed_extensions(&self) -> &[String] {
        &self.allowed_extensions
    }

    /// Whether `mime_type` is implied by any allowed extension.
    #[must_use]
    pub fn allows_mime(&self, mime_type: &str) -> bool {
        !mime_type.is_empty()
            && self
                .allowed_extensions
                .iter()
                .filter_map(|ext| mime::mime_for_extension(ext))
                .any(|allowed| allowed == mime_type)
    }

    /// Value for an `<input type="file" accept="...">` attribute.
    #[must_use]
    pub fn accept_attribute(&self) -> String {
        self.allowed_extensions
            .iter()
            .map(|ext| format!(".{ext}"))
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Why a file was not added.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RejectionCode {
    /// Larger than the configured maximum.
    TooLarge,
    /// Reported MIME type not implied by any allowed extension.
    InvalidType,
}

/// A file turned away by [`validate`], with a localized explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rejection {
    /// Metadata of the rejected file.
    pub file: FileSummary,
    /// Which rule rejected it.
    pub code: RejectionCode,
    /// Message shown to the user.
    pub message: String,
}

/// Check one candidate file.
///
/// Rules apply in order and only the first failure is reported:
/// 1. `size > max_size_bytes` is [`RejectionCode::TooLarge`] (a file of
///    exactly the limit is accepted).
/// 2. A MIME type not implied by any allowed extension is
///    [`RejectionCode::InvalidType`]. Empty or unknown types always fail;
///    the filename's own extension is never consulted.
///
/// Returns `None` when the file is accepted.
#[must_use]
pub fn validate(file: &impl FileMeta, limits: &UploadLimits, locale: Locale) -> Option<Rejection> {
    let (code, message) = if file.size() > limits.max_size_bytes {
        (
            RejectionCode::TooLarge,
            locale.too_large(file.name(), limits.max_size_bytes),
        )
    } else if !limits.allows_mime(file.mime_type()) {
        (RejectionCode::InvalidType, locale.invalid_type(file.name()))
    } else {
        return None;
    };

    Some(Rejection {
        file: FileSummary::of(file),
        code,
        message,
    })
}

/// A validated batch.
#[derive(Debug)]
pub struct Partition<F> {
    /// Files that passed, in arrival order.
    pub accepted: Vec<F>,
    /// One rejection per failed file, in arrival order.
    pub rejected: Vec<Rejection>,
}

/// Validate every file of a batch and split it.
#[must_use]
pub fn partition<F: FileMeta>(
    batch: impl IntoIterator<Item = F>,
    limits: &UploadLimits,
    locale: Locale,
) -> Partition<F> {
    let mut accepted = Vec::new();
    let mut rejected = Vec::new();
    for file in batch {
        match validate(&file, limits, locale) {
            Some(rejection) => rejected.push(rejection),
            None => accepted.push(file),
        }
    }
    Partition { accepted, rejected }
}
