//! Shared types for dropbin file selection and upload.

use serde::{Deserialize, Serialize};

/// Metadata every selectable file exposes.
///
/// Implemented by the browser file wrapper in `dropbin-io` and by
/// [`FileSummary`], so validation and the session logic never touch
/// the file payload itself.
pub trait FileMeta {
    /// Original filename as reported by the client.
    fn name(&self) -> &str;

    /// Size of the payload in bytes.
    fn size(&self) -> u64;

    /// MIME type reported by the client at selection time.
    ///
    /// Empty when the client could not determine one.
    fn mime_type(&self) -> &str;
}

/// Plain file metadata, detached from any payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSummary {
    /// Original filename.
    pub name: String,
    /// Size in bytes.
    pub size: u64,
    /// Reported MIME type (possibly empty).
    pub mime_type: String,
}

impl FileSummary {
    /// Create a new summary.
    #[must_use]
    pub fn new(name: impl Into<String>, size: u64, mime_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size,
            mime_type: mime_type.into(),
        }
    }

    /// Copy the metadata out of any [`FileMeta`] implementor.
    #[must_use]
    pub fn of(file: &impl FileMeta) -> Self {
        Self::new(file.name(), file.size(), file.mime_type())
    }
}

impl FileMeta for FileSummary {
    fn name(&self) -> &str {
        &self.name
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn mime_type(&self) -> &str {
        &self.mime_type
    }
}

/// Metadata returned by the upload endpoint for each stored file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedBlobMeta {
    /// Publicly resolvable URL of the stored blob.
    pub url: String,
    /// Storage key; the original filename.
    pub pathname: String,
    /// MIME type the blob was stored with.
    pub content_type: String,
    /// Stored size in bytes.
    pub size: u64,
}

/// Errors from the remote upload operation, as seen by the client.
///
/// The batch either succeeds as a whole or fails with one of these;
/// per-file detail is not surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UploadError {
    /// The request could not be built or sent.
    #[error("upload request failed: {0}")]
    Transport(String),

    /// The endpoint answered with a non-success status.
    #[error("upload endpoint returned status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, for the log.
        body: String,
    },

    /// The response body was not the expected JSON.
    #[error("failed to decode upload response: {0}")]
    Decode(String),
}

/// Visual kind of the submission status alert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    /// Nothing to report; the alert is hidden.
    #[default]
    Idle,
    /// The last submission was stored.
    Success,
    /// Informational warning.
    Warning,
    /// The last submission failed.
    Danger,
}

impl StatusKind {
    /// Lowercase name, also used as a CSS modifier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// Status shown to the user after a submission attempt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionState {
    /// Alert kind.
    pub kind: StatusKind,
    /// Localized message; empty hides the alert.
    pub message: String,
}

impl SubmissionState {
    /// The initial, hidden state.
    #[must_use]
    pub fn idle() -> Self {
        Self::default()
    }

    /// A state with the given kind and message.
    #[must_use]
    pub fn new(kind: StatusKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Whether an alert should be displayed for this state.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.kind != StatusKind::Idle && !self.message.is_empty()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn summary_copies_metadata() {
        let original = FileSummary::new("cat.png", 42, "image/png");
        let copy = FileSummary::of(&original);
        assert_eq!(copy, original);
    }

    #[test]
    fn idle_state_is_hidden() {
        assert!(!SubmissionState::idle().is_visible());
        assert!(!SubmissionState::new(StatusKind::Idle, "hello").is_visible());
        assert!(!SubmissionState::new(StatusKind::Success, "").is_visible());
        assert!(SubmissionState::new(StatusKind::Danger, "boom").is_visible());
    }

    #[test]
    fn uploaded_blob_meta_uses_camel_case() {
        let meta = UploadedBlobMeta {
            url: "http://localhost/blobs/a.png".to_string(),
            pathname: "a.png".to_string(),
            content_type: "image/png".to_string(),
            size: 3,
        };
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["contentType"], "image/png");
        assert_eq!(json["pathname"], "a.png");
    }

    #[test]
    fn status_error_display() {
        let err = UploadError::Status {
            status: 502,
            body: "bad gateway".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "upload endpoint returned status 502: bad gateway"
        );
    }
}
