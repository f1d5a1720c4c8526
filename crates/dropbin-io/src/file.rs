//! Browser-side selected files.
//!
//! A drop or picker event yields [`FileData`] handles. They are wrapped
//! as [`PendingFile`] so the validator can see their metadata without
//! reading any bytes; only accepted files are then loaded into a
//! [`BrowserFile`] holding a `Blob` and its preview URL.

use std::rc::Rc;

use dioxus::html::FileData;
use dropbin_core::FileMeta;
use wasm_bindgen::JsValue;
use web_sys::BlobPropertyBag;

use crate::preview::PreviewUrl;

/// Errors that can occur while loading a selected file.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// Reading the file contents failed.
    #[error("failed to read {name}: {reason}")]
    Read {
        /// Filename of the unreadable file.
        name: String,
        /// Browser-reported reason.
        reason: String,
    },

    /// A browser API call returned an error.
    #[error("browser API error: {0}")]
    JsError(String),
}

impl From<JsValue> for FileError {
    fn from(value: JsValue) -> Self {
        Self::JsError(format!("{value:?}"))
    }
}

/// A candidate file that has not been validated or read yet.
pub struct PendingFile {
    name: String,
    size: u64,
    mime_type: String,
    data: FileData,
}

impl PendingFile {
    /// Capture the metadata the client reported for `data`.
    #[must_use]
    pub fn new(data: FileData) -> Self {
        Self {
            name: data.name(),
            size: data.size(),
            mime_type: data.content_type().unwrap_or_default(),
            data,
        }
    }
}

impl FileMeta for PendingFile {
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

/// An accepted file, loaded into a `Blob` with a live preview URL.
///
/// Cloning is cheap and shares the preview handle; the object URL is
/// revoked once the last clone is dropped.
#[derive(Clone, Debug)]
pub struct BrowserFile {
    name: String,
    size: u64,
    mime_type: String,
    blob: web_sys::Blob,
    preview: Rc<PreviewUrl>,
}

impl BrowserFile {
    /// Read an accepted file and create its preview URL.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::Read`] if the bytes cannot be read, or
    /// [`FileError::JsError`] if `Blob` or object URL creation fails.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; Blob is !Send
    pub async fn load(pending: PendingFile) -> Result<Self, FileError> {
        let bytes = pending
            .data
            .read_bytes()
            .await
            .map_err(|e| FileError::Read {
                name: pending.name.clone(),
                reason: e.to_string(),
            })?;

        let uint8_array = js_sys::Uint8Array::from(&bytes[..]);
        let parts = js_sys::Array::new();
        parts.push(&uint8_array);

        let opts = BlobPropertyBag::new();
        opts.set_type(&pending.mime_type);
        let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &opts)?;
        let preview = PreviewUrl::new(&blob)?;

        Ok(Self {
            name: pending.name,
            size: pending.size,
            mime_type: pending.mime_type,
            blob,
            preview: Rc::new(preview),
        })
    }

    /// The file payload.
    #[must_use]
    pub const fn blob(&self) -> &web_sys::Blob {
        &self.blob
    }

    /// Object URL for rendering a thumbnail.
    #[must_use]
    pub fn preview_url(&self) -> &str {
        self.preview.as_str()
    }

    /// Whether the reported type is an image (thumbnail vs placeholder).
    #[must_use]
    pub fn is_image(&self) -> bool {
        dropbin_core::mime::is_image_mime(&self.mime_type)
    }
}

impl FileMeta for BrowserFile {
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
