//! HTTP client for the remote upload operation.
//!
//! Sends every selected blob in one `multipart/form-data` POST under a
//! single field name and decodes the JSON array of stored blob
//! metadata. The endpoint answers for the whole batch: any failure
//! surfaces as one [`UploadError`].

use dropbin_core::{FILES_FIELD, FileMeta, UploadError, UploadedBlobMeta};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;

use crate::file::BrowserFile;

/// Uploads file batches to a fixed endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpUploader {
    endpoint: String,
}

impl HttpUploader {
    /// Create an uploader posting to `endpoint` under the `dz-files` field.
    #[must_use]
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }

    /// The configured endpoint URL.
    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Upload `files` as one batch.
    ///
    /// # Errors
    ///
    /// Returns [`UploadError::Transport`] if the request cannot be built
    /// or sent, [`UploadError::Status`] for a non-2xx answer, and
    /// [`UploadError::Decode`] if the body is not the expected JSON.
    #[allow(clippy::future_not_send)] // WASM is single-threaded; JS handles are !Send
    pub async fn upload(&self, files: &[BrowserFile]) -> Result<Vec<UploadedBlobMeta>, UploadError> {
        let form = web_sys::FormData::new().map_err(transport)?;
        for file in files {
            form.append_with_blob_and_filename(FILES_FIELD, file.blob(), file.name())
                .map_err(transport)?;
        }

        let init = web_sys::RequestInit::new();
        init.set_method("POST");
        init.set_body(&form);

        let request =
            web_sys::Request::new_with_str_and_init(&self.endpoint, &init).map_err(transport)?;
        request
            .headers()
            .set("Accept", "application/json")
            .map_err(transport)?;

        let window =
            web_sys::window().ok_or_else(|| UploadError::Transport("no global window".into()))?;
        let response = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(transport)?;
        let response: web_sys::Response = response
            .dyn_into()
            .map_err(|e| UploadError::Transport(format!("fetch did not return a Response: {e:?}")))?;

        let status = response.status();
        let text = JsFuture::from(response.text().map_err(transport)?)
            .await
            .map_err(transport)?;
        let body = text.as_string().unwrap_or_default();

        decode_response(status, &body)
    }
}

/// Turn an endpoint answer into the stored blob list.
///
/// # Errors
///
/// Returns [`UploadError::Status`] for a status outside 200..=299 and
/// [`UploadError::Decode`] when the body is not a JSON blob array.
pub fn decode_response(status: u16, body: &str) -> Result<Vec<UploadedBlobMeta>, UploadError> {
    if !(200..=299).contains(&status) {
        return Err(UploadError::Status {
            status,
            body: body.to_owned(),
        });
    }
    serde_json::from_str(body).map_err(|e| UploadError::Decode(e.to_string()))
}

fn transport(value: JsValue) -> UploadError {
    UploadError::Transport(format!("{value:?}"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn decodes_blob_array() {
        let body = r#"[{"url":"http://localhost:3000/blobs/a.png","pathname":"a.png","contentType":"image/png","size":12}]"#;
        let blobs = decode_response(200, body).unwrap();
        assert_eq!(blobs.len(), 1);
        assert_eq!(blobs[0].pathname, "a.png");
        assert_eq!(blobs[0].size, 12);
    }

    #[test]
    fn non_success_status_is_an_error() {
        let err = decode_response(500, r#"{"error":"storage failure"}"#).unwrap_err();
        assert!(matches!(err, UploadError::Status { status: 500, .. }));
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let err = decode_response(200, "<html>").unwrap_err();
        assert!(matches!(err, UploadError::Decode(_)));
    }
}
