//! Object URL preview handles.
//!
//! Each accepted file gets one object URL so `<img>` thumbnails can
//! render the local blob without uploading it. [`PreviewUrl`] owns the
//! URL and revokes it when dropped, so removing a file, resetting the
//! selection, or unmounting the widget releases the browser resource.

use std::fmt;

use crate::file::FileError;

/// An object URL created from a `Blob`, revoked on drop.
pub struct PreviewUrl {
    url: String,
}

impl PreviewUrl {
    /// Create an object URL for `blob`.
    ///
    /// # Errors
    ///
    /// Returns [`FileError::JsError`] if `URL.createObjectURL` fails.
    pub fn new(blob: &web_sys::Blob) -> Result<Self, FileError> {
        let url = web_sys::Url::create_object_url_with_blob(blob)?;
        Ok(Self { url })
    }

    /// The `blob:` URL, valid until this handle is dropped.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.url
    }
}

impl Drop for PreviewUrl {
    fn drop(&mut self) {
        // Best-effort: the document may already be gone on teardown.
        let _ = web_sys::Url::revoke_object_url(&self.url);
    }
}

impl fmt::Debug for PreviewUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PreviewUrl").field(&self.url).finish()
    }
}

// Object URLs only exist in a browser: `wasm-pack test --headless --firefox crates/dropbin-io`.
#[cfg(all(test, target_arch = "wasm32"))]
#[allow(clippy::unwrap_used)]
mod tests {
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};

    use super::*;

    wasm_bindgen_test_configure!(run_in_browser);

    fn blob() -> web_sys::Blob {
        let bytes = js_sys::Uint8Array::from(&b"pixels"[..]);
        let parts = js_sys::Array::of1(&bytes);
        web_sys::Blob::new_with_u8_array_sequence(&parts).unwrap()
    }

    /// Whether fetching `url` succeeds.
    async fn resolves(url: &str) -> bool {
        let window = web_sys::window().unwrap();
        JsFuture::from(window.fetch_with_str(url)).await.is_ok()
    }

    #[wasm_bindgen_test]
    async fn url_is_revoked_on_drop() {
        let preview = PreviewUrl::new(&blob()).unwrap();
        let url = preview.as_str().to_owned();
        assert!(url.starts_with("blob:"));
        assert!(resolves(&url).await);

        drop(preview);
        assert!(!resolves(&url).await);
    }

    #[wasm_bindgen_test]
    async fn shared_handle_outlives_first_owner() {
        let first = std::rc::Rc::new(PreviewUrl::new(&blob()).unwrap());
        let second = std::rc::Rc::clone(&first);
        let url = first.as_str().to_owned();

        drop(first);
        assert!(resolves(&url).await);

        drop(second);
        assert!(!resolves(&url).await);
    }
}
