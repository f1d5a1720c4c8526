//! Storing one submitted batch.

use bytes::Bytes;
use dropbin_core::UploadedBlobMeta;
use dropbin_core::mime::mime_for_extension;
use futures::future::try_join_all;

use crate::error::BlobResult;
use crate::store::BlobStore;

/// Fallback content type when neither the client nor the extension
/// names one.
const OCTET_STREAM: &str = "application/octet-stream";

/// One file part pulled out of the multipart body.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    /// Client-supplied filename, used verbatim as the storage key.
    pub name: String,
    /// Content type to store the blob with.
    pub content_type: String,
    /// File payload.
    pub data: Bytes,
}

impl IncomingFile {
    /// Build from a multipart part, inferring the content type from the
    /// extension when the part does not declare a usable one.
    pub fn new(name: String, declared_type: Option<&str>, data: Bytes) -> Self {
        let content_type = declared_type
            .filter(|t| !t.is_empty() && *t != OCTET_STREAM)
            .map(ToOwned::to_owned)
            .or_else(|| {
                name.rsplit_once('.')
                    .and_then(|(_, ext)| mime_for_extension(ext))
                    .map(ToOwned::to_owned)
            })
            .unwrap_or_else(|| OCTET_STREAM.to_owned());
        Self {
            name,
            content_type,
            data,
        }
    }
}

/// Store every file of a batch concurrently.
///
/// Resolves to one [`UploadedBlobMeta`] per file, in input order.
///
/// # Errors
///
/// Fails with the first storage error. Files already written by then
/// stay written.
pub async fn store_batch(
    store: &dyn BlobStore,
    files: Vec<IncomingFile>,
) -> BlobResult<Vec<UploadedBlobMeta>> {
    let saved = try_join_all(
        files
            .iter()
            .map(|file| store.put(&file.name, &file.content_type, file.data.clone())),
    )
    .await?;

    tracing::info!("{} files saved", saved.len());
    Ok(saved)
}
