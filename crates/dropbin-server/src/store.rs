//! Blob storage backends.

use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use bytes::Bytes;
use dropbin_core::UploadedBlobMeta;

use crate::error::{BlobError, BlobResult};

/// A public, flat blob namespace keyed by filename.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Store `data` under `pathname`, replacing any existing blob with
    /// the same name.
    async fn put(
        &self,
        pathname: &str,
        content_type: &str,
        data: Bytes,
    ) -> BlobResult<UploadedBlobMeta>;

    /// Public URL at which `pathname` is readable.
    fn url_for(&self, pathname: &str) -> String;
}

/// Reject names that could escape a flat directory.
///
/// # Errors
///
/// Returns [`BlobError::InvalidPathname`] for empty names, names
/// containing `/`, `\` or NUL, and the `.` / `..` entries. Dots inside
/// a name (`photo..png`) are fine.
pub fn validate_pathname(pathname: &str) -> BlobResult<()> {
    let invalid = pathname.is_empty()
        || pathname.contains(['/', '\\', '\0'])
        || pathname == "."
        || pathname == "..";
    if invalid {
        return Err(BlobError::invalid_pathname(pathname));
    }
    Ok(())
}

/// Suffix for staging files; distinct per write within this process.
static NEXT_STAGING_ID: AtomicU64 = AtomicU64::new(0);

/// Stores blobs as files in a single local directory.
///
/// Each write goes to a staging file first and is renamed over the
/// target, so concurrent writes to one name leave exactly one complete
/// payload behind.
#[derive(Debug, Clone)]
pub struct LocalBlobStore {
    root: PathBuf,
    public_base_url: String,
}

impl LocalBlobStore {
    /// Create a store writing into `root` and serving from
    /// `public_base_url`. The directory must already exist.
    pub fn new(root: impl Into<PathBuf>, public_base_url: impl Into<String>) -> Self {
        let public_base_url = public_base_url.into().trim_end_matches('/').to_owned();
        Self {
            root: root.into(),
            public_base_url,
        }
    }
}

#[async_trait]
impl BlobStore for LocalBlobStore {
    async fn put(
        &self,
        pathname: &str,
        content_type: &str,
        data: Bytes,
    ) -> BlobResult<UploadedBlobMeta> {
        validate_pathname(pathname)?;

        let path = self.root.join(pathname);
        let staging = self.root.join(format!(
            ".dropbin-{}-{}.part",
            std::process::id(),
            NEXT_STAGING_ID.fetch_add(1, Ordering::Relaxed)
        ));
        let size = data.len() as u64;

        let written = match tokio::fs::write(&staging, &data).await {
            Ok(()) => tokio::fs::rename(&staging, &path).await,
            Err(e) => Err(e),
        };
        if let Err(source) = written {
            if let Err(e) = tokio::fs::remove_file(&staging).await {
                tracing::warn!(staging = %staging.display(), "staging file left behind: {e}");
            }
            return Err(BlobError::Io {
                pathname: pathname.to_owned(),
                source,
            });
        }

        tracing::debug!(pathname, size, "blob stored");

        Ok(UploadedBlobMeta {
            url: self.url_for(pathname),
            pathname: pathname.to_owned(),
            content_type: content_type.to_owned(),
            size,
        })
    }

    fn url_for(&self, pathname: &str) -> String {
        format!("{}/{}", self.public_base_url, urlencoding::encode(pathname))
    }
}
