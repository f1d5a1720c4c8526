//! Error types for blob storage and the HTTP surface.

use axum::Json;
use axum::extract::multipart::MultipartError;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

/// Result type for blob store operations.
pub type BlobResult<T> = Result<T, BlobError>;

/// Errors raised while storing a blob.
#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    /// The name is empty, contains a path separator, or is `..`-like.
    #[error("invalid pathname: {pathname:?}")]
    InvalidPathname { pathname: String },

    /// Writing to the backing filesystem failed.
    #[error("I/O error storing {pathname:?}: {source}")]
    Io {
        pathname: String,
        #[source]
        source: std::io::Error,
    },
}

impl BlobError {
    /// Create an [`BlobError::InvalidPathname`].
    pub fn invalid_pathname(pathname: impl Into<String>) -> Self {
        Self::InvalidPathname {
            pathname: pathname.into(),
        }
    }
}

/// Errors returned by the HTTP handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request carried no part under the files field.
    #[error("no files in field `{field}`")]
    NoFiles { field: String },

    /// The multipart body could not be read.
    #[error("malformed multipart body: {0}")]
    Multipart(#[from] MultipartError),

    /// Storing one of the files failed.
    #[error(transparent)]
    Blob(#[from] BlobError),
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            Self::NoFiles { .. } | Self::Blob(BlobError::InvalidPathname { .. }) => {
                StatusCode::BAD_REQUEST
            }
            Self::Multipart(e) => e.status(),
            Self::Blob(BlobError::Io { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = if status.is_server_error() {
            tracing::error!(error = %self, "upload failed");
            "internal server error".to_owned()
        } else {
            tracing::warn!(error = %self, "upload rejected");
            self.to_string()
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn no_files_is_bad_request() {
        let response = ApiError::NoFiles {
            field: "dz-files".to_owned(),
        }
        .into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            body_json(response).await["error"],
            "no files in field `dz-files`"
        );
    }

    #[tokio::test]
    async fn invalid_pathname_is_bad_request() {
        let response = ApiError::from(BlobError::invalid_pathname("../etc")).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn io_failure_hides_details() {
        let err = BlobError::Io {
            pathname: "a.png".to_owned(),
            source: std::io::Error::other("disk full"),
        };
        let response = ApiError::from(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_json(response).await["error"], "internal server error");
    }
}
