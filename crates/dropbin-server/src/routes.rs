//! HTTP routes: the upload endpoint and public read access.

use std::sync::Arc;

use axum::extract::{DefaultBodyLimit, Multipart, State};
use axum::routing::post;
use axum::{Json, Router};
use dropbin_core::UploadedBlobMeta;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::store::{BlobStore, LocalBlobStore};
use crate::upload::{IncomingFile, store_batch};

/// Shared handler state.
#[derive(Clone)]
pub struct AppState {
    store: Arc<dyn BlobStore>,
    field_name: Arc<str>,
}

impl AppState {
    pub fn new(store: Arc<dyn BlobStore>, field_name: impl Into<Arc<str>>) -> Self {
        Self {
            store,
            field_name: field_name.into(),
        }
    }
}

/// Build the application router for `config`.
///
/// - `POST /api/upload` stores every part of the files field.
/// - `GET /blobs/{name}` serves the storage directory.
pub fn router(config: &ServerConfig) -> Router {
    let store = LocalBlobStore::new(&config.storage_dir, &config.public_base_url);
    let state = AppState::new(Arc::new(store), config.field_name.as_str());

    Router::new()
        .route("/api/upload", post(upload))
        .nest_service("/blobs", ServeDir::new(&config.storage_dir))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(config.max_body_bytes))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// `POST /api/upload`: store the batch and answer with its metadata.
async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Vec<UploadedBlobMeta>>, ApiError> {
    let mut files = Vec::new();

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(&*state.field_name) {
            tracing::debug!(field = ?field.name(), "ignoring multipart field");
            continue;
        }
        let name = field.file_name().unwrap_or_default().to_owned();
        let declared_type = field.content_type().map(ToOwned::to_owned);
        let data = field.bytes().await?;
        files.push(IncomingFile::new(name, declared_type.as_deref(), data));
    }

    if files.is_empty() {
        return Err(ApiError::NoFiles {
            field: state.field_name.to_string(),
        });
    }

    tracing::info!(files = files.len(), "storing upload batch");
    let saved = store_batch(state.store.as_ref(), files).await?;
    Ok(Json(saved))
}
