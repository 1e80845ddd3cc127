//! Resource services - the `/resources` HTTP surface
//!
//! Multipart PDF upload and listing over the object store. Uploads
//! surface failures; the listing deliberately fails open to an empty
//! result so a broken store degrades the page instead of breaking it.

use std::sync::Arc;

use axum::extract::{Multipart, State};
use axum::Json;
use axum_macros::debug_handler;
use chrono::Utc;
use tracing::{error, info, instrument, warn};

use crate::core::{AppError, AppState};
use crate::dtos::ResourceFileDTO;

/// Key prefix shared by every uploaded resource.
const RESOURCE_PREFIX: &str = "pdfs/";

#[debug_handler]
#[instrument(skip(state, multipart))]
pub async fn upload_resource(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Result<Json<ResourceFileDTO>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("file") {
            continue;
        }

        let original_name = field.file_name().unwrap_or("upload.pdf").to_string();
        let content_type = field
            .content_type()
            .unwrap_or("application/pdf")
            .to_string();
        let bytes = field.bytes().await?;

        if bytes.is_empty() {
            return Err(AppError::validation("No file provided"));
        }

        let name = sanitize_file_name(&original_name);
        // Millisecond timestamp prefix keeps keys unique across uploads
        // of the same file name.
        let key = format!(
            "{}{}_{}",
            RESOURCE_PREFIX,
            Utc::now().timestamp_millis(),
            name
        );

        state
            .resources
            .put(&key, &bytes, &content_type)
            .await
            .map_err(|e| {
                error!("Resource upload failed: {}", e);
                AppError::upload_failed("Upload failed")
            })?;

        let url = state.resources.public_url(&key);
        info!(key = %key, size = bytes.len(), "Resource uploaded");
        return Ok(Json(ResourceFileDTO { name, url, key }));
    }

    Err(AppError::validation("No file provided"))
}

#[debug_handler]
#[instrument(skip(state))]
pub async fn list_resources(State(state): State<Arc<AppState>>) -> Json<Vec<ResourceFileDTO>> {
    let entries = match state.resources.list(RESOURCE_PREFIX).await {
        Ok(entries) => entries,
        Err(e) => {
            // Fail open: a broken listing serves an empty library.
            warn!("Resource listing failed, serving empty list: {}", e);
            return Json(Vec::new());
        }
    };

    let files = entries
        .into_iter()
        .filter(|entry| entry.key != RESOURCE_PREFIX)
        .map(|entry| ResourceFileDTO {
            name: display_name(&entry.key),
            url: state.resources.public_url(&entry.key),
            key: entry.key,
        })
        .collect();

    Json(files)
}

/// Display name for a stored key: drop the prefix and the leading
/// `{digits}_` uniqueness token added at upload time.
fn display_name(key: &str) -> String {
    let name = key.strip_prefix(RESOURCE_PREFIX).unwrap_or(key);
    strip_upload_token(name).to_string()
}

fn strip_upload_token(name: &str) -> &str {
    match name.split_once('_') {
        Some((token, rest)) if !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit()) => {
            rest
        }
        _ => name,
    }
}

/// Keep only the final path component of a client-supplied file name.
fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name).trim();
    if base.is_empty() || base == "." || base == ".." {
        "upload.pdf".to_string()
    } else {
        base.to_string()
    }
}
