//! Admin image uploads to object storage.

use axum::{Json, extract::Multipart, extract::State};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::middleware::RequireAdminAuth;
use crate::services::storage::UploadedObject;
use crate::state::AppState;

/// Multipart form carrying one `file` part and an optional `folder` part.
struct UploadForm {
    filename: String,
    content_type: String,
    bytes: Vec<u8>,
    folder: Option<String>,
}

async fn read_form(mut multipart: Multipart) -> Result<UploadForm> {
    let mut file: Option<(String, String, Vec<u8>)> = None;
    let mut folder = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|err| AppError::BadRequest(err.to_string()))?
    {
        // The field name must be copied out before the field is consumed.
        let name = field.name().map(ToString::to_string);
        match name.as_deref() {
            Some("file") => {
                let filename = field.file_name().unwrap_or("upload").to_string();
                let content_type = field
                    .content_type()
                    .unwrap_or("application/octet-stream")
                    .to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|err| AppError::BadRequest(err.to_string()))?;
                file = Some((filename, content_type, bytes.to_vec()));
            }
            Some("folder") => {
                folder = field.text().await.ok();
            }
            _ => {}
        }
    }

    let (filename, content_type, bytes) =
        file.ok_or_else(|| AppError::BadRequest("File is required".to_string()))?;

    Ok(UploadForm {
        filename,
        content_type,
        bytes,
        folder,
    })
}

/// Upload an image and return its public URL.
///
/// POST /api/admin/uploads
///
/// Validation (image type, 10 MiB cap) happens before any bytes leave
/// the server.
#[instrument(skip_all)]
pub async fn create(
    RequireAdminAuth(_admin): RequireAdminAuth,
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<UploadedObject>> {
    let form = read_form(multipart).await?;

    let uploaded = state
        .storage()
        .upload_image(
            form.folder.as_deref(),
            &form.filename,
            &form.content_type,
            form.bytes,
        )
        .await?;
    tracing::info!(path = %uploaded.path, "Image uploaded");

    Ok(Json(uploaded))
}
