//! Attachment upload handler.

use axum::Json;
use axum::extract::{Multipart, Path, State};
use futures::TryStreamExt;

use newsdesk_core::error::AppError;
use newsdesk_core::traits::ByteStream;
use newsdesk_core::types::ArticleId;

use crate::dto::response::AttachmentResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// Name of the multipart field carrying the file.
const FILE_FIELD: &str = "file";

/// POST /news/{id}/files
///
/// Streams the `file` field to storage without buffering it; other fields
/// are ignored.
pub async fn upload_attachment(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<ArticleId>,
    mut multipart: Multipart,
) -> Result<Json<AttachmentResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Invalid multipart body: {e}")))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let filename = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::validation("Uploaded file has no filename"))?;

        let stream: ByteStream<'_> = Box::pin(field.map_err(std::io::Error::other));
        let attachment = state
            .attachment_service
            .add_attachment(&auth, id, &filename, stream)
            .await?;

        return Ok(Json(AttachmentResponse::new(
            &attachment,
            &state.config.storage,
        )));
    }

    Err(AppError::validation(format!("Multipart field '{FILE_FIELD}' is required")).into())
}
