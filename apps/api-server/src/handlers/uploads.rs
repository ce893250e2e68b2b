//! Image upload handlers.

use actix_multipart::form::{MultipartForm, bytes::Bytes};
use actix_web::{HttpResponse, web};

use uyd_shared::MessageResponse;
use uyd_shared::dto::UploadResponse;

use crate::middleware::api_key::ApiKey;
use crate::middleware::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(MultipartForm)]
pub struct ImageUploadForm {
    #[multipart(rename = "file")]
    file: Bytes,
}

/// POST /api/uploads/image
///
/// Accepts one multipart `file` field, validates it and stores it under a
/// unique name. The returned path is what callers put into `featured_image`.
pub async fn upload_image(
    _key: ApiKey,
    state: web::Data<AppState>,
    MultipartForm(form): MultipartForm<ImageUploadForm>,
) -> AppResult<HttpResponse> {
    let filename = form.file.file_name.unwrap_or_default();
    let path = state.images.save(&filename, &form.file.data).await?;

    Ok(HttpResponse::Created().json(UploadResponse { path }))
}

/// DELETE /api/uploads/{filename}
pub async fn delete_image(
    _key: ApiKey,
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> AppResult<HttpResponse> {
    let removed = state.images.delete(&path.into_inner()).await?;
    if !removed {
        return Err(AppError::NotFound("File not found".to_string()));
    }

    Ok(HttpResponse::Ok().json(MessageResponse::new("File deleted successfully")))
}
