// src/handlers/uploads.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    models::uploads::{SignedUrlPayload, SignedUrlResponse},
};

// POST /api/uploads/signed-url
// Qualquer usuário autenticado pode pedir uma URL de upload; o que cada
// tela faz com ela é problema da tela.
#[utoipa::path(
    post,
    path = "/api/uploads/signed-url",
    tag = "Uploads",
    request_body = SignedUrlPayload,
    responses(
        (status = 200, description = "URL de upload pré-assinada", body = SignedUrlResponse),
        (status = 400, description = "fileName/fileType ausentes")
    ),
    security(("api_jwt" = []))
)]
pub async fn signed_url(
    State(app_state): State<AppState>,
    Json(payload): Json<SignedUrlPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let signed = app_state
        .storage
        .generate_upload_url(&payload.file_name, &payload.file_type)?;

    Ok((StatusCode::OK, Json(signed)))
}
