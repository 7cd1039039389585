// src/handlers/company.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{CapAdministration, RequireCapability},
    },
    models::company::{Company, CompanyProfile, UpdateCompanyPayload},
};

// GET /api/company/settings
#[utoipa::path(
    get,
    path = "/api/company/settings",
    tag = "Company",
    responses(
        (status = 200, description = "Perfil da empresa", body = CompanyProfile),
        (status = 400, description = "Usuário sem empresa"),
        (status = 404, description = "Empresa não encontrada")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_settings(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    _cap: RequireCapability<CapAdministration>,
) -> Result<impl IntoResponse, AppError> {
    let company_id = claims.company_id.ok_or(AppError::NoCompany)?;
    let profile = app_state.company_repo.get_profile(company_id).await?;
    Ok((StatusCode::OK, Json(profile)))
}

// PUT /api/company/settings
#[utoipa::path(
    put,
    path = "/api/company/settings",
    tag = "Company",
    request_body = UpdateCompanyPayload,
    responses(
        (status = 200, description = "Perfil atualizado", body = Company),
        (status = 400, description = "Usuário sem empresa")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_settings(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    _cap: RequireCapability<CapAdministration>,
    Json(payload): Json<UpdateCompanyPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let company_id = claims.company_id.ok_or(AppError::NoCompany)?;
    let company = app_state
        .company_repo
        .update_profile(
            company_id,
            payload.name.as_deref(),
            payload.primary_color.as_deref(),
            payload.logo_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(company)))
}
