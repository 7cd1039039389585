// src/handlers/users.rs

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{CapAdministration, RequireCapability},
    },
    models::auth::{CreateUserPayload, UpdateUserPayload, User},
};

// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Usuários da empresa, por nome", body = Vec<User>),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem capacidade de administração")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_users(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    _cap: RequireCapability<CapAdministration>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.user_repo.list_by_company(claims.company_id).await?;
    Ok((StatusCode::OK, Json(users)))
}

// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = CreateUserPayload,
    responses(
        (status = 201, description = "Usuário criado", body = User),
        (status = 400, description = "Dados inválidos"),
        (status = 409, description = "E-mail já em uso")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_user(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    _cap: RequireCapability<CapAdministration>,
    Json(payload): Json<CreateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    // Checagem antecipada para responder 409 sem depender só do índice único.
    if app_state
        .user_repo
        .find_by_email(&payload.email)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateResource("Este e-mail já está em uso.".into()));
    }

    let password_hash = app_state.auth_service.hash_password(&payload.password).await?;

    // O novo usuário nasce na empresa de quem o criou.
    let user = app_state
        .user_repo
        .create(
            &payload.name,
            &payload.email,
            &password_hash,
            payload.role,
            claims.company_id,
            payload.avatar_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::CREATED, Json(user)))
}

// PUT /api/users/{id}
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    request_body = UpdateUserPayload,
    params(("id" = Uuid, Path, description = "ID do usuário")),
    responses(
        (status = 200, description = "Usuário atualizado", body = User),
        (status = 404, description = "Usuário não encontrado")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_user(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapAdministration>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateUserPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let user = app_state
        .user_repo
        .update(
            id,
            payload.name.as_deref(),
            payload.role,
            payload.is_active,
            payload.avatar_url.as_deref(),
        )
        .await?;

    Ok((StatusCode::OK, Json(user)))
}
