// src/handlers/people.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{CapBot, CapPeople, RequireCapability},
    models::people::{BotMessage, Person},
};

// GET /api/people
#[utoipa::path(
    get,
    path = "/api/people",
    tag = "People",
    responses(
        (status = 200, description = "Pessoas em ordem alfabética", body = Vec<Person>),
        (status = 403, description = "Sem capacidade de gestão de pessoas")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_people(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapPeople>,
) -> Result<impl IntoResponse, AppError> {
    let people = app_state.people_repo.list_people().await?;
    Ok((StatusCode::OK, Json(people)))
}

// GET /api/bot-messages
#[utoipa::path(
    get,
    path = "/api/bot-messages",
    tag = "People",
    responses(
        (status = 200, description = "Histórico do bot em ordem de chegada", body = Vec<BotMessage>),
        (status = 403, description = "Sem capacidade de bot")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_bot_messages(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapBot>,
) -> Result<impl IntoResponse, AppError> {
    let messages = app_state.people_repo.list_bot_messages().await?;
    Ok((StatusCode::OK, Json(messages)))
}
