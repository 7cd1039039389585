// src/handlers/crm.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{CapCrm, RequireCapability},
    models::crm::{Contract, Customer},
};

// GET /api/customers
#[utoipa::path(
    get,
    path = "/api/customers",
    tag = "CRM",
    responses(
        (status = 200, description = "Clientes, dos mais recentes para os mais antigos", body = Vec<Customer>),
        (status = 403, description = "Sem capacidade de CRM")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_customers(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapCrm>,
) -> Result<impl IntoResponse, AppError> {
    let customers = app_state.crm_repo.list_customers().await?;
    Ok((StatusCode::OK, Json(customers)))
}

// GET /api/contracts
#[utoipa::path(
    get,
    path = "/api/contracts",
    tag = "CRM",
    responses(
        (status = 200, description = "Contratos, dos mais recentes para os mais antigos", body = Vec<Contract>),
        (status = 403, description = "Sem capacidade de CRM")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_contracts(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapCrm>,
) -> Result<impl IntoResponse, AppError> {
    let contracts = app_state.crm_repo.list_contracts().await?;
    Ok((StatusCode::OK, Json(contracts)))
}
