// src/handlers/fleet.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{CapDeliveryAudit, CapFleet, RequireCapability},
    models::fleet::{Delivery, Vehicle},
};

// GET /api/vehicles
#[utoipa::path(
    get,
    path = "/api/vehicles",
    tag = "Fleet",
    responses(
        (status = 200, description = "Veículos ordenados por placa", body = Vec<Vehicle>),
        (status = 403, description = "Sem capacidade de frota")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_vehicles(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapFleet>,
) -> Result<impl IntoResponse, AppError> {
    let vehicles = app_state.fleet_repo.list_vehicles().await?;
    Ok((StatusCode::OK, Json(vehicles)))
}

// GET /api/deliveries
#[utoipa::path(
    get,
    path = "/api/deliveries",
    tag = "Fleet",
    responses(
        (status = 200, description = "Entregas com a localização aninhada", body = Vec<Delivery>),
        (status = 403, description = "Sem capacidade de auditoria")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_deliveries(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapDeliveryAudit>,
) -> Result<impl IntoResponse, AppError> {
    let deliveries: Vec<Delivery> = app_state
        .fleet_repo
        .list_deliveries()
        .await?
        .into_iter()
        .map(Delivery::from)
        .collect();

    Ok((StatusCode::OK, Json(deliveries)))
}
