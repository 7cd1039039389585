// src/handlers/dashboard.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::rbac::{CapDashboard, RequireCapability},
    models::dashboard::DashboardStats,
};

// GET /api/dashboard-stats
#[utoipa::path(
    get,
    path = "/api/dashboard-stats",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Resumo agregado do dashboard", body = DashboardStats),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem capacidade de dashboard")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_stats(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapDashboard>,
) -> Result<impl IntoResponse, AppError> {
    let stats = app_state.dashboard_service.get_stats().await?;
    Ok((StatusCode::OK, Json(stats)))
}
