// src/handlers/finance.rs

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::{AppState, NotifyMode},
    middleware::{
        auth::AuthenticatedUser,
        rbac::{CapFinance, CapPaymentApproval, RequireCapability},
    },
    models::finance::{
        CreatePaymentRequestPayload, Invoice, PaymentRequest, PaymentRequestCreated,
    },
};

// GET /api/invoices
#[utoipa::path(
    get,
    path = "/api/invoices",
    tag = "Finance",
    responses(
        (status = 200, description = "Faturas, das mais recentes para as mais antigas", body = Vec<Invoice>),
        (status = 403, description = "Sem capacidade financeira")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_invoices(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapFinance>,
) -> Result<impl IntoResponse, AppError> {
    let invoices = app_state.finance_repo.list_invoices().await?;
    Ok((StatusCode::OK, Json(invoices)))
}

// GET /api/payment-requests
#[utoipa::path(
    get,
    path = "/api/payment-requests",
    tag = "Finance",
    responses(
        (status = 200, description = "Solicitações de pagamento", body = Vec<PaymentRequest>),
        (status = 403, description = "Sem capacidade de aprovação")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_payment_requests(
    State(app_state): State<AppState>,
    _cap: RequireCapability<CapPaymentApproval>,
) -> Result<impl IntoResponse, AppError> {
    let requests = app_state.finance_repo.list_payment_requests().await?;
    Ok((StatusCode::OK, Json(requests)))
}

// POST /api/payment-requests
#[utoipa::path(
    post,
    path = "/api/payment-requests",
    tag = "Finance",
    request_body = CreatePaymentRequestPayload,
    responses(
        (status = 201, description = "Solicitação criada", body = PaymentRequestCreated),
        (status = 400, description = "Dados inválidos"),
        (status = 403, description = "Sem capacidade de aprovação")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_payment_request(
    State(app_state): State<AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    _cap: RequireCapability<CapPaymentApproval>,
    Json(payload): Json<CreatePaymentRequestPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let request = app_state
        .finance_repo
        .create_payment_request(&payload, &claims.email)
        .await?;

    // A gravação nunca é desfeita por falha de e-mail. O modo decide se a
    // falha derruba a resposta ou só vira um aviso no log.
    match app_state.settings.notify_mode {
        NotifyMode::Required => {
            app_state.mailer.send_payment_request_email(&payload).await?;
        }
        NotifyMode::BestEffort => {
            let mailer = app_state.mailer.clone();
            tokio::spawn(async move {
                if let Err(e) = mailer.send_payment_request_email(&payload).await {
                    tracing::warn!("Notificação de pagamento não enviada: {}", e);
                }
            });
        }
    }

    Ok((
        StatusCode::CREATED,
        Json(PaymentRequestCreated {
            message: "Payment request created successfully".into(),
            id: request.id,
        }),
    ))
}
