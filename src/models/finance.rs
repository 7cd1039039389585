// src/models/finance.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "invoice_status")]
pub enum InvoiceStatus {
    Paga,
    #[sqlx(rename = "Em Aberto")]
    #[serde(rename = "Em Aberto")]
    EmAberto,
    Vencida,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_status")]
pub enum PaymentStatus {
    Pendente,
    Aprovado,
    Rejeitado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_category")]
pub enum PaymentCategory {
    Fornecedor,
    Imposto,
    #[sqlx(rename = "Serviço")]
    #[serde(rename = "Serviço")]
    Servico,
    Reembolso,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "payment_priority")]
pub enum PaymentPriority {
    Alta,
    Normal,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub issue_date: String,
    pub due_date: String,
    pub amount: Decimal,
    pub status: InvoiceStatus,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id: Uuid,
    pub invoice_id: String,
    pub amount: Decimal,
    pub requester: String,
    pub request_date: String,
    pub status: PaymentStatus,
    pub beneficiary: String,
    pub due_date: String,
    pub category: PaymentCategory,
    pub description: String,
    pub attachment_url: Option<String>,
    pub priority: PaymentPriority,
    pub created_at: DateTime<Utc>,
}

// Dados para abrir uma solicitação de pagamento
#[derive(Debug, Clone, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequestPayload {
    #[validate(length(min = 1, message = "O beneficiário é obrigatório."))]
    pub beneficiary: String,
    pub amount: Decimal,
    #[validate(length(min = 1, message = "A data de vencimento é obrigatória."))]
    pub due_date: String,
    pub category: PaymentCategory,
    pub priority: PaymentPriority,
    pub description: Option<String>,
    pub attachment_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestCreated {
    pub message: String,
    pub id: Uuid,
}
