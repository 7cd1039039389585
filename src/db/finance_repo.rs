// src/db/finance_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::finance::{CreatePaymentRequestPayload, Invoice, PaymentRequest},
};

#[derive(Clone)]
pub struct FinanceRepository {
    pool: PgPool,
}

impl FinanceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_invoices(&self) -> Result<Vec<Invoice>, AppError> {
        let invoices = sqlx::query_as::<_, Invoice>(
            "SELECT id, issue_date, due_date, amount, status, created_at \
             FROM invoices \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(invoices)
    }

    pub async fn list_payment_requests(&self) -> Result<Vec<PaymentRequest>, AppError> {
        let requests = sqlx::query_as::<_, PaymentRequest>(
            "SELECT id, invoice_id, amount, requester, request_date, status, beneficiary, \
                    due_date, category, description, attachment_url, priority, created_at \
             FROM payment_requests \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(requests)
    }

    // Grava uma nova solicitação com status 'Pendente'. O solicitante é o
    // e-mail de quem está autenticado; a referência de fatura é sintética
    // (a solicitação nasce antes da fatura existir).
    pub async fn create_payment_request(
        &self,
        payload: &CreatePaymentRequestPayload,
        requester: &str,
    ) -> Result<PaymentRequest, AppError> {
        let invoice_ref = format!("N/A-{}", chrono::Utc::now().timestamp_millis());
        let request_date = chrono::Utc::now().format("%d/%m/%Y").to_string();

        let request = sqlx::query_as::<_, PaymentRequest>(
            "INSERT INTO payment_requests \
                (invoice_id, amount, requester, request_date, beneficiary, due_date, \
                 category, description, attachment_url, priority) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10) \
             RETURNING id, invoice_id, amount, requester, request_date, status, beneficiary, \
                       due_date, category, description, attachment_url, priority, created_at",
        )
        .bind(&invoice_ref)
        .bind(payload.amount)
        .bind(requester)
        .bind(&request_date)
        .bind(&payload.beneficiary)
        .bind(&payload.due_date)
        .bind(payload.category)
        .bind(payload.description.as_deref().unwrap_or(""))
        .bind(payload.attachment_url.as_deref())
        .bind(payload.priority)
        .fetch_one(&self.pool)
        .await?;

        Ok(request)
    }
}
