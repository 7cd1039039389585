// src/db/crm_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::crm::{Contract, Customer},
};

#[derive(Clone)]
pub struct CrmRepository {
    pool: PgPool,
}

impl CrmRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Clientes, dos mais recentes para os mais antigos.
    pub async fn list_customers(&self) -> Result<Vec<Customer>, AppError> {
        let customers = sqlx::query_as::<_, Customer>(
            "SELECT id, name, cnpj, segment, status, credit_limit, salesperson, created_at \
             FROM customers \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(customers)
    }

    // Contratos, dos mais recentes para os mais antigos.
    pub async fn list_contracts(&self) -> Result<Vec<Contract>, AppError> {
        let contracts = sqlx::query_as::<_, Contract>(
            "SELECT id, customer_id, contract_number, start_date, end_date, \
                    total_volume, consumed_volume, unit_price, product, status, created_at \
             FROM contracts \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(contracts)
    }
}
