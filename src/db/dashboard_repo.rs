// src/db/dashboard_repo.rs

use rust_decimal::Decimal;
use sqlx::{PgPool, Postgres, Transaction};

use crate::{
    common::error::AppError,
    models::dashboard::{ContractVolume, ResourceCounts},
};

// Tudo que o motor de agregação precisa, lido de uma vez.
#[derive(Debug, Clone)]
pub struct DashboardSnapshot {
    pub counts: ResourceCounts,
    pub contracts: Vec<ContractVolume>,
    pub open_invoice_amounts: Vec<Decimal>,
}

#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Lê contagens, volumes de contrato e faturas em aberto dentro de uma
    // transação, para que o resumo reflita um único snapshot das tabelas.
    pub async fn snapshot(&self) -> Result<DashboardSnapshot, AppError> {
        let mut tx = self.pool.begin().await?;

        let counts = ResourceCounts {
            total_invoices: Self::count(&mut tx, "SELECT COUNT(*) FROM invoices").await?,
            open_invoices: Self::count(
                &mut tx,
                "SELECT COUNT(*) FROM invoices WHERE status = 'Em Aberto'",
            )
            .await?,
            overdue_invoices: Self::count(
                &mut tx,
                "SELECT COUNT(*) FROM invoices WHERE status = 'Vencida'",
            )
            .await?,
            active_contracts: Self::count(
                &mut tx,
                "SELECT COUNT(*) FROM contracts WHERE status = 'Ativo'",
            )
            .await?,
            pending_payments: Self::count(
                &mut tx,
                "SELECT COUNT(*) FROM payment_requests WHERE status = 'Pendente'",
            )
            .await?,
            total_customers: Self::count(
                &mut tx,
                "SELECT COUNT(*) FROM customers WHERE status = 'Ativo'",
            )
            .await?,
            active_vehicles: Self::count(
                &mut tx,
                "SELECT COUNT(*) FROM vehicles WHERE status = 'Operacional'",
            )
            .await?,
        };

        let contracts = sqlx::query_as::<_, ContractVolume>(
            "SELECT status, total_volume, consumed_volume FROM contracts",
        )
        .fetch_all(&mut *tx)
        .await?;

        let open_invoice_amounts = sqlx::query_scalar::<_, Decimal>(
            "SELECT amount FROM invoices WHERE status = 'Em Aberto'",
        )
        .fetch_all(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(DashboardSnapshot {
            counts,
            contracts,
            open_invoice_amounts,
        })
    }

    async fn count(tx: &mut Transaction<'_, Postgres>, sql: &str) -> Result<i64, AppError> {
        let n = sqlx::query_scalar::<_, i64>(sql).fetch_one(&mut **tx).await?;
        Ok(n)
    }
}
