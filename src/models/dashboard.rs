// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::models::crm::ContractStatus;

// O resumo exibido nos cards e gráficos do dashboard. Derivado a cada
// requisição a partir do estado atual das tabelas; nada disso é persistido.
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    pub total_invoices: i64,
    pub open_invoices: i64,
    pub overdue_invoices: i64,
    pub active_contracts: i64,
    pub pending_payments: i64,
    pub total_customers: i64,
    pub active_vehicles: i64,
    pub total_consumed_volume: i64,
    pub total_contract_volume: i64,
    pub consumption_percentage: i64,
    pub total_open_amount: Decimal,
}

// Contagens simples, cada uma vinda de um COUNT no banco.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResourceCounts {
    pub total_invoices: i64,
    pub open_invoices: i64,
    pub overdue_invoices: i64,
    pub active_contracts: i64,
    pub pending_payments: i64,
    pub total_customers: i64,
    pub active_vehicles: i64,
}

// Volumes de um contrato, com o status para o filtro de ativos.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct ContractVolume {
    pub status: ContractStatus,
    pub total_volume: f64,
    pub consumed_volume: f64,
}
