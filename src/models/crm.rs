// src/models/crm.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "customer_status")]
pub enum CustomerStatus {
    Ativo,
    Bloqueado,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "contract_status")]
pub enum ContractStatus {
    Ativo,
    #[sqlx(rename = "Concluído")]
    #[serde(rename = "Concluído")]
    Concluido,
    Cancelado,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub cnpj: String,
    pub segment: String,
    pub status: CustomerStatus,
    pub credit_limit: Decimal,
    pub salesperson: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Contract {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub contract_number: String,
    pub start_date: String,
    pub end_date: String,
    pub total_volume: f64,
    pub consumed_volume: f64,
    pub unit_price: Decimal,
    pub product: String,
    pub status: ContractStatus,
    pub created_at: DateTime<Utc>,
}
