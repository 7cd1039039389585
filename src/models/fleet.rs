// src/models/fleet.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "vehicle_status")]
pub enum VehicleStatus {
    Operacional,
    #[sqlx(rename = "Em Manutenção")]
    #[serde(rename = "Em Manutenção")]
    EmManutencao,
    Inativo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type, ToSchema)]
#[sqlx(type_name = "delivery_status")]
pub enum DeliveryStatus {
    Solicitado,
    Agendado,
    #[sqlx(rename = "Em Trânsito")]
    #[serde(rename = "Em Trânsito")]
    EmTransito,
    Entregue,
    Cancelado,
}

#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: Uuid,
    pub plate: String,
    pub model: String,
    pub driver: String,
    pub last_inspection: String,
    pub next_inspection: String,
    pub status: VehicleStatus,
    pub created_at: DateTime<Utc>,
}

// Linha crua da tabela de entregas, como sai do banco.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct DeliveryRow {
    pub id: String,
    pub order_id: String,
    pub date: String,
    pub product: String,
    pub volume: f64,
    pub status: DeliveryStatus,
    pub delivery_lat: f64,
    pub delivery_lng: f64,
    pub delivery_address: String,
    pub proof_of_delivery_url: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DeliveryLocation {
    pub lat: f64,
    pub lng: f64,
    pub address: String,
}

// Forma pública de uma entrega: a localização vai aninhada, como o
// frontend espera.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Delivery {
    pub id: String,
    pub order_id: String,
    pub date: String,
    pub product: String,
    pub volume: f64,
    pub status: DeliveryStatus,
    pub delivery_location: DeliveryLocation,
    pub proof_of_delivery_url: Option<String>,
}

impl From<DeliveryRow> for Delivery {
    fn from(row: DeliveryRow) -> Self {
        Self {
            id: row.id,
            order_id: row.order_id,
            date: row.date,
            product: row.product,
            volume: row.volume,
            status: row.status,
            delivery_location: DeliveryLocation {
                lat: row.delivery_lat,
                lng: row.delivery_lng,
                address: row.delivery_address,
            },
            proof_of_delivery_url: row.proof_of_delivery_url,
        }
    }
}
