// src/db/fleet_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::fleet::{DeliveryRow, Vehicle},
};

#[derive(Clone)]
pub struct FleetRepository {
    pool: PgPool,
}

impl FleetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Veículos ordenados pela placa.
    pub async fn list_vehicles(&self) -> Result<Vec<Vehicle>, AppError> {
        let vehicles = sqlx::query_as::<_, Vehicle>(
            "SELECT id, plate, model, driver, last_inspection, next_inspection, status, created_at \
             FROM vehicles \
             ORDER BY plate ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(vehicles)
    }

    // Entregas, das mais recentes para as mais antigas.
    pub async fn list_deliveries(&self) -> Result<Vec<DeliveryRow>, AppError> {
        let deliveries = sqlx::query_as::<_, DeliveryRow>(
            "SELECT id, order_id, date, product, volume, status, \
                    delivery_lat, delivery_lng, delivery_address, proof_of_delivery_url \
             FROM deliveries \
             ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(deliveries)
    }
}
