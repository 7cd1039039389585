// src/db/company_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::company::{Company, CompanyProfile},
};

#[derive(Clone)]
pub struct CompanyRepository {
    pool: PgPool,
}

impl CompanyRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Perfil da empresa com a contagem de usuários vinculados.
    pub async fn get_profile(&self, company_id: Uuid) -> Result<CompanyProfile, AppError> {
        let profile = sqlx::query_as::<_, CompanyProfile>(
            "SELECT c.id, c.name, c.primary_color, c.logo_url, \
                    (SELECT COUNT(*) FROM users u WHERE u.company_id = c.id) AS users_count, \
                    c.created_at, c.updated_at \
             FROM companies c \
             WHERE c.id = $1",
        )
        .bind(company_id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)?;

        Ok(profile)
    }

    pub async fn update_profile(
        &self,
        company_id: Uuid,
        name: Option<&str>,
        primary_color: Option<&str>,
        logo_url: Option<&str>,
    ) -> Result<Company, AppError> {
        let company = sqlx::query_as::<_, Company>(
            "UPDATE companies SET \
                name = COALESCE($2, name), \
                primary_color = COALESCE($3, primary_color), \
                logo_url = COALESCE($4, logo_url), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING id, name, primary_color, logo_url, created_at, updated_at",
        )
        .bind(company_id)
        .bind(name)
        .bind(primary_color)
        .bind(logo_url)
        .fetch_optional(&self.pool)
        .await?
        .ok_or(AppError::NotFound)?;

        Ok(company)
    }
}
