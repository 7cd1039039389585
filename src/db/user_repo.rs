// src/db/user_repo.rs

use sqlx::PgPool;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::auth::{Role, User},
};

const USER_COLUMNS: &str = "id, name, email, password_hash, role, company_id, is_active, \
                            avatar_url, created_at, updated_at";

// O repositório de usuários, responsável por todas as interações com a
// tabela 'users'.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca um usuário pelo seu e-mail
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE email = $1");
        let maybe_user = sqlx::query_as::<_, User>(&sql)
            .bind(email)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    // Busca um usuário pelo seu ID
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let sql = format!("SELECT {USER_COLUMNS} FROM users WHERE id = $1");
        let maybe_user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(maybe_user)
    }

    // Lista os usuários da empresa, ordenados por nome. A ordenação faz
    // parte do contrato da rota.
    pub async fn list_by_company(&self, company_id: Option<Uuid>) -> Result<Vec<User>, AppError> {
        let sql = format!(
            "SELECT {USER_COLUMNS} FROM users \
             WHERE company_id IS NOT DISTINCT FROM $1 \
             ORDER BY name ASC"
        );
        let users = sqlx::query_as::<_, User>(&sql)
            .bind(company_id)
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    // Cria um novo usuário, com tratamento específico para e-mail duplicado.
    pub async fn create(
        &self,
        name: &str,
        email: &str,
        password_hash: &str,
        role: Role,
        company_id: Option<Uuid>,
        avatar_url: Option<&str>,
    ) -> Result<User, AppError> {
        let sql = format!(
            "INSERT INTO users (name, email, password_hash, role, company_id, avatar_url) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(name)
            .bind(email)
            .bind(password_hash)
            .bind(role)
            .bind(company_id)
            .bind(avatar_url)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    // O índice único da coluna email vira um erro de domínio,
                    // nunca uma violação crua do banco.
                    if db_err.is_unique_violation() {
                        return AppError::DuplicateResource("Este e-mail já está em uso.".into());
                    }
                }
                e.into()
            })?;

        Ok(user)
    }

    // Atualização parcial: campos ausentes mantêm o valor atual.
    pub async fn update(
        &self,
        id: Uuid,
        name: Option<&str>,
        role: Option<Role>,
        is_active: Option<bool>,
        avatar_url: Option<&str>,
    ) -> Result<User, AppError> {
        let sql = format!(
            "UPDATE users SET \
                name = COALESCE($2, name), \
                role = COALESCE($3, role), \
                is_active = COALESCE($4, is_active), \
                avatar_url = COALESCE($5, avatar_url), \
                updated_at = now() \
             WHERE id = $1 \
             RETURNING {USER_COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&sql)
            .bind(id)
            .bind(name)
            .bind(role)
            .bind(is_active)
            .bind(avatar_url)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(AppError::NotFound)?;

        Ok(user)
    }
}
