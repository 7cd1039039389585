// src/db/people_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::people::{BotMessage, Person},
};

#[derive(Clone)]
pub struct PeopleRepository {
    pool: PgPool,
}

impl PeopleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn list_people(&self) -> Result<Vec<Person>, AppError> {
        let people = sqlx::query_as::<_, Person>(
            "SELECT id, name, role, contact, status, created_at \
             FROM people \
             ORDER BY name ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(people)
    }

    // Mensagens em ordem de chegada (id crescente).
    pub async fn list_bot_messages(&self) -> Result<Vec<BotMessage>, AppError> {
        let messages = sqlx::query_as::<_, BotMessage>(
            "SELECT id, sender, text, timestamp \
             FROM bot_messages \
             ORDER BY id ASC",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }
}
