//! src/store/postgres.rs
use crate::domain::Email;
use crate::store::{StoreError, WaitlistStore};
use anyhow::Context;
use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

// Postgres SQLSTATE for a unique constraint violation.
const UNIQUE_VIOLATION: &str = "23505";

pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Connects lazily: the first insert establishes the connection.
    pub fn connect_lazy(connection_string: &str) -> Result<Self, anyhow::Error> {
        let pool = PgPool::connect_lazy(connection_string)
            .context("Failed to create Postgres connection pool")?;
        Ok(Self::new(pool))
    }
}

#[async_trait::async_trait]
impl WaitlistStore for PgStore {
    #[tracing::instrument(name = "Saving waitlist entry in the database", skip(self))]
    async fn insert(&self, email: &Email) -> Result<(), StoreError> {
        let result = sqlx::query(
            r#"
    INSERT INTO waitlist (id, email, joined_at)
    VALUES ($1, $2, $3)
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(email.as_ref())
        .bind(Utc::now())
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            Err(sqlx::Error::Database(e)) if e.code().as_deref() == Some(UNIQUE_VIOLATION) => {
                Err(StoreError::Duplicate)
            }
            Err(e) => Err(StoreError::Unexpected(
                anyhow::Error::from(e).context("Failed to insert waitlist entry"),
            )),
        }
    }
}
