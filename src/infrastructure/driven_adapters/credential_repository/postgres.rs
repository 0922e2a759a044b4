//! PostgreSQL Credential Repository Implementation
//!
//! Reads login credentials from both account tables in one query.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::CredentialRepository;
use crate::domain::models::entity::EntityId;
use crate::domain::models::principal::{Credential, Principal, Role};
use crate::shared::errors::RepositoryError;

#[derive(Debug, sqlx::FromRow)]
struct CredentialRow {
    role: String,
    id: i64,
    email: String,
    password_hash: String,
}

impl TryFrom<CredentialRow> for Credential {
    type Error = RepositoryError;

    fn try_from(row: CredentialRow) -> Result<Self, Self::Error> {
        let role = row.role.parse::<Role>().map_err(RepositoryError::Mapping)?;
        let id = EntityId::new(row.id).map_err(|e| RepositoryError::Mapping(e.to_string()))?;

        Ok(Credential {
            principal: Principal::account(role, id, &row.email),
            password_hash: row.password_hash,
        })
    }
}

/// PostgreSQL implementation of CredentialRepository
pub struct PostgresCredentialRepository {
    pool: PgPool,
}

impl PostgresCredentialRepository {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialRepository for PostgresCredentialRepository {
    async fn find_by_email(&self, email: &str) -> Result<Vec<Credential>, RepositoryError> {
        let rows = sqlx::query_as::<_, CredentialRow>(
            r#"
            SELECT 'customer'::TEXT AS role, id, email, password_hash
            FROM customers
            WHERE email = $1 AND password_hash IS NOT NULL
            UNION ALL
            SELECT 'driver'::TEXT AS role, id, email, password_hash
            FROM drivers
            WHERE email = $1 AND password_hash IS NOT NULL
            "#,
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Credential::try_from).collect()
    }
}
