//! PostgreSQL Entity Repository Implementation
//!
//! Implements the EntityRepository trait using SQLx for any [`PgEntity`].

use std::marker::PhantomData;

use async_trait::async_trait;
use sqlx::PgPool;

use crate::domain::gateways::EntityRepository;
use crate::domain::models::entity::EntityId;
use crate::shared::errors::RepositoryError;

use super::schema::PgEntity;

/// Map a write failure, surfacing unique violations separately
fn map_write_error(err: sqlx::Error) -> RepositoryError {
    if let Some(db_err) = err.as_database_error() {
        if db_err.is_unique_violation() {
            let constraint = db_err.constraint().unwrap_or("unique").to_string();
            return RepositoryError::UniqueViolation(constraint);
        }
    }
    RepositoryError::Database(err)
}

/// `$1, $2, ..., $n`
fn placeholders(count: usize) -> String {
    (1..=count).map(|i| format!("${i}")).collect::<Vec<_>>().join(", ")
}

/// `col2 = $2, col3 = $3, ...`; `$1` is reserved for the id
fn assignments(columns: &[&str]) -> String {
    columns
        .iter()
        .enumerate()
        .skip(1)
        .map(|(i, column)| format!("{column} = ${}", i + 1))
        .collect::<Vec<_>>()
        .join(", ")
}

/// PostgreSQL implementation of EntityRepository
pub struct PostgresEntityRepository<E> {
    pool: PgPool,
    _entity: PhantomData<fn() -> E>,
}

impl<E: PgEntity> PostgresEntityRepository<E> {
    /// Create a new PostgresEntityRepository
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self {
            pool,
            _entity: PhantomData,
        }
    }

    fn columns() -> String {
        E::COLUMNS.join(", ")
    }
}

#[async_trait]
impl<E: PgEntity> EntityRepository<E> for PostgresEntityRepository<E> {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<E>, RepositoryError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", Self::columns(), E::TABLE);

        let row = sqlx::query_as::<_, E::Row>(&sql)
            .bind(id.value())
            .fetch_optional(&self.pool)
            .await?;

        row.map(<E::Row as TryInto<E>>::try_into).transpose()
    }

    async fn find_all(&self) -> Result<Vec<E>, RepositoryError> {
        let sql = format!("SELECT {} FROM {} ORDER BY id ASC", Self::columns(), E::TABLE);

        let rows = sqlx::query_as::<_, E::Row>(&sql).fetch_all(&self.pool).await?;

        rows.into_iter().map(<E::Row as TryInto<E>>::try_into).collect()
    }

    async fn create(&self, entity: &E) -> Result<E, RepositoryError> {
        let sql = format!(
            "INSERT INTO {table} ({columns}) VALUES ({values}) RETURNING {columns}",
            table = E::TABLE,
            columns = Self::columns(),
            values = placeholders(E::COLUMNS.len()),
        );

        let row = entity
            .bind_columns(sqlx::query_as::<_, E::Row>(&sql))
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.try_into()
    }

    async fn update(&self, entity: &E) -> Result<Option<E>, RepositoryError> {
        let sql = format!(
            "UPDATE {table} SET {assignments} WHERE id = $1 RETURNING {columns}",
            table = E::TABLE,
            assignments = assignments(E::COLUMNS),
            columns = Self::columns(),
        );

        let row = entity
            .bind_columns(sqlx::query_as::<_, E::Row>(&sql))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?;

        row.map(<E::Row as TryInto<E>>::try_into).transpose()
    }

    async fn delete(&self, id: EntityId) -> Result<bool, RepositoryError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", E::TABLE);

        let result = sqlx::query(&sql).bind(id.value()).execute(&self.pool).await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_all(&self) -> Result<u64, RepositoryError> {
        let sql = format!("DELETE FROM {}", E::TABLE);

        let result = sqlx::query(&sql).execute(&self.pool).await?;

        Ok(result.rows_affected())
    }

    async fn exists_by_id(&self, id: EntityId) -> Result<bool, RepositoryError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM {} WHERE id = $1)", E::TABLE);

        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(id.value())
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }

    async fn exists_by_email(
        &self,
        email: &str,
        exclude_id: Option<EntityId>,
    ) -> Result<bool, RepositoryError> {
        let sql = format!(
            "SELECT EXISTS(SELECT 1 FROM {} WHERE email = $1 AND ($2::BIGINT IS NULL OR id <> $2))",
            E::TABLE
        );

        let exists = sqlx::query_scalar::<_, bool>(&sql)
            .bind(email)
            .bind(exclude_id.map(EntityId::value))
            .fetch_one(&self.pool)
            .await?;

        Ok(exists)
    }
}
