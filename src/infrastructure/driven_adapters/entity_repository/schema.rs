//! Table Schemas
//!
//! Describes how each entity maps onto its PostgreSQL table so a single
//! generic repository can serve all of them.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::QueryAs;
use sqlx::{FromRow, Postgres};

use crate::domain::models::customer::Customer;
use crate::domain::models::driver::Driver;
use crate::domain::models::entity::{Entity, EntityId};
use crate::shared::errors::RepositoryError;

/// Query type produced while binding an entity's columns
pub type RowQuery<'q, R> = QueryAs<'q, Postgres, R, PgArguments>;

/// PostgreSQL mapping of an entity
pub trait PgEntity: Entity {
    /// Table the entity is stored in
    const TABLE: &'static str;

    /// Column names; `id` must come first and `bind_columns` must bind in this order
    const COLUMNS: &'static [&'static str];

    /// Row representation decoded from query results
    type Row: for<'r> FromRow<'r, PgRow> + TryInto<Self, Error = RepositoryError> + Send + Unpin;

    fn bind_columns<'q>(&'q self, query: RowQuery<'q, Self::Row>) -> RowQuery<'q, Self::Row>;
}

fn restore_id(value: i64) -> Result<EntityId, RepositoryError> {
    EntityId::new(value).map_err(|e| RepositoryError::Mapping(e.to_string()))
}

/// Database row representation for the customers table
#[derive(Debug, FromRow)]
pub struct CustomerRow {
    id: i64,
    image_url: Option<String>,
    name: String,
    email: String,
    password_hash: Option<String>,
    rating: i32,
    balance: i64,
    location: String,
    destination: String,
}

impl TryFrom<CustomerRow> for Customer {
    type Error = RepositoryError;

    fn try_from(row: CustomerRow) -> Result<Self, Self::Error> {
        Ok(Customer::restore(
            restore_id(row.id)?,
            row.image_url,
            row.name,
            row.email,
            row.password_hash,
            row.rating,
            row.balance,
            row.location,
            row.destination,
        ))
    }
}

impl PgEntity for Customer {
    const TABLE: &'static str = "customers";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "image_url",
        "name",
        "email",
        "password_hash",
        "rating",
        "balance",
        "location",
        "destination",
    ];

    type Row = CustomerRow;

    fn bind_columns<'q>(&'q self, query: RowQuery<'q, CustomerRow>) -> RowQuery<'q, CustomerRow> {
        query
            .bind(self.id().value())
            .bind(self.image_url())
            .bind(self.name())
            .bind(self.email())
            .bind(self.password_hash())
            .bind(self.rating())
            .bind(self.balance())
            .bind(self.location())
            .bind(self.destination())
    }
}

/// Database row representation for the drivers table
#[derive(Debug, FromRow)]
pub struct DriverRow {
    id: i64,
    image_url: Option<String>,
    name: String,
    email: String,
    password_hash: Option<String>,
    rating: i32,
    status: String,
    location: String,
    destination: String,
}

impl TryFrom<DriverRow> for Driver {
    type Error = RepositoryError;

    fn try_from(row: DriverRow) -> Result<Self, Self::Error> {
        Ok(Driver::restore(
            restore_id(row.id)?,
            row.image_url,
            row.name,
            row.email,
            row.password_hash,
            row.rating,
            row.status,
            row.location,
            row.destination,
        ))
    }
}

impl PgEntity for Driver {
    const TABLE: &'static str = "drivers";
    const COLUMNS: &'static [&'static str] = &[
        "id",
        "image_url",
        "name",
        "email",
        "password_hash",
        "rating",
        "status",
        "location",
        "destination",
    ];

    type Row = DriverRow;

    fn bind_columns<'q>(&'q self, query: RowQuery<'q, DriverRow>) -> RowQuery<'q, DriverRow> {
        query
            .bind(self.id().value())
            .bind(self.image_url())
            .bind(self.name())
            .bind(self.email())
            .bind(self.password_hash())
            .bind(self.rating())
            .bind(self.status())
            .bind(self.location())
            .bind(self.destination())
    }
}
