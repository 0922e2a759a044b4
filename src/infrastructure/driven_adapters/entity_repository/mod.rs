//! Entity Repository Adapters

mod postgres;
mod schema;

pub use postgres::PostgresEntityRepository;
pub use schema::{CustomerRow, DriverRow, PgEntity};
