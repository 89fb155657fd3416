use super::{DataAccessError, ListingFilter, ListingRow, ListingStore, RowStream};
use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use futures::{StreamExt, TryStreamExt};
use sqlx::postgres::{PgPool, PgPoolOptions, PgStatement};
use sqlx::{Executor, Statement};
use tracing::info;

/// The one listings statement. Casts keep row decoding independent of the exact
/// integer and float widths of the underlying columns.
pub const LISTINGS_QUERY: &str = "\
SELECT id::TEXT AS id, street::TEXT AS street, price::BIGINT AS price, \
bedrooms::BIGINT AS bedrooms, bathrooms::BIGINT AS bathrooms, sq_ft::BIGINT AS sq_ft, \
lat::DOUBLE PRECISION AS lat, lng::DOUBLE PRECISION AS lng \
FROM listings \
WHERE price BETWEEN $1::BIGINT AND $2::BIGINT \
AND bedrooms BETWEEN $3::BIGINT AND $4::BIGINT \
AND bathrooms BETWEEN $5::BIGINT AND $6::BIGINT";

/// Open the connection pool.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect(&config.url)
        .await
        .with_context(|| format!("Failed to connect to {}", config.redacted_url()))
}

/// Postgres-backed listings store holding the prepared listings statement.
pub struct PgListingStore {
    pool: PgPool,
    statement: PgStatement<'static>,
}

impl PgListingStore {
    /// Prepare the listings statement once against `pool`.
    pub async fn prepare(pool: PgPool) -> Result<Self> {
        let statement = pool
            .prepare(LISTINGS_QUERY)
            .await
            .context("Failed to prepare listings query")?;

        info!(columns = statement.columns().len(), "Prepared listings statement");

        Ok(Self { pool, statement })
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

impl ListingStore for PgListingStore {
    fn find_listings(&self, filter: &ListingFilter) -> RowStream<'_> {
        self.statement
            .query_as::<ListingRow>()
            .bind(filter.min_price)
            .bind(filter.max_price)
            .bind(filter.min_bed)
            .bind(filter.max_bed)
            .bind(filter.min_bath)
            .bind(filter.max_bath)
            .fetch(&self.pool)
            .map_err(DataAccessError::from)
            .boxed()
    }
}
