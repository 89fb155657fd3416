pub mod filter;
pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use filter::{InvalidParameter, ListingFilter};
pub use postgres::PgListingStore;

use futures::stream::BoxStream;
use thiserror::Error;

/// One row of the `listings` relation, as selected by the listings query.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct ListingRow {
    pub id: String,
    pub street: String,
    pub price: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sq_ft: i64,
    pub lat: f64,
    pub lng: f64,
}

/// Failure while executing the listings query or reading its rows.
#[derive(Debug, Error)]
pub enum DataAccessError {
    #[error("listing query failed")]
    Query(#[from] sqlx::Error),
}

/// Row cursor yielded by a [`ListingStore`].
pub type RowStream<'a> = BoxStream<'a, Result<ListingRow, DataAccessError>>;

/// Read-only source of listings, shared across concurrent requests.
pub trait ListingStore: Send + Sync {
    /// Rows whose price, bedrooms and bathrooms all fall inside the filter's inclusive bounds.
    fn find_listings(&self, filter: &ListingFilter) -> RowStream<'_>;
}
