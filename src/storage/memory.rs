//! In-process stores used by the handler tests.

use super::{DataAccessError, ListingFilter, ListingRow, ListingStore, RowStream};
use futures::stream::{self, StreamExt};
use std::sync::atomic::{AtomicUsize, Ordering};

/// Applies the same inclusive predicates as the SQL statement, over a fixed set of rows.
pub struct MemoryListingStore {
    rows: Vec<ListingRow>,
    queries: AtomicUsize,
}

impl MemoryListingStore {
    pub fn new(rows: Vec<ListingRow>) -> Self {
        Self {
            rows,
            queries: AtomicUsize::new(0),
        }
    }

    /// How many times the store has been queried.
    pub fn query_count(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }
}

fn matches(filter: &ListingFilter, row: &ListingRow) -> bool {
    (filter.min_price..=filter.max_price).contains(&row.price)
        && (filter.min_bed..=filter.max_bed).contains(&row.bedrooms)
        && (filter.min_bath..=filter.max_bath).contains(&row.bathrooms)
}

impl ListingStore for MemoryListingStore {
    fn find_listings(&self, filter: &ListingFilter) -> RowStream<'_> {
        self.queries.fetch_add(1, Ordering::SeqCst);
        let filter = *filter;
        stream::iter(self.rows.iter().filter(move |row| matches(&filter, row)))
            .map(|row| Ok(row.clone()))
            .boxed()
    }
}

/// Yields its rows, then fails as a dropped connection would.
pub struct FailingListingStore {
    pub rows_before_failure: Vec<ListingRow>,
}

impl ListingStore for FailingListingStore {
    fn find_listings(&self, _filter: &ListingFilter) -> RowStream<'_> {
        stream::iter(self.rows_before_failure.iter().cloned().map(Ok))
            .chain(stream::once(async {
                Err(DataAccessError::Query(sqlx::Error::PoolTimedOut))
            }))
            .boxed()
    }
}

pub fn listing(id: &str, price: i64, bedrooms: i64, bathrooms: i64) -> ListingRow {
    ListingRow {
        id: id.to_string(),
        street: format!("{id} Main St"),
        price,
        bedrooms,
        bathrooms,
        sq_ft: 1_200,
        lat: 37.7749,
        lng: -122.4194,
    }
}
