use crate::api::models::*;
use crate::geojson::FeatureCollection;
use crate::storage::ListingFilter;
use axum::{
    extract::{Query, State},
    http::header,
    response::{IntoResponse, Response},
};
use tracing::info;

/// `GET /listings`: listings inside the requested price, bedroom and bathroom ranges.
pub async fn listings_handler(
    State(state): State<AppState>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    // Validate before touching the store
    let filter = ListingFilter::from_pairs(&params)?;
    let format = ResponseFormat::from_pairs(&params);

    info!(
        price = ?(filter.min_price, filter.max_price),
        bed = ?(filter.min_bed, filter.max_bed),
        bath = ?(filter.min_bath, filter.max_bath),
        "Querying listings"
    );

    let collection = FeatureCollection::try_from_rows(state.store.find_listings(&filter)).await?;

    info!(found = collection.features.len(), "Listings query complete");

    let body = collection
        .to_json_bytes()
        .map_err(AppError::Serialization)?;

    Ok(([(header::CONTENT_TYPE, format.content_type())], body).into_response())
}
