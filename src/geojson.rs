//! GeoJSON feature collection built from listing rows.

use crate::storage::{DataAccessError, ListingRow};
use futures::{Stream, TryStreamExt};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "FeatureCollection")]
pub struct FeatureCollection {
    pub features: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Feature")]
pub struct Feature {
    pub geometry: Geometry,
    pub properties: Properties,
}

/// A GeoJSON point. Coordinates are `[longitude, latitude]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename = "Point")]
pub struct Geometry {
    pub coordinates: [f64; 2],
}

impl Geometry {
    pub fn point(lng: f64, lat: f64) -> Self {
        Self {
            coordinates: [lng, lat],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Properties {
    pub id: String,
    pub street: String,
    pub price: i64,
    pub bedrooms: i64,
    pub bathrooms: i64,
    pub sq_ft: i64,
}

impl From<ListingRow> for Feature {
    fn from(row: ListingRow) -> Self {
        Self {
            geometry: Geometry::point(row.lng, row.lat),
            properties: Properties {
                id: row.id,
                street: row.street,
                price: row.price,
                bedrooms: row.bedrooms,
                bathrooms: row.bathrooms,
                sq_ft: row.sq_ft,
            },
        }
    }
}

impl FeatureCollection {
    /// Drain a row cursor into a collection, in cursor order.
    ///
    /// The first row error aborts the transform; no partial collection is returned.
    pub async fn try_from_rows<S>(rows: S) -> Result<Self, DataAccessError>
    where
        S: Stream<Item = Result<ListingRow, DataAccessError>>,
    {
        let features = rows.map_ok(Feature::from).try_collect().await?;
        Ok(Self { features })
    }

    pub fn to_json_bytes(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }
}
