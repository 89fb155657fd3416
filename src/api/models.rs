use crate::storage::{DataAccessError, InvalidParameter, ListingStore};
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ListingStore>,
}

impl AppState {
    pub fn new(store: Arc<dyn ListingStore>) -> Self {
        Self { store }
    }
}

/// Media type the listings body is labelled with. The bytes are the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseFormat {
    GeoJson,
    Json,
}

impl ResponseFormat {
    /// `Json` when a `json` key is present, whatever its value.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        if pairs.iter().any(|(k, _)| k == "json") {
            Self::Json
        } else {
            Self::GeoJson
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::GeoJson => "application/vnd.geo+json",
            Self::Json => "application/json",
        }
    }
}

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    InvalidParameter(#[from] InvalidParameter),
    #[error("We encountered a problem: {0}")]
    DataAccess(#[from] DataAccessError),
    #[error("We encountered a problem: failed to serialize listings")]
    Serialization(#[source] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let status = match self {
            AppError::InvalidParameter(_) => {
                warn!("Rejected request: {}", message);
                StatusCode::BAD_REQUEST
            }
            AppError::DataAccess(_) | AppError::Serialization(_) => {
                error!("Internal error: {:#}", anyhow::Error::new(self));
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, message).into_response()
    }
}
