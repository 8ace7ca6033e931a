//! JSON endpoints exposing the pricing engine to the presentation layer.
//!
//! The calculator page recomputes through these endpoints on input changes;
//! they are stateless passes over the engine and read nothing from the store.

use axum::{routing::post, Json, Router};
use tower_http::cors::CorsLayer;

use crate::AppState;

use super::calculators;
use super::catalog::{CapacityTable, PriceCatalog};
use super::requests::{CapacityApiRequest, QuoteApiRequest};
use super::responses::{CapacitySummary, Quote};

/// Build the pricing API router, mounted under `/api/pricing`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/quote", post(quote))
        .route("/capacity", post(capacity))
        .layer(CorsLayer::permissive())
}

/// Compute a quote for the posted snapshot.
async fn quote(Json(request): Json<QuoteApiRequest>) -> Json<Quote> {
    let catalog = PriceCatalog::default();
    Json(calculators::compute_quote(
        &request.event,
        &request.selection,
        &catalog,
        request.mode,
    ))
}

/// Compute the advisory capacity figures for the posted selection.
async fn capacity(Json(request): Json<CapacityApiRequest>) -> Json<CapacitySummary> {
    let capacity = CapacityTable::default();
    Json(calculators::capacity_summary(
        request.estimated_guests,
        &request.selection,
        &capacity,
    ))
}
