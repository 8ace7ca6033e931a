//! Quotation web frontend for Venus Excellent event rentals.
//!
//! The pricing engine lives in [`pricing`] as pure functions; all form state
//! is held by [`store::FormStore`] and persisted to a local JSON document.
//! Routes recompute the quote from the full current snapshot on every
//! request - there is no cache and no background work.

pub mod error;
pub mod handoff;
pub mod models;
pub mod pricing;
pub mod routes;
pub mod store;

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{compression::CompressionLayer, services::ServeDir, trace::TraceLayer};

use store::FormStore;

/// Site-wide configuration read from the environment at startup.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Phone number for the WhatsApp hand-off links, in international
    /// format without the leading `+`.
    pub whatsapp_phone: String,
}

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<FormStore>,
    pub site: SiteConfig,
}

impl AppState {
    pub fn new(store: FormStore, site: SiteConfig) -> Self {
        Self {
            store: Arc::new(store),
            site,
        }
    }
}

/// Assemble the full application router.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::calculator::show).post(routes::calculator::update))
        .route("/booking", get(routes::booking::show).post(routes::booking::update))
        .route("/booking/pay", post(routes::booking::pay))
        .route("/inquiry", get(routes::inquiry::show).post(routes::inquiry::update))
        .nest("/api/pricing", pricing::router())
        .nest_service("/static", ServeDir::new("static"))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .with_state(state)
}

async fn fallback() -> error::AppError {
    error::AppError::NotFound
}
