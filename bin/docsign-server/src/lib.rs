#![allow(missing_docs)]

pub mod billing;
pub mod config;
pub mod seed;

mod error;
mod payload;
mod routes;

use std::sync::Arc;

use axum::{Router, routing};
use bon::Builder;
use dissolve_derive::Dissolve;
use secspace_docsign_engine::{LedgerEngine, Started};

pub fn create_router(app: App) -> Router {
    Router::new()
        .route("/health", routing::get(routes::health))
        .route("/api/v1/document/register", routing::post(routes::register_document))
        .route("/api/v1/document/details", routing::post(routes::get_document_details))
        .route("/api/v1/document/list", routing::post(routes::list_documents))
        .route("/api/v1/document/sign", routing::post(routes::sign_document))
        .route("/api/v1/document/notarize", routing::post(routes::notarize_document))
        .route("/api/v1/document/awaiting", routing::post(routes::list_awaiting_signature))
        .route("/api/v1/document/stats", routing::post(routes::get_document_stats))
        .route("/api/v1/action/list", routing::post(routes::list_actions))
        .with_state(app)
}

#[derive(Clone, Builder, Dissolve)]
pub struct App {
    engine: Arc<LedgerEngine<Started>>,
}
