use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

use crate::fetcher::PageFetcher;
use crate::service::DocsService;

pub mod handlers;
pub mod models;

pub fn create_router<F: PageFetcher + 'static>(service: Arc<DocsService<F>>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/search", post(handlers::search_handler::<F>))
        .route("/api/content", post(handlers::content_handler::<F>))
        .route("/api/categories", get(handlers::categories_handler::<F>))
        .route(
            "/api/categories/:category/items",
            get(handlers::category_items_handler::<F>),
        )
        .route("/api/intent", post(handlers::intent_handler::<F>))
        .route("/api/intent/parse", post(handlers::parse_intent_handler::<F>))
        .with_state(service)
        .layer(cors)
}
