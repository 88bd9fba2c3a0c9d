use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use std::sync::Arc;
use std::time::Instant;

use crate::data_models::ParsedCommand;
use crate::error::{DocsError, ErrorKind};
use crate::fetcher::PageFetcher;
use crate::service::DocsService;

use super::models::{ContentRequest, IntentRequest, SearchRequest, TextResponse};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<TextResponse>)>;

fn error_response(err: DocsError) -> (StatusCode, Json<TextResponse>) {
    let status = match err.kind() {
        ErrorKind::Validation => StatusCode::BAD_REQUEST,
        ErrorKind::ParseFailure => StatusCode::UNPROCESSABLE_ENTITY,
        ErrorKind::Network => StatusCode::BAD_GATEWAY,
    };
    log::warn!("request failed ({status}): {err}");
    (status, Json(TextResponse::new(format!("Error: {err}"))))
}

pub async fn search_handler<F: PageFetcher + 'static>(
    State(service): State<Arc<DocsService<F>>>,
    Json(request): Json<SearchRequest>,
) -> ApiResult<TextResponse> {
    let start = Instant::now();
    let text = service
        .search(&request.query, request.category.as_deref(), request.limit)
        .await
        .map_err(error_response)?;
    log::info!(
        "search for {:?} answered in {}ms",
        request.query,
        start.elapsed().as_millis()
    );
    Ok(Json(TextResponse::new(text)))
}

pub async fn content_handler<F: PageFetcher + 'static>(
    State(service): State<Arc<DocsService<F>>>,
    Json(request): Json<ContentRequest>,
) -> ApiResult<TextResponse> {
    let text = service
        .get_content(&request.url, request.section.as_deref())
        .await
        .map_err(error_response)?;
    Ok(Json(TextResponse::new(text)))
}

pub async fn categories_handler<F: PageFetcher + 'static>(
    State(service): State<Arc<DocsService<F>>>,
) -> Json<TextResponse> {
    Json(TextResponse::new(service.list_categories()))
}

pub async fn category_items_handler<F: PageFetcher + 'static>(
    State(service): State<Arc<DocsService<F>>>,
    Path(category): Path<String>,
) -> ApiResult<TextResponse> {
    let text = service
        .list_category_items(&category)
        .map_err(error_response)?;
    Ok(Json(TextResponse::new(text)))
}

pub async fn parse_intent_handler<F: PageFetcher + 'static>(
    State(service): State<Arc<DocsService<F>>>,
    Json(request): Json<IntentRequest>,
) -> ApiResult<ParsedCommand> {
    service
        .parse_intent(&request.query)
        .map(Json)
        .ok_or_else(|| error_response(DocsError::UnrecognizedCommand(request.query)))
}

pub async fn intent_handler<F: PageFetcher + 'static>(
    State(service): State<Arc<DocsService<F>>>,
    Json(request): Json<IntentRequest>,
) -> ApiResult<TextResponse> {
    let text = service
        .run_command(&request.query)
        .await
        .map_err(error_response)?;
    Ok(Json(TextResponse::new(text)))
}
