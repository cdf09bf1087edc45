//! HTTP API over the answer engine.
//!
//! Exposes `POST /api/search` plus a small landing page and static-file
//! route, with permissive CORS for the browser frontend. The searcher
//! is constructed once in `main` and shared across handlers via
//! [`Router::with_state`] — there is no process-wide singleton.

use std::path::PathBuf;
use std::sync::Arc;

use axum::Router;
use axum::extract::{Path, Request, State};
use axum::http::{HeaderMap, HeaderValue, Method, StatusCode, header};
use axum::middleware::Next;
use axum::response::{Html, IntoResponse, Json, Response};
use axum::routing::{get, post};
use ecloud_search::{HttpFetcher, SearchError, Searcher};
use serde::{Deserialize, Serialize};

/// Fixed detail for configuration-class failures; internal error text
/// is deliberately not leaked for these.
const CONFIG_ERROR_DETAIL: &str = "server configuration error: missing required backend";

/// Directory served under `/static/`.
const STATIC_DIR: &str = "static";

const LANDING_PAGE: &str = r#"<!DOCTYPE html>
<html>
    <head>
        <title>ECloud Search API</title>
        <link rel="icon" type="image/x-icon" href="/static/favicon.ico">
    </head>
    <body>
        <h1>ECloud Search API</h1>
        <p>POST a JSON body <code>{"query": "..."}</code> to <code>/api/search</code>.</p>
    </body>
</html>
"#;

/// Shared state for axum handlers.
#[derive(Clone)]
pub struct AppState {
    /// The answer engine, shared by reference across all requests.
    pub searcher: Arc<Searcher<HttpFetcher>>,
}

/// Request body for `POST /api/search`.
#[derive(Debug, Deserialize)]
struct SearchQuery {
    query: String,
}

/// Error body shape for 500 responses.
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(landing_page))
        .route("/api/search", post(api_search))
        .route("/static/{file}", get(static_file))
        .layer(axum::middleware::from_fn(cors))
        .with_state(state)
}

/// Bind `addr` and serve until the process exits.
///
/// # Errors
///
/// Returns an error if the listener cannot bind or the server fails.
pub async fn serve(state: AppState, addr: &str) -> anyhow::Result<()> {
    // The original deployment expects the static directory to exist.
    tokio::fs::create_dir_all(STATIC_DIR).await?;

    let app = router(state);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("search API listening on http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn landing_page() -> Html<&'static str> {
    Html(LANDING_PAGE)
}

async fn api_search(State(state): State<AppState>, Json(body): Json<SearchQuery>) -> Response {
    match state.searcher.get_best_answer(&body.query).await {
        Ok(answer) => (StatusCode::OK, Json(answer)).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "search request failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    detail: error_detail(&err),
                }),
            )
                .into_response()
        }
    }
}

/// Map a search error to the detail string exposed over HTTP.
///
/// Backend-unavailability gets a fixed generic message; every other
/// failure surfaces its own text.
fn error_detail(err: &SearchError) -> String {
    match err {
        SearchError::Backend(_) => CONFIG_ERROR_DETAIL.to_owned(),
        other => other.to_string(),
    }
}

async fn static_file(Path(file): Path<String>) -> Response {
    let Some(path) = safe_static_path(&file) else {
        return StatusCode::NOT_FOUND.into_response();
    };
    match tokio::fs::read(&path).await {
        Ok(bytes) => {
            let content_type = content_type_for(&file);
            ([(header::CONTENT_TYPE, content_type)], bytes).into_response()
        }
        Err(_) => StatusCode::NOT_FOUND.into_response(),
    }
}

/// Resolve a requested static file name, rejecting anything that could
/// escape the static directory.
fn safe_static_path(file: &str) -> Option<PathBuf> {
    if file.is_empty() || file.contains("..") || file.contains('/') || file.contains('\\') {
        return None;
    }
    Some(PathBuf::from(STATIC_DIR).join(file))
}

fn content_type_for(file: &str) -> &'static str {
    match file.rsplit('.').next() {
        Some("html") => "text/html; charset=utf-8",
        Some("css") => "text/css",
        Some("js") => "text/javascript",
        Some("json") => "application/json",
        Some("ico") => "image/x-icon",
        Some("png") => "image/png",
        Some("svg") => "image/svg+xml",
        _ => "application/octet-stream",
    }
}

/// Permissive CORS: every response gets allow-all headers, and OPTIONS
/// preflights are answered directly.
async fn cors(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::NO_CONTENT.into_response();
        apply_cors_headers(response.headers_mut());
        return response;
    }
    let mut response = next.run(request).await;
    apply_cors_headers(response.headers_mut());
    response
}

fn apply_cors_headers(headers: &mut HeaderMap) {
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("*"),
    );
}
