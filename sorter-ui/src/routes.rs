//! HTTP route handlers: the HTML page and the JSON API.

use axum::Router;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, Json, Redirect};
use axum::routing::{get, post};
use tracing::warn;

use sorter::core::types::ColumnKey;
use sorter::core::view::TableView;

use crate::state::AppState;

/// Build the page router (HTML table + header form posts).
pub fn page_router() -> Router<AppState> {
    Router::new()
        .route("/", get(index))
        .route("/sort/{column}", post(sort_page))
}

/// Build the API router.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/table", get(get_table))
        .route("/sort/{column}", post(sort_api))
}

async fn health() -> &'static str {
    "ok"
}

/// GET / - the table as HTML.
async fn index(State(state): State<AppState>) -> Result<Html<String>, StatusCode> {
    let view = state.view().await;
    state.pages.render(&view, &state.lang).map(Html).map_err(|err| {
        warn!(error = %format!("{:#}", err), "render page failed");
        StatusCode::INTERNAL_SERVER_ERROR
    })
}

/// POST /sort/:column - header click from the page, then back to the table.
async fn sort_page(
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> Result<Redirect, StatusCode> {
    let column = parse_column(&column)?;
    state.select(column).await;
    Ok(Redirect::to("/"))
}

/// GET /api/table - current view as JSON.
async fn get_table(State(state): State<AppState>) -> Json<TableView> {
    Json(state.view().await)
}

/// POST /api/sort/:column - apply a click and return the new view.
async fn sort_api(
    State(state): State<AppState>,
    Path(column): Path<String>,
) -> Result<Json<TableView>, StatusCode> {
    let column = parse_column(&column)?;
    Ok(Json(state.select(column).await))
}

/// Unknown columns are rejected; the session is never touched for them.
fn parse_column(raw: &str) -> Result<ColumnKey, StatusCode> {
    raw.parse::<ColumnKey>().map_err(|err| {
        warn!(error = %err, "rejected column selection");
        StatusCode::NOT_FOUND
    })
}
