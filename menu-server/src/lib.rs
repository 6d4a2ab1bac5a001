//! HTTP binding for the menu service.
//!
//! # Design
//! Thin and stateless: every handler parses the request with axum's
//! extractors, delegates to `ItemService`, and maps the result to a status
//! code. The router carries the service as shared state (a cheap clone over
//! an `Arc`), and a CORS layer admits the single dashboard origin.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use menu_core::{InMemoryStore, Item, ItemService, NewItem, StoreError, UpdateItem, Upsert};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

pub mod error;

pub use error::ApiError;

/// The one origin allowed to make cross-origin requests (the dashboard
/// client).
const DASHBOARD_ORIGIN: &str = "https://dashboard.whatabyte.app";

/// Build the router over a freshly seeded in-memory store.
pub async fn app() -> Result<Router, StoreError> {
    let service = ItemService::new(Arc::new(InMemoryStore::new()));
    service.seed_defaults().await?;

    Ok(Router::new()
        .route("/api/menu/items", get(list_items).post(create_item))
        .route(
            "/api/menu/items/{id}",
            get(get_item).put(update_item).delete(delete_item),
        )
        .layer(cors())
        .with_state(service))
}

pub async fn run(listener: TcpListener) -> anyhow::Result<()> {
    axum::serve(listener, app().await?).await?;
    Ok(())
}

fn cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(HeaderValue::from_static(DASHBOARD_ORIGIN))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
}

async fn list_items(State(service): State<ItemService>) -> Result<Json<Vec<Item>>, ApiError> {
    Ok(Json(service.find_all().await?))
}

async fn get_item(
    State(service): State<ItemService>,
    Path(id): Path<i64>,
) -> Result<Json<Item>, ApiError> {
    service.find(id).await?.map(Json).ok_or(ApiError::NotFound)
}

async fn create_item(
    State(service): State<ItemService>,
    Json(input): Json<NewItem>,
) -> Result<Response, ApiError> {
    let created = service.create(input).await?;
    Ok(created_response(created))
}

async fn update_item(
    State(service): State<ItemService>,
    Path(id): Path<i64>,
    Json(input): Json<UpdateItem>,
) -> Result<Response, ApiError> {
    match service.update(id, input).await? {
        Upsert::Updated(item) => Ok(Json(item).into_response()),
        Upsert::Created(item) => Ok(created_response(item)),
    }
}

async fn delete_item(
    State(service): State<ItemService>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// 201 with a `Location` header pointing at the new item.
fn created_response(item: Item) -> Response {
    let location = format!("/api/menu/items/{}", item.id);
    (StatusCode::CREATED, [(header::LOCATION, location)], Json(item)).into_response()
}
