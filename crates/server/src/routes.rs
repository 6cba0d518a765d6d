use axum::{routing::get, Json, Router};
use sea_orm::DatabaseConnection;
use tower_http::{
    cors::CorsLayer,
    services::{ServeDir, ServeFile},
    trace::{TraceLayer, DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse, DefaultOnFailure},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::Health;

use crate::openapi::ApiDoc;

pub mod manufacturers;
pub mod vehicle_models;

/// Router state: the pooled connection every request borrows its unit of work from.
#[derive(Clone)]
pub struct ServerState {
    pub db: DatabaseConnection,
}

#[utoipa::path(get, path = "/health", tag = "health", responses((status = 200, description = "OK", body = crate::openapi::HealthResponse)))]
pub async fn health() -> Json<Health> {
    Json(Health::ok())
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: catalogue API, health, OpenAPI document
/// and, when `static_dir` is given, the admin page as fallback.
pub fn build_router(state: ServerState, cors: CorsLayer, static_dir: Option<&str>) -> Router {
    let api = Router::new()
        .route("/api/Manufacturers", get(manufacturers::list).post(manufacturers::create))
        .route(
            "/api/Manufacturers/:id",
            get(manufacturers::get).put(manufacturers::update).delete(manufacturers::delete),
        )
        .route("/api/Models", get(vehicle_models::list).post(vehicle_models::create))
        .route(
            "/api/Models/:id",
            get(vehicle_models::get).put(vehicle_models::update).delete(vehicle_models::delete),
        );

    let mut app = Router::new()
        .route("/health", get(health))
        .route("/api-docs/openapi.json", get(openapi_json))
        .merge(api)
        .with_state(state);

    if let Some(dir) = static_dir {
        let index = common::env::index_file(dir);
        app = app.fallback_service(ServeDir::new(dir).fallback(ServeFile::new(index)));
    }

    app.layer(cors).layer(
        TraceLayer::new_for_http()
            .make_span_with(DefaultMakeSpan::new().level(Level::INFO).include_headers(false))
            .on_request(DefaultOnRequest::new().level(Level::INFO))
            .on_response(DefaultOnResponse::new().level(Level::INFO).include_headers(false))
            .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
    )
}
