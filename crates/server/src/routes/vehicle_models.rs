use axum::{extract::State, http::{header, StatusCode}, response::IntoResponse, Json};
use service::dto::{ModelDto, ModelInput};
use service::model_service;
use tracing::info;

use crate::{errors::JsonApiError, extract::{ApiJson, ApiPath}, routes::ServerState};

#[utoipa::path(
    get, path = "/api/Models", tag = "models",
    responses((status = 200, description = "All models with their manufacturer", body = [crate::openapi::ModelDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ModelDto>>, JsonApiError> {
    let list = model_service::list_models(&state.db).await?;
    info!(count = list.len(), "list models");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/Models/{id}", tag = "models",
    params(("id" = i32, Path, description = "Model id")),
    responses(
        (status = 200, description = "Model", body = crate::openapi::ModelDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<ModelDto>, JsonApiError> {
    Ok(Json(model_service::get_model(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/Models", tag = "models",
    request_body = crate::openapi::ModelInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ModelDoc),
        (status = 400, description = "Missing name or unknown manufacturerId")
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<ModelInput>) -> Result<impl IntoResponse, JsonApiError> {
    let created = model_service::create_model(&state.db, input).await?;
    let location = format!("/api/Models/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/Models/{id}", tag = "models",
    params(("id" = i32, Path, description = "Model id")),
    request_body = crate::openapi::ModelInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or unknown manufacturerId"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ModelInput>,
) -> Result<StatusCode, JsonApiError> {
    model_service::update_model(&state.db, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/Models/{id}", tag = "models",
    params(("id" = i32, Path, description = "Model id")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    model_service::delete_model(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
