use axum::{extract::State, http::{header, StatusCode}, response::IntoResponse, Json};
use service::dto::{ManufacturerDto, ManufacturerInput};
use service::manufacturer_service;
use tracing::info;

use crate::{errors::JsonApiError, extract::{ApiJson, ApiPath}, routes::ServerState};

#[utoipa::path(
    get, path = "/api/Manufacturers", tag = "manufacturers",
    responses((status = 200, description = "All manufacturers with their models", body = [crate::openapi::ManufacturerDoc]))
)]
pub async fn list(State(state): State<ServerState>) -> Result<Json<Vec<ManufacturerDto>>, JsonApiError> {
    let list = manufacturer_service::list_manufacturers(&state.db).await?;
    info!(count = list.len(), "list manufacturers");
    Ok(Json(list))
}

#[utoipa::path(
    get, path = "/api/Manufacturers/{id}", tag = "manufacturers",
    params(("id" = i32, Path, description = "Manufacturer id")),
    responses(
        (status = 200, description = "Manufacturer", body = crate::openapi::ManufacturerDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<Json<ManufacturerDto>, JsonApiError> {
    Ok(Json(manufacturer_service::get_manufacturer(&state.db, id).await?))
}

#[utoipa::path(
    post, path = "/api/Manufacturers", tag = "manufacturers",
    request_body = crate::openapi::ManufacturerInputDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::ManufacturerDoc),
        (status = 400, description = "Missing name")
    )
)]
pub async fn create(State(state): State<ServerState>, ApiJson(input): ApiJson<ManufacturerInput>) -> Result<impl IntoResponse, JsonApiError> {
    let created = manufacturer_service::create_manufacturer(&state.db, input).await?;
    let location = format!("/api/Manufacturers/{}", created.id);
    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(created)))
}

#[utoipa::path(
    put, path = "/api/Manufacturers/{id}", tag = "manufacturers",
    params(("id" = i32, Path, description = "Manufacturer id")),
    request_body = crate::openapi::ManufacturerInputDoc,
    responses(
        (status = 204, description = "Updated"),
        (status = 400, description = "Id mismatch or missing name"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    ApiPath(id): ApiPath<i32>,
    ApiJson(input): ApiJson<ManufacturerInput>,
) -> Result<StatusCode, JsonApiError> {
    manufacturer_service::update_manufacturer(&state.db, id, input).await?;
    Ok(StatusCode::NO_CONTENT)
}

#[utoipa::path(
    delete, path = "/api/Manufacturers/{id}", tag = "manufacturers",
    params(("id" = i32, Path, description = "Manufacturer id")),
    responses(
        (status = 204, description = "Deleted together with its models"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn delete(State(state): State<ServerState>, ApiPath(id): ApiPath<i32>) -> Result<StatusCode, JsonApiError> {
    manufacturer_service::delete_manufacturer(&state.db, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
