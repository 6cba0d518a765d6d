use utoipa::OpenApi;
use utoipa::ToSchema;

// Schema-only mirrors of `service::dto`, kept here so the service crate stays free of utoipa.

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ModelSummaryDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
pub struct ManufacturerSummaryDoc { pub id: i32, pub name: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ManufacturerDoc {
    pub id: i32,
    pub name: String,
    pub models: Vec<ModelSummaryDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ModelDoc {
    pub id: i32,
    pub name: String,
    pub manufacturer_id: i32,
    pub manufacturer: Option<ManufacturerSummaryDoc>,
}

#[derive(ToSchema)]
pub struct ManufacturerInputDoc {
    /// Required on update; must equal the path id.
    pub id: Option<i32>,
    pub name: String,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ModelInputDoc {
    /// Required on update; must equal the path id.
    pub id: Option<i32>,
    pub name: Option<String>,
    pub manufacturer_id: i32,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::manufacturers::list,
        crate::routes::manufacturers::get,
        crate::routes::manufacturers::create,
        crate::routes::manufacturers::update,
        crate::routes::manufacturers::delete,
        crate::routes::vehicle_models::list,
        crate::routes::vehicle_models::get,
        crate::routes::vehicle_models::create,
        crate::routes::vehicle_models::update,
        crate::routes::vehicle_models::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ModelSummaryDoc,
            ManufacturerSummaryDoc,
            ManufacturerDoc,
            ModelDoc,
            ManufacturerInputDoc,
            ModelInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "manufacturers"),
        (name = "models")
    )
)]
pub struct ApiDoc;
