use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub price: f64,
}

/// Request body for create and update. `id`, if sent, is ignored.
#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub id: Option<i64>,
    pub name: String,
    pub description: String,
    /// Must be >= 0.
    pub price: f64,
}

/// Field name → `El campo <field> <message>`.
#[derive(ToSchema)]
pub struct ValidationErrorsDoc(pub BTreeMap<String, String>);

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::view,
        crate::routes::products::create,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            ProductInputDoc,
            ValidationErrorsDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
