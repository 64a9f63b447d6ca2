use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Form body for `POST /add`; flags accept 1/0, true/false, yes/no, on/off.
#[derive(ToSchema)]
pub struct CafeFormDoc {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: String,
    pub has_wifi: String,
    pub has_sockets: String,
    pub can_take_calls: String,
    pub coffee_price: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::cafes::random,
        crate::routes::cafes::all,
        crate::routes::cafes::search,
        crate::routes::cafes::get,
        crate::routes::cafes::add,
        crate::routes::cafes::update_price,
        crate::routes::cafes::report_closed,
    ),
    components(
        schemas(
            HealthResponse,
            models::cafe::Model,
            CafeFormDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "cafe")
    )
)]
pub struct ApiDoc;
