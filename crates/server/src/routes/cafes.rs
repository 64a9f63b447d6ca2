use axum::{
    extract::{
        rejection::{FormRejection, QueryRejection},
        Path, Query, State,
    },
    Form, Json,
};
use models::cafe::{self, NewCafe};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use service::{cafe::CafeForm, errors::ServiceError};
use tracing::info;

use crate::errors::{JsonApiError, LOCATION_NOT_FOUND, NO_CAFES};
use crate::state::ServerState;

/// `{"cafe": ...}` wrapper shared by the read endpoints.
#[derive(Debug, Serialize)]
pub struct CafeEnvelope<T> {
    pub cafe: T,
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    pub coffee_price: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyQuery {
    #[serde(rename = "api-key")]
    pub api_key: Option<String>,
}

fn success(message: &str) -> Json<Value> {
    Json(json!({ "response": { "success": message } }))
}

/// Ids that do not parse as integers cannot name a stored cafe.
fn parse_id(raw: &str) -> Option<i32> {
    raw.trim().parse().ok()
}

#[utoipa::path(
    get, path = "/random", tag = "cafe",
    responses(
        (status = 200, description = "One randomly chosen cafe"),
        (status = 404, description = "No cafes stored")
    )
)]
pub async fn random(State(state): State<ServerState>) -> Result<Json<CafeEnvelope<cafe::Model>>, JsonApiError> {
    match state.cafes.random_one().await {
        Ok(cafe) => Ok(Json(CafeEnvelope { cafe })),
        Err(ServiceError::NotFound(_)) => Err(JsonApiError::not_found(NO_CAFES)),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/all", tag = "cafe",
    responses((status = 200, description = "Every cafe"))
)]
pub async fn all(State(state): State<ServerState>) -> Result<Json<CafeEnvelope<Vec<cafe::Model>>>, JsonApiError> {
    let cafes = state.cafes.list_all().await?;
    info!(count = cafes.len(), "list cafes");
    Ok(Json(CafeEnvelope { cafe: cafes }))
}

#[utoipa::path(
    get, path = "/search", tag = "cafe",
    params(("loc" = String, Query, description = "Case-insensitive location substring")),
    responses(
        (status = 200, description = "Matching cafes"),
        (status = 400, description = "Missing loc"),
        (status = 404, description = "No cafe at that location")
    )
)]
pub async fn search(
    State(state): State<ServerState>,
    query: Result<Query<SearchQuery>, QueryRejection>,
) -> Result<Json<CafeEnvelope<Vec<cafe::Model>>>, JsonApiError> {
    let Query(q) = query?;
    let loc = q.loc.ok_or_else(|| JsonApiError::bad_request("loc is required"))?;
    let hits = state.cafes.search_by_location(&loc).await?;
    if hits.is_empty() {
        return Err(JsonApiError::not_found(LOCATION_NOT_FOUND));
    }
    Ok(Json(CafeEnvelope { cafe: hits }))
}

#[utoipa::path(
    get, path = "/cafes/{id}", tag = "cafe",
    params(("id" = i32, Path, description = "Cafe ID")),
    responses(
        (status = 200, description = "The cafe"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
) -> Result<Json<CafeEnvelope<cafe::Model>>, JsonApiError> {
    let id = parse_id(&raw_id).ok_or_else(|| JsonApiError::from(ServiceError::not_found("cafe")))?;
    match state.cafes.get_by_id(id).await? {
        Some(cafe) => Ok(Json(CafeEnvelope { cafe })),
        None => Err(ServiceError::not_found("cafe").into()),
    }
}

#[utoipa::path(
    post, path = "/add", tag = "cafe",
    request_body(content = crate::openapi::CafeFormDoc, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Name already taken")
    )
)]
pub async fn add(
    State(state): State<ServerState>,
    form: Result<Form<CafeForm>, FormRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Form(form) = form?;
    let new = NewCafe::try_from(form)?;
    state.cafes.insert(new).await?;
    Ok(success("Successfully added the new cafe."))
}

#[utoipa::path(
    patch, path = "/update-price/{id}", tag = "cafe",
    params(
        ("id" = i32, Path, description = "Cafe ID"),
        ("coffee_price" = String, Query, description = "New price text, e.g. £3.00")
    ),
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Missing coffee_price"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update_price(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    query: Result<Query<PriceQuery>, QueryRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Query(q) = query?;
    let id = parse_id(&raw_id).ok_or_else(|| JsonApiError::from(ServiceError::not_found("cafe")))?;
    let price = q.coffee_price.ok_or_else(|| JsonApiError::bad_request("coffee_price is required"))?;
    state.cafes.update_price(id, &price).await?;
    Ok(success("Successfully updated the coffee price."))
}

#[utoipa::path(
    delete, path = "/report-closed/{id}", tag = "cafe",
    params(
        ("id" = i32, Path, description = "Cafe ID"),
        ("api-key" = String, Query, description = "Shared secret")
    ),
    responses(
        (status = 200, description = "Deleted"),
        (status = 403, description = "Wrong api-key"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn report_closed(
    State(state): State<ServerState>,
    Path(raw_id): Path<String>,
    query: Result<Query<ApiKeyQuery>, QueryRejection>,
) -> Result<Json<Value>, JsonApiError> {
    let Query(q) = query?;
    let api_key = q.api_key.as_deref();
    let Some(id) = parse_id(&raw_id) else {
        state.cafes.authorize(api_key)?;
        return Err(ServiceError::not_found("cafe").into());
    };
    state.cafes.report_closed(id, api_key).await?;
    Ok(success("Successfully deleted the closed cafe."))
}
