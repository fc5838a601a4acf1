use axum::{extract::{Path, Query, State}, http::StatusCode, Json};
use serde::Deserialize;
use service::entity::Product;
use service::pagination::{Pagination, SortDirection};
use service::product::domain::{CreateProductInput, UpdateProductInput};
use tracing::info;

use crate::{auth::ServerState, errors::JsonApiError};

/// Listing query; unparsable numbers count as zero (no pagination).
#[derive(Debug, Deserialize, utoipa::IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQuery {
    /// 1-based page number
    pub page: Option<String>,
    /// page size
    pub limit: Option<String>,
    /// `asc` (default) or `desc` on creation time
    pub sort: Option<String>,
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    security(("bearer_auth" = [])),
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "Create Failed")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<CreateProductInput>,
) -> Result<(StatusCode, Json<Product>), JsonApiError> {
    let product = state.products.create(input).await?;
    Ok((StatusCode::CREATED, Json(product)))
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    params(ListQuery),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::ProductDoc]),
        (status = 401, description = "Unauthorized"),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
    Query(q): Query<ListQuery>,
) -> Result<Json<Vec<Product>>, JsonApiError> {
    let page = Pagination::from_raw(q.page.as_deref(), q.limit.as_deref());
    let sort = SortDirection::parse(q.sort.as_deref().unwrap_or_default());
    let products = state.products.list(page, sort).await?;
    info!(count = products.len(), "list products");
    Ok(Json(products))
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "OK", body = crate::openapi::ProductDoc),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, JsonApiError> {
    Ok(Json(state.products.get(&id).await?))
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    request_body = crate::openapi::ProductInputDoc,
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Updated", body = crate::openapi::ProductDoc),
        (status = 400, description = "Validation Error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Update Failed")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(input): Json<UpdateProductInput>,
) -> Result<Json<Product>, JsonApiError> {
    Ok(Json(state.products.update(&id, input).await?))
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product ID (UUID)")),
    security(("bearer_auth" = [])),
    responses(
        (status = 204, description = "Deleted"),
        (status = 400, description = "Malformed id"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Not Found"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<StatusCode, JsonApiError> {
    state.products.delete(&id).await?;
    Ok(StatusCode::NO_CONTENT)
}
