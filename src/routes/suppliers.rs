use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::suppliers::SupplierRequest,
    error::AppResult,
    models::Supplier,
    services::supplier_service,
    state::AppState,
    validation::Validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_supplier))
        .route("/", get(list_suppliers))
        .route("/{id}", get(get_supplier))
        .route("/{id}", put(update_supplier))
        .route("/{id}", delete(delete_supplier))
}

#[utoipa::path(
    post,
    path = "/api/v1/suppliers",
    request_body = SupplierRequest,
    responses(
        (status = 201, description = "Supplier created", body = Supplier),
        (status = 400, description = "Validation failure or duplicate email"),
    ),
    tag = "Suppliers"
)]
pub async fn create_supplier(
    State(state): State<AppState>,
    Json(payload): Json<SupplierRequest>,
) -> AppResult<(StatusCode, Json<Supplier>)> {
    payload.validate()?;
    let supplier = supplier_service::create_supplier(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(supplier)))
}

#[utoipa::path(
    get,
    path = "/api/v1/suppliers",
    responses(
        (status = 200, description = "List suppliers", body = [Supplier]),
    ),
    tag = "Suppliers"
)]
pub async fn list_suppliers(State(state): State<AppState>) -> AppResult<Json<Vec<Supplier>>> {
    let suppliers = supplier_service::list_suppliers(&state).await?;
    Ok(Json(suppliers))
}

#[utoipa::path(
    get,
    path = "/api/v1/suppliers/{id}",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    responses(
        (status = 200, description = "Get supplier", body = Supplier),
        (status = 404, description = "Supplier not found"),
    ),
    tag = "Suppliers"
)]
pub async fn get_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Supplier>> {
    let supplier = supplier_service::get_supplier(&state, id).await?;
    Ok(Json(supplier))
}

#[utoipa::path(
    put,
    path = "/api/v1/suppliers/{id}",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    request_body = SupplierRequest,
    responses(
        (status = 200, description = "Updated supplier", body = Supplier),
        (status = 404, description = "Supplier not found"),
    ),
    tag = "Suppliers"
)]
pub async fn update_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<SupplierRequest>,
) -> AppResult<Json<Supplier>> {
    payload.validate()?;
    let supplier = supplier_service::update_supplier(&state, id, payload).await?;
    Ok(Json(supplier))
}

#[utoipa::path(
    delete,
    path = "/api/v1/suppliers/{id}",
    params(("id" = Uuid, Path, description = "Supplier ID")),
    responses(
        (status = 204, description = "Deleted supplier and its products"),
        (status = 404, description = "Supplier not found"),
    ),
    tag = "Suppliers"
)]
pub async fn delete_supplier(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    supplier_service::delete_supplier(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
