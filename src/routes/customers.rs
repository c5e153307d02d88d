use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::customers::CustomerRequest,
    error::AppResult,
    models::Customer,
    services::customer_service,
    state::AppState,
    validation::Validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_customer))
        .route("/", get(list_customers))
        .route("/{id}", get(get_customer))
        .route("/{id}", put(update_customer))
        .route("/{id}", delete(delete_customer))
}

#[utoipa::path(
    post,
    path = "/api/v1/customers",
    request_body = CustomerRequest,
    responses(
        (status = 201, description = "Customer created", body = Customer),
        (status = 400, description = "Validation failure or duplicate email"),
    ),
    tag = "Customers"
)]
pub async fn create_customer(
    State(state): State<AppState>,
    Json(payload): Json<CustomerRequest>,
) -> AppResult<(StatusCode, Json<Customer>)> {
    payload.validate()?;
    let customer = customer_service::create_customer(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(customer)))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers",
    responses(
        (status = 200, description = "List customers", body = [Customer]),
    ),
    tag = "Customers"
)]
pub async fn list_customers(State(state): State<AppState>) -> AppResult<Json<Vec<Customer>>> {
    let customers = customer_service::list_customers(&state).await?;
    Ok(Json(customers))
}

#[utoipa::path(
    get,
    path = "/api/v1/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Get customer", body = Customer),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn get_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Customer>> {
    let customer = customer_service::get_customer(&state, id).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    put,
    path = "/api/v1/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    request_body = CustomerRequest,
    responses(
        (status = 200, description = "Updated customer", body = Customer),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn update_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<CustomerRequest>,
) -> AppResult<Json<Customer>> {
    payload.validate()?;
    let customer = customer_service::update_customer(&state, id, payload).await?;
    Ok(Json(customer))
}

#[utoipa::path(
    delete,
    path = "/api/v1/customers/{id}",
    params(("id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 204, description = "Deleted customer"),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Customers"
)]
pub async fn delete_customer(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    customer_service::delete_customer(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
