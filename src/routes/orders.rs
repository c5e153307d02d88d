use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};
use uuid::Uuid;

use crate::{
    dto::orders::OrderRequest,
    error::AppResult,
    models::Order,
    services::order_service,
    state::AppState,
    validation::Validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_order))
        .route("/", get(list_orders))
        .route("/{id}", get(get_order))
        .route("/customer/{customer_id}", get(list_orders_by_customer))
        .route("/{id}/cancel", post(cancel_order))
}

#[utoipa::path(
    post,
    path = "/api/v1/orders",
    request_body = OrderRequest,
    responses(
        (status = 201, description = "Order created", body = Order),
        (status = 400, description = "Validation failure"),
        (status = 404, description = "Customer, employee or product not found"),
    ),
    tag = "Orders"
)]
pub async fn create_order(
    State(state): State<AppState>,
    Json(payload): Json<OrderRequest>,
) -> AppResult<(StatusCode, Json<Order>)> {
    payload.validate()?;
    let order = order_service::create_order(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(order)))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders",
    responses(
        (status = 200, description = "List orders", body = [Order]),
    ),
    tag = "Orders"
)]
pub async fn list_orders(State(state): State<AppState>) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders(&state).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/{id}",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Get order", body = Order),
        (status = 404, description = "Order not found"),
    ),
    tag = "Orders"
)]
pub async fn get_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Order>> {
    let order = order_service::get_order(&state, id).await?;
    Ok(Json(order))
}

#[utoipa::path(
    get,
    path = "/api/v1/orders/customer/{customer_id}",
    params(("customer_id" = Uuid, Path, description = "Customer ID")),
    responses(
        (status = 200, description = "Orders for the customer", body = [Order]),
        (status = 404, description = "Customer not found"),
    ),
    tag = "Orders"
)]
pub async fn list_orders_by_customer(
    State(state): State<AppState>,
    Path(customer_id): Path<Uuid>,
) -> AppResult<Json<Vec<Order>>> {
    let orders = order_service::list_orders_by_customer(&state, customer_id).await?;
    Ok(Json(orders))
}

#[utoipa::path(
    post,
    path = "/api/v1/orders/{id}/cancel",
    params(("id" = Uuid, Path, description = "Order ID")),
    responses(
        (status = 200, description = "Cancelled order", body = Order),
        (status = 404, description = "Order not found"),
        (status = 409, description = "Order is not in a cancellable status"),
    ),
    tag = "Orders"
)]
pub async fn cancel_order(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Order>> {
    let order = order_service::cancel_order(&state, id).await?;
    Ok(Json(order))
}
