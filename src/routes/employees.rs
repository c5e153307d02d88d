use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
};
use uuid::Uuid;

use crate::{
    dto::employees::EmployeeRequest,
    error::AppResult,
    models::Employee,
    services::employee_service,
    state::AppState,
    validation::Validate,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_employee))
        .route("/", get(list_employees))
        .route("/{id}", get(get_employee))
        .route("/{id}", put(update_employee))
        .route("/{id}", delete(delete_employee))
}

#[utoipa::path(
    post,
    path = "/api/v1/employees",
    request_body = EmployeeRequest,
    responses(
        (status = 201, description = "Employee created", body = Employee),
        (status = 400, description = "Validation failure or duplicate email"),
    ),
    tag = "Employees"
)]
pub async fn create_employee(
    State(state): State<AppState>,
    Json(payload): Json<EmployeeRequest>,
) -> AppResult<(StatusCode, Json<Employee>)> {
    payload.validate()?;
    let employee = employee_service::create_employee(&state, payload).await?;
    Ok((StatusCode::CREATED, Json(employee)))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees",
    responses(
        (status = 200, description = "List employees", body = [Employee]),
    ),
    tag = "Employees"
)]
pub async fn list_employees(State(state): State<AppState>) -> AppResult<Json<Vec<Employee>>> {
    let employees = employee_service::list_employees(&state).await?;
    Ok(Json(employees))
}

#[utoipa::path(
    get,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 200, description = "Get employee", body = Employee),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Employees"
)]
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<Employee>> {
    let employee = employee_service::get_employee(&state, id).await?;
    Ok(Json(employee))
}

#[utoipa::path(
    put,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    request_body = EmployeeRequest,
    responses(
        (status = 200, description = "Updated employee", body = Employee),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Employees"
)]
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<EmployeeRequest>,
) -> AppResult<Json<Employee>> {
    payload.validate()?;
    let employee = employee_service::update_employee(&state, id, payload).await?;
    Ok(Json(employee))
}

#[utoipa::path(
    delete,
    path = "/api/v1/employees/{id}",
    params(("id" = Uuid, Path, description = "Employee ID")),
    responses(
        (status = 204, description = "Deleted employee"),
        (status = 404, description = "Employee not found"),
    ),
    tag = "Employees"
)]
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<StatusCode> {
    employee_service::delete_employee(&state, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
