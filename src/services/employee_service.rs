use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::employees::EmployeeRequest,
    entity::employees::{ActiveModel, Column, Entity as Employees, Model as EmployeeModel},
    error::{AppError, AppResult},
    models::Employee,
    state::AppState,
};

pub async fn create_employee(state: &AppState, payload: EmployeeRequest) -> AppResult<Employee> {
    let existing = Employees::find()
        .filter(Column::Email.eq(payload.email.clone()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(format!(
            "Employee with email {} already exists.",
            payload.email
        )));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        role: Set(payload.role),
        email: Set(payload.email),
        hire_date: Set(payload.hire_date),
    };
    let employee = active.insert(&state.orm).await?;

    Ok(employee_from_entity(employee))
}

pub async fn list_employees(state: &AppState) -> AppResult<Vec<Employee>> {
    let employees = Employees::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(employee_from_entity)
        .collect();
    Ok(employees)
}

pub async fn get_employee(state: &AppState, id: Uuid) -> AppResult<Employee> {
    let employee = find_employee_by_id(state, id).await?;
    Ok(employee_from_entity(employee))
}

pub async fn update_employee(
    state: &AppState,
    id: Uuid,
    payload: EmployeeRequest,
) -> AppResult<Employee> {
    let existing = find_employee_by_id(state, id).await?;

    let mut active: ActiveModel = existing.into();
    active.first_name = Set(payload.first_name);
    active.last_name = Set(payload.last_name);
    active.role = Set(payload.role);
    active.email = Set(payload.email);
    active.hire_date = Set(payload.hire_date);
    let employee = active.update(&state.orm).await?;

    Ok(employee_from_entity(employee))
}

pub async fn delete_employee(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Employees::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Employee not found with id: {id}"
        )));
    }
    Ok(())
}

pub async fn find_employee_by_id(state: &AppState, id: Uuid) -> AppResult<EmployeeModel> {
    Employees::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Employee not found with id: {id}")))
}

pub fn employee_from_entity(model: EmployeeModel) -> Employee {
    Employee {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        role: model.role,
        email: model.email,
        hire_date: model.hire_date,
    }
}
