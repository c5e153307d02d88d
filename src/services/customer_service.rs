use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::customers::CustomerRequest,
    entity::customers::{ActiveModel, Column, Entity as Customers, Model as CustomerModel},
    error::{AppError, AppResult},
    models::Customer,
    state::AppState,
};

pub async fn create_customer(state: &AppState, payload: CustomerRequest) -> AppResult<Customer> {
    let existing = Customers::find()
        .filter(Column::Email.eq(payload.email.clone()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(format!(
            "Customer with email {} already exists.",
            payload.email
        )));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        first_name: Set(payload.first_name),
        last_name: Set(payload.last_name),
        email: Set(payload.email),
        phone: Set(payload.phone),
        address: Set(payload.address),
    };
    let customer = active.insert(&state.orm).await?;

    Ok(customer_from_entity(customer))
}

pub async fn list_customers(state: &AppState) -> AppResult<Vec<Customer>> {
    let customers = Customers::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(customer_from_entity)
        .collect();
    Ok(customers)
}

pub async fn get_customer(state: &AppState, id: Uuid) -> AppResult<Customer> {
    let customer = find_customer_by_id(state, id).await?;
    Ok(customer_from_entity(customer))
}

pub async fn update_customer(
    state: &AppState,
    id: Uuid,
    payload: CustomerRequest,
) -> AppResult<Customer> {
    let existing = find_customer_by_id(state, id).await?;

    let mut active: ActiveModel = existing.into();
    active.first_name = Set(payload.first_name);
    active.last_name = Set(payload.last_name);
    active.email = Set(payload.email);
    active.phone = Set(payload.phone);
    active.address = Set(payload.address);
    let customer = active.update(&state.orm).await?;

    Ok(customer_from_entity(customer))
}

pub async fn delete_customer(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Customers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Customer not found with id: {id}"
        )));
    }
    Ok(())
}

/// Shared with the order service, which resolves customers by id at checkout.
pub async fn find_customer_by_id(state: &AppState, id: Uuid) -> AppResult<CustomerModel> {
    Customers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Customer not found with id: {id}")))
}

pub fn customer_from_entity(model: CustomerModel) -> Customer {
    Customer {
        id: model.id,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone: model.phone,
        address: model.address,
    }
}
