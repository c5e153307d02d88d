use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::suppliers::SupplierRequest,
    entity::suppliers::{ActiveModel, Column, Entity as Suppliers, Model as SupplierModel},
    error::{AppError, AppResult},
    models::Supplier,
    state::AppState,
};

pub async fn create_supplier(state: &AppState, payload: SupplierRequest) -> AppResult<Supplier> {
    let existing = Suppliers::find()
        .filter(Column::Email.eq(payload.email.clone()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(format!(
            "Supplier with email {} already exists.",
            payload.email
        )));
    }

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        contact_person: Set(payload.contact_person),
        email: Set(payload.email),
        phone: Set(payload.phone),
    };
    let supplier = active.insert(&state.orm).await?;

    Ok(supplier_from_entity(supplier))
}

pub async fn list_suppliers(state: &AppState) -> AppResult<Vec<Supplier>> {
    let suppliers = Suppliers::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(supplier_from_entity)
        .collect();
    Ok(suppliers)
}

pub async fn get_supplier(state: &AppState, id: Uuid) -> AppResult<Supplier> {
    let supplier = find_supplier_by_id(state, id).await?;
    Ok(supplier_from_entity(supplier))
}

pub async fn update_supplier(
    state: &AppState,
    id: Uuid,
    payload: SupplierRequest,
) -> AppResult<Supplier> {
    let existing = find_supplier_by_id(state, id).await?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.contact_person = Set(payload.contact_person);
    active.email = Set(payload.email);
    active.phone = Set(payload.phone);
    let supplier = active.update(&state.orm).await?;

    Ok(supplier_from_entity(supplier))
}

/// Deleting a supplier removes its products as well (ON DELETE CASCADE).
pub async fn delete_supplier(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Suppliers::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Supplier not found with id: {id}"
        )));
    }
    Ok(())
}

pub async fn find_supplier_by_id(state: &AppState, id: Uuid) -> AppResult<SupplierModel> {
    Suppliers::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Supplier not found with id: {id}")))
}

pub fn supplier_from_entity(model: SupplierModel) -> Supplier {
    Supplier {
        id: model.id,
        name: model.name,
        contact_person: model.contact_person,
        email: model.email,
        phone: model.phone,
    }
}
