use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use crate::{
    dto::products::ProductRequest,
    entity::products::{ActiveModel, Column, Entity as Products, Model as ProductModel},
    error::{AppError, AppResult},
    models::Product,
    services::supplier_service,
    state::AppState,
};

pub async fn create_product(state: &AppState, payload: ProductRequest) -> AppResult<Product> {
    let existing = Products::find()
        .filter(Column::Sku.eq(payload.sku.clone()))
        .one(&state.orm)
        .await?;
    if existing.is_some() {
        return Err(AppError::BadRequest(format!(
            "Product with SKU {} already exists.",
            payload.sku
        )));
    }

    // The supplier must exist before the product can reference it.
    let supplier = supplier_service::find_supplier_by_id(state, payload.supplier_id).await?;

    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
        description: Set(payload.description),
        price: Set(payload.price),
        sku: Set(payload.sku),
        supplier_id: Set(supplier.id),
    };
    let product = active.insert(&state.orm).await?;

    Ok(product_from_entity(product))
}

pub async fn list_products(state: &AppState) -> AppResult<Vec<Product>> {
    let products = Products::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

pub async fn get_product(state: &AppState, id: Uuid) -> AppResult<Product> {
    let product = find_product_by_id(state, id).await?;
    Ok(product_from_entity(product))
}

pub async fn update_product(
    state: &AppState,
    id: Uuid,
    payload: ProductRequest,
) -> AppResult<Product> {
    let existing = find_product_by_id(state, id).await?;
    let supplier = supplier_service::find_supplier_by_id(state, payload.supplier_id).await?;

    let mut active: ActiveModel = existing.into();
    active.name = Set(payload.name);
    active.description = Set(payload.description);
    active.price = Set(payload.price);
    active.sku = Set(payload.sku);
    active.supplier_id = Set(supplier.id);
    let product = active.update(&state.orm).await?;

    Ok(product_from_entity(product))
}

pub async fn delete_product(state: &AppState, id: Uuid) -> AppResult<()> {
    let result = Products::delete_by_id(id).exec(&state.orm).await?;
    if result.rows_affected == 0 {
        return Err(AppError::NotFound(format!(
            "Product not found with id: {id}"
        )));
    }
    Ok(())
}

/// Shared with the order service, which snapshots product prices at checkout.
pub async fn find_product_by_id(state: &AppState, id: Uuid) -> AppResult<ProductModel> {
    Products::find_by_id(id)
        .one(&state.orm)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Product not found with id: {id}")))
}

pub fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
        description: model.description,
        price: model.price,
        sku: model.sku,
        supplier_id: model.supplier_id,
    }
}
