use chrono::Utc;
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set,
    TransactionTrait,
};
use uuid::Uuid;

use crate::{
    dto::orders::OrderRequest,
    entity::{
        customers::Entity as Customers,
        employees::Entity as Employees,
        order_items::{
            ActiveModel as OrderItemActive, Column as OrderItemCol, Entity as OrderItems,
        },
        orders::{ActiveModel as OrderActive, Column as OrderCol, Entity as Orders, Model as OrderModel},
        products::Entity as Products,
    },
    error::{AppError, AppResult},
    models::{Order, OrderItem, OrderStatus},
    services::{customer_service, employee_service, product_service},
    state::AppState,
};

/// Creates the order and its items in one transaction. Each item's unit price
/// is a snapshot of the product price at this moment; later price changes do
/// not touch existing orders.
pub async fn create_order(state: &AppState, payload: OrderRequest) -> AppResult<Order> {
    let customer = customer_service::find_customer_by_id(state, payload.customer_id).await?;

    let employee = match payload.employee_id {
        Some(id) => Some(employee_service::find_employee_by_id(state, id).await?),
        None => None,
    };

    let mut lines = Vec::with_capacity(payload.items.len());
    let mut total_amount = Decimal::ZERO;
    for item in &payload.items {
        let product = product_service::find_product_by_id(state, item.product_id).await?;
        total_amount += product.price * Decimal::from(item.quantity);
        lines.push((product, item.quantity));
    }

    let txn = state.orm.begin().await?;

    let order = OrderActive {
        id: Set(Uuid::new_v4()),
        order_date: Set(Utc::now().into()),
        status: Set(OrderStatus::PendingPayment.as_str().to_owned()),
        total_amount: Set(total_amount),
        customer_id: Set(customer.id),
        employee_id: Set(employee.as_ref().map(|e| e.id)),
    }
    .insert(&txn)
    .await?;

    let mut items = Vec::with_capacity(lines.len());
    for (product, quantity) in lines {
        OrderItemActive {
            id: Set(Uuid::new_v4()),
            order_id: Set(order.id),
            product_id: Set(product.id),
            quantity: Set(quantity),
            unit_price: Set(product.price),
        }
        .insert(&txn)
        .await?;

        items.push(OrderItem {
            product_id: product.id,
            product_name: product.name,
            quantity,
            unit_price: product.price,
        });
    }

    txn.commit().await?;

    tracing::info!(order_id = %order.id, total = %order.total_amount, "order created");

    Ok(Order {
        id: order.id,
        order_date: order.order_date.with_timezone(&Utc),
        status: OrderStatus::PendingPayment,
        total_amount: order.total_amount,
        customer_id: customer.id,
        customer_name: format!("{} {}", customer.first_name, customer.last_name),
        employee_id: employee.as_ref().map(|e| e.id),
        employee_name: employee
            .as_ref()
            .map(|e| format!("{} {}", e.first_name, e.last_name)),
        items,
    })
}

pub async fn list_orders(state: &AppState) -> AppResult<Vec<Order>> {
    let orders = Orders::find().all(&state.orm).await?;
    let mut out = Vec::with_capacity(orders.len());
    for order in orders {
        out.push(assemble_order(&state.orm, order).await?);
    }
    Ok(out)
}

pub async fn get_order(state: &AppState, id: Uuid) -> AppResult<Order> {
    let order = find_order_by_id(&state.orm, id).await?;
    assemble_order(&state.orm, order).await
}

pub async fn list_orders_by_customer(state: &AppState, customer_id: Uuid) -> AppResult<Vec<Order>> {
    // 404 for an unknown customer rather than an empty list.
    customer_service::find_customer_by_id(state, customer_id).await?;

    let orders = Orders::find()
        .filter(OrderCol::CustomerId.eq(customer_id))
        .all(&state.orm)
        .await?;
    let mut out = Vec::with_capacity(orders.len());
    for order in orders {
        out.push(assemble_order(&state.orm, order).await?);
    }
    Ok(out)
}

/// The sole status transition in the system: PENDING_PAYMENT -> CANCELLED.
/// Anything else is a conflict.
pub async fn cancel_order(state: &AppState, id: Uuid) -> AppResult<Order> {
    let txn = state.orm.begin().await?;

    let order = find_order_by_id(&txn, id).await?;
    let status = parse_status(&order.status)?;

    if status != OrderStatus::PendingPayment {
        return Err(AppError::Conflict(format!(
            "Order with status {status} cannot be cancelled"
        )));
    }

    let mut active: OrderActive = order.into();
    active.status = Set(OrderStatus::Cancelled.as_str().to_owned());
    let order = active.update(&txn).await?;

    txn.commit().await?;

    tracing::info!(order_id = %order.id, "order cancelled");

    assemble_order(&state.orm, order).await
}

async fn find_order_by_id<C: ConnectionTrait>(conn: &C, id: Uuid) -> AppResult<OrderModel> {
    Orders::find_by_id(id)
        .one(conn)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Order not found with id: {id}")))
}

/// Resolves the customer/employee names and item product names an order
/// response carries.
async fn assemble_order<C: ConnectionTrait>(conn: &C, order: OrderModel) -> AppResult<Order> {
    let status = parse_status(&order.status)?;

    let customer = Customers::find_by_id(order.customer_id)
        .one(conn)
        .await?
        .ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "order {} references missing customer {}",
                order.id,
                order.customer_id
            ))
        })?;

    let employee = match order.employee_id {
        Some(id) => Employees::find_by_id(id).one(conn).await?,
        None => None,
    };

    let rows = OrderItems::find()
        .filter(OrderItemCol::OrderId.eq(order.id))
        .find_also_related(Products)
        .all(conn)
        .await?;

    let mut items = Vec::with_capacity(rows.len());
    for (item, product) in rows {
        let product = product.ok_or_else(|| {
            AppError::Internal(anyhow::anyhow!(
                "order item {} references missing product {}",
                item.id,
                item.product_id
            ))
        })?;
        items.push(OrderItem {
            product_id: product.id,
            product_name: product.name,
            quantity: item.quantity,
            unit_price: item.unit_price,
        });
    }

    Ok(Order {
        id: order.id,
        order_date: order.order_date.with_timezone(&Utc),
        status,
        total_amount: order.total_amount,
        customer_id: customer.id,
        customer_name: format!("{} {}", customer.first_name, customer.last_name),
        employee_id: employee.as_ref().map(|e| e.id),
        employee_name: employee
            .as_ref()
            .map(|e| format!("{} {}", e.first_name, e.last_name)),
        items,
    })
}

fn parse_status(value: &str) -> AppResult<OrderStatus> {
    OrderStatus::parse(value)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("unknown order status {value:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    #[test]
    fn total_is_sum_of_quantity_times_price() {
        let lines = [(dec!(1200.00), 1), (dec!(19.99), 3)];
        let mut total = Decimal::ZERO;
        for (price, quantity) in lines {
            total += price * Decimal::from(quantity);
        }
        assert_eq!(total, dec!(1259.97));
    }

    #[test]
    fn unknown_status_is_an_internal_error() {
        assert!(parse_status("DELIVERED").is_err());
        assert!(matches!(
            parse_status("PENDING_PAYMENT"),
            Ok(OrderStatus::PendingPayment)
        ));
    }
}
