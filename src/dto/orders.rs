use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::{Validate, Violation};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderRequest {
    pub customer_id: Uuid,
    pub employee_id: Option<Uuid>,
    pub items: Vec<OrderItemRequest>,
}

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    pub product_id: Uuid,
    pub quantity: i32,
}

impl Validate for OrderRequest {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        if self.items.is_empty() {
            out.push(Violation::new("items", "Order must have at least one item"));
        }
        for (idx, item) in self.items.iter().enumerate() {
            if item.quantity <= 0 {
                out.push(Violation::new(
                    format!("items[{idx}].quantity"),
                    "Quantity must be a positive number",
                ));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_items_fail() {
        let req = OrderRequest {
            customer_id: Uuid::new_v4(),
            employee_id: None,
            items: vec![],
        };
        let violations = req.violations();
        assert!(violations.iter().any(|v| v.field == "items"));
    }

    #[test]
    fn zero_quantity_fails() {
        let req = OrderRequest {
            customer_id: Uuid::new_v4(),
            employee_id: None,
            items: vec![OrderItemRequest {
                product_id: Uuid::new_v4(),
                quantity: 0,
            }],
        };
        let violations = req.violations();
        assert!(violations.iter().any(|v| v.field == "items[0].quantity"));
    }

    #[test]
    fn positive_quantities_pass() {
        let req = OrderRequest {
            customer_id: Uuid::new_v4(),
            employee_id: None,
            items: vec![OrderItemRequest {
                product_id: Uuid::new_v4(),
                quantity: 1,
            }],
        };
        assert!(req.validate().is_ok());
    }
}
