use rust_decimal::Decimal;
use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::validation::{
    Validate, Violation, check_length, check_max_length, check_not_blank, check_positive_amount,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: Decimal,
    pub sku: String,
    pub supplier_id: Uuid,
}

impl Validate for ProductRequest {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        check_not_blank(&mut out, "name", &self.name);
        check_length(&mut out, "name", &self.name, 2, 255);
        check_positive_amount(&mut out, "price", self.price);
        check_not_blank(&mut out, "sku", &self.sku);
        check_max_length(&mut out, "sku", &self.sku, 100);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::dec;

    fn valid() -> ProductRequest {
        ProductRequest {
            name: "Big Screen TV".into(),
            description: Some("A very large TV".into()),
            price: dec!(1200.00),
            sku: "TV-BIG-01".into(),
            supplier_id: Uuid::new_v4(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn non_positive_price_fails() {
        for price in [Decimal::ZERO, dec!(-1)] {
            let mut req = valid();
            req.price = price;
            let violations = req.violations();
            assert!(violations.iter().any(|v| v.field == "price"));
        }
    }

    #[test]
    fn blank_sku_fails() {
        let mut req = valid();
        req.sku = "".into();
        assert!(req.validate().is_err());
    }
}
