use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{
    Validate, Violation, check_email, check_length, check_max_length, check_not_blank,
};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SupplierRequest {
    pub name: String,
    pub contact_person: Option<String>,
    pub email: String,
    pub phone: Option<String>,
}

impl Validate for SupplierRequest {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        check_not_blank(&mut out, "name", &self.name);
        check_length(&mut out, "name", &self.name, 2, 255);
        check_not_blank(&mut out, "email", &self.email);
        check_email(&mut out, "email", &self.email);
        if let Some(phone) = &self.phone {
            check_max_length(&mut out, "phone", phone, 20);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> SupplierRequest {
        SupplierRequest {
            name: "Big TV Store".into(),
            contact_person: Some("Spence".into()),
            email: "spence@tv.com".into(),
            phone: Some("222".into()),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn overlong_phone_fails() {
        let mut req = valid();
        req.phone = Some("5".repeat(21));
        let violations = req.violations();
        assert!(violations.iter().any(|v| v.field == "phone"));
    }
}
