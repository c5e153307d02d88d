use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{Validate, Violation, check_email, check_length, check_not_blank};

/// Create and update share the same payload: updates are full overwrites.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl Validate for CustomerRequest {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        check_not_blank(&mut out, "firstName", &self.first_name);
        check_length(&mut out, "firstName", &self.first_name, 2, 100);
        check_not_blank(&mut out, "lastName", &self.last_name);
        check_length(&mut out, "lastName", &self.last_name, 2, 100);
        check_not_blank(&mut out, "email", &self.email);
        check_email(&mut out, "email", &self.email);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CustomerRequest {
        CustomerRequest {
            first_name: "Carrie".into(),
            last_name: "Heffernan".into(),
            email: "carrie@example.com".into(),
            phone: Some("111".into()),
            address: Some("Queens, NY".into()),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn blank_first_name_fails() {
        let mut req = valid();
        req.first_name = "".into();
        let violations = req.violations();
        assert!(violations.iter().any(|v| v.field == "firstName"));
    }

    #[test]
    fn bad_email_fails() {
        let mut req = valid();
        req.email = "not-an-email".into();
        assert!(req.validate().is_err());
    }
}
