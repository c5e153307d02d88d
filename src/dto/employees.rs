use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{Validate, Violation, check_email, check_not_blank, check_not_future};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeRequest {
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub email: String,
    pub hire_date: NaiveDate,
}

impl Validate for EmployeeRequest {
    fn violations(&self) -> Vec<Violation> {
        let mut out = Vec::new();
        check_not_blank(&mut out, "firstName", &self.first_name);
        check_not_blank(&mut out, "lastName", &self.last_name);
        check_not_blank(&mut out, "role", &self.role);
        check_not_blank(&mut out, "email", &self.email);
        check_email(&mut out, "email", &self.email);
        check_not_future(&mut out, "hireDate", self.hire_date);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn valid() -> EmployeeRequest {
        EmployeeRequest {
            first_name: "Doug".into(),
            last_name: "Heffernan".into(),
            role: "IPS Driver".into(),
            email: "doug@ips.com".into(),
            hire_date: NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
        }
    }

    #[test]
    fn valid_request_passes() {
        assert!(valid().validate().is_ok());
    }

    #[test]
    fn future_hire_date_fails() {
        let mut req = valid();
        req.hire_date = Utc::now().date_naive() + chrono::Days::new(7);
        let violations = req.violations();
        assert!(violations.iter().any(|v| v.field == "hireDate"));
    }

    #[test]
    fn blank_role_fails() {
        let mut req = valid();
        req.role = "  ".into();
        assert!(req.validate().is_err());
    }
}
