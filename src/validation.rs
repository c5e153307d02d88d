//! Explicit request validation. Every handler runs the payload through
//! [`Validate::validate`] before touching the service layer; the collected
//! violations surface as a single 400 response.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct Violation {
    pub field: String,
    pub message: String,
}

impl Violation {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub trait Validate {
    fn violations(&self) -> Vec<Violation>;

    fn validate(&self) -> AppResult<()> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(violations))
        }
    }
}

pub fn check_not_blank(out: &mut Vec<Violation>, field: &str, value: &str) {
    if value.trim().is_empty() {
        out.push(Violation::new(field, format!("{field} cannot be blank")));
    }
}

pub fn check_length(out: &mut Vec<Violation>, field: &str, value: &str, min: usize, max: usize) {
    let len = value.chars().count();
    if len < min || len > max {
        out.push(Violation::new(
            field,
            format!("{field} must be between {min} and {max} characters"),
        ));
    }
}

pub fn check_max_length(out: &mut Vec<Violation>, field: &str, value: &str, max: usize) {
    if value.chars().count() > max {
        out.push(Violation::new(
            field,
            format!("{field} must be at most {max} characters"),
        ));
    }
}

/// Minimal shape check: one `@` with non-empty local part and a dotted domain.
pub fn check_email(out: &mut Vec<Violation>, field: &str, value: &str) {
    let valid = match value.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.is_empty()
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };
    if !valid && !value.trim().is_empty() {
        out.push(Violation::new(field, "must be a valid email address"));
    }
}

pub fn check_positive_amount(out: &mut Vec<Violation>, field: &str, value: Decimal) {
    if value <= Decimal::ZERO {
        out.push(Violation::new(field, format!("{field} must be positive")));
    }
}

pub fn check_not_future(out: &mut Vec<Violation>, field: &str, value: NaiveDate) {
    if value > Utc::now().date_naive() {
        out.push(Violation::new(
            field,
            format!("{field} cannot be in the future"),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_value_is_flagged() {
        let mut out = Vec::new();
        check_not_blank(&mut out, "firstName", "   ");
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].field, "firstName");
    }

    #[test]
    fn email_shape_accepts_plain_addresses() {
        let mut out = Vec::new();
        check_email(&mut out, "email", "spence@tv.com");
        assert!(out.is_empty());
    }

    #[test]
    fn email_shape_rejects_missing_domain() {
        for bad in ["spence", "spence@", "@tv.com", "spence@tv", "spence@.com"] {
            let mut out = Vec::new();
            check_email(&mut out, "email", bad);
            assert_eq!(out.len(), 1, "expected {bad:?} to be rejected");
        }
    }

    #[test]
    fn zero_price_is_not_positive() {
        let mut out = Vec::new();
        check_positive_amount(&mut out, "price", Decimal::ZERO);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn future_hire_date_is_flagged() {
        let tomorrow = Utc::now().date_naive() + chrono::Days::new(1);
        let mut out = Vec::new();
        check_not_future(&mut out, "hireDate", tomorrow);
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn past_hire_date_passes() {
        let mut out = Vec::new();
        check_not_future(
            &mut out,
            "hireDate",
            NaiveDate::from_ymd_opt(1995, 5, 1).unwrap(),
        );
        assert!(out.is_empty());
    }
}
