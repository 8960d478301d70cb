use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

use super::model::{RegistrationDraft, ValidRegistration};

// 10-digit Indian mobile number
static INDIA_PHONE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[6-9]\d{9}$").unwrap());

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Phone,
    Consent,
    Name,
    Email,
    Plan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{}", .field.message())]
pub struct ValidationError {
    pub field: Field,
}

impl Field {
    pub fn message(self) -> &'static str {
        match self {
            Field::Phone => "Enter a valid 10 digit Indian number",
            Field::Consent => "Please agree to Terms & Privacy Policy",
            Field::Name => "Enter your full name",
            Field::Email => "Enter your email address",
            Field::Plan => "Select a plan preference",
        }
    }
}

pub fn is_valid_phone(phone: &str) -> bool {
    // `\d` is Unicode-aware in the regex crate; keep the check to ASCII digits
    phone.is_ascii() && INDIA_PHONE.is_match(phone)
}

/// Checks run in a fixed order so the phone and consent messages win over the
/// rest; the first failing field is reported.
pub fn validate(draft: &RegistrationDraft) -> Result<ValidRegistration, ValidationError> {
    if !is_valid_phone(&draft.phone) {
        return Err(ValidationError { field: Field::Phone });
    }
    if !draft.consent {
        return Err(ValidationError { field: Field::Consent });
    }
    if draft.name.is_empty() {
        return Err(ValidationError { field: Field::Name });
    }
    if draft.email.is_empty() {
        return Err(ValidationError { field: Field::Email });
    }
    let plan = draft.plan.ok_or(ValidationError { field: Field::Plan })?;

    Ok(ValidRegistration {
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: draft.phone.clone(),
        plan,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::plan::PlanPreference;

    fn draft(phone: &str, consent: bool) -> RegistrationDraft {
        RegistrationDraft {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: phone.to_string(),
            plan: Some(PlanPreference::Elite),
            consent,
        }
    }

    #[test]
    fn rejects_malformed_phones() {
        for phone in ["12345", "5123456789", "91234567890", "1234567890", "", "98765 43210", "98765432१०"] {
            assert_eq!(
                validate(&draft(phone, true)),
                Err(ValidationError { field: Field::Phone }),
                "{phone:?} should be rejected"
            );
        }
    }

    #[test]
    fn accepts_indian_mobiles() {
        for phone in ["9876543210", "6000000000", "7999999999", "8123456789"] {
            assert!(validate(&draft(phone, true)).is_ok(), "{phone:?} should pass");
        }
    }

    #[test]
    fn consent_required_after_phone() {
        assert_eq!(
            validate(&draft("9876543210", false)),
            Err(ValidationError { field: Field::Consent })
        );
        // phone is checked first
        assert_eq!(
            validate(&draft("123", false)),
            Err(ValidationError { field: Field::Phone })
        );
    }

    #[test]
    fn empty_fields_and_missing_plan() {
        let mut d = draft("9876543210", true);
        d.name.clear();
        assert_eq!(validate(&d).unwrap_err().field, Field::Name);

        let mut d = draft("9876543210", true);
        d.email.clear();
        assert_eq!(validate(&d).unwrap_err().field, Field::Email);

        let mut d = draft("9876543210", true);
        d.plan = None;
        assert_eq!(validate(&d).unwrap_err().field, Field::Plan);
    }

    #[test]
    fn error_message_is_the_toast_text() {
        let err = ValidationError { field: Field::Phone };
        assert_eq!(err.to_string(), "Enter a valid 10 digit Indian number");
    }
}
