use serde::{Deserialize, Serialize};

use super::plan::PlanPreference;

pub const COUNTRY: &str = "India";
pub const STATUS_PRE_REGISTERED: &str = "pre_registered";

/// What the form holds at submit time. Text fields are already trimmed.
/// `plan` is `None` while the placeholder option is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan: Option<PlanPreference>,
    pub consent: bool,
}

/// A draft that passed every check. Only `validate` constructs one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidRegistration {
    pub(super) name: String,
    pub(super) email: String,
    pub(super) phone: String,
    pub(super) plan: PlanPreference,
}

impl ValidRegistration {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plan(&self) -> PlanPreference {
        self.plan
    }

    pub fn to_record(&self) -> RegistrationRecord {
        RegistrationRecord {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            plan_preference: self.plan,
            country: COUNTRY,
            status: STATUS_PRE_REGISTERED,
        }
    }

    pub fn to_cached(&self) -> CachedRegistration {
        CachedRegistration {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            plan_preference: self.plan,
        }
    }
}

/// Document appended to the `registrations` collection. `createdAt` is not a
/// field here: the store stamps it with its own request time.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan_preference: PlanPreference,
    pub country: &'static str,
    pub status: &'static str,
}

impl RegistrationRecord {
    pub const CREATED_AT: &'static str = "createdAt";
}

/// The single local slot remembering the last successful registration.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CachedRegistration {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub plan_preference: PlanPreference,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_registration_json_shape() {
        let cached = CachedRegistration {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            plan_preference: PlanPreference::Elite,
        };
        let value = serde_json::to_value(&cached).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "name": "Rahul Sharma",
                "email": "rahul@example.com",
                "phone": "9876543210",
                "planPreference": "elite",
            })
        );
    }

    #[test]
    fn record_carries_constants() {
        let valid = ValidRegistration {
            name: "Asha".to_string(),
            email: "asha@example.com".to_string(),
            phone: "9123456789".to_string(),
            plan: PlanPreference::Pro,
        };
        let record = valid.to_record();
        assert_eq!(record.country, "India");
        assert_eq!(record.status, "pre_registered");
        assert_eq!(record.plan_preference, PlanPreference::Pro);
    }
}
