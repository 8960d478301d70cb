use std::rc::Rc;

use yew::functional::Reducible;

use super::model::{CachedRegistration, RegistrationDraft};
use super::pipeline::SubmitError;
use super::plan::PlanPreference;
use super::validate::Field;

/// Raw values of the form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Value of the plan `<select>`; empty while the placeholder is selected.
    pub plan: String,
    pub agree: bool,
}

impl FormFields {
    pub fn to_draft(&self) -> RegistrationDraft {
        RegistrationDraft {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: self.phone.trim().to_string(),
            plan: self.plan.parse().ok(),
            consent: self.agree,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Warning,
}

impl ToastKind {
    pub fn icon(self) -> &'static str {
        match self {
            ToastKind::Success => "✅",
            ToastKind::Error => "❌",
            ToastKind::Warning => "⚠️",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub message: String,
}

/// Contents of the "thank you" modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub name: String,
    pub plan: PlanPreference,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationState {
    pub form: FormFields,
    pub submitting: bool,
    pub toast: Option<Toast>,
    pub returning: Option<CachedRegistration>,
    pub confirmation: Option<Confirmation>,
    next_toast: u32,
}

pub enum RegistrationAction {
    SetName(String),
    SetEmail(String),
    SetPhone(String),
    SetPlan(String),
    SetAgree(bool),
    /// Cached registration found at page load.
    Restore(Option<CachedRegistration>),
    SubmitStarted,
    SubmitFinished(Result<CachedRegistration, SubmitError>),
    DismissToast(u32),
    DismissConfirmation,
}

pub const SUBMISSION_FAILED: &str = "Something went wrong. Try again.";

impl RegistrationState {
    pub fn is_registered(&self) -> bool {
        self.returning.is_some()
    }

    fn with_toast(mut self, kind: ToastKind, message: impl Into<String>) -> Self {
        self.next_toast = self.next_toast.wrapping_add(1);
        self.toast = Some(Toast {
            id: self.next_toast,
            kind,
            message: message.into(),
        });
        self
    }
}

impl Reducible for RegistrationState {
    type Action = RegistrationAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            RegistrationAction::SetName(v) => next.form.name = v,
            RegistrationAction::SetEmail(v) => next.form.email = v,
            RegistrationAction::SetPhone(v) => next.form.phone = v,
            RegistrationAction::SetPlan(v) => next.form.plan = v,
            RegistrationAction::SetAgree(v) => next.form.agree = v,
            RegistrationAction::Restore(cached) => next.returning = cached,
            RegistrationAction::SubmitStarted => next.submitting = true,
            RegistrationAction::SubmitFinished(result) => match result {
                // another submission is still pending and owns the flag
                Err(SubmitError::InFlight) => {}
                Err(SubmitError::Invalid(e)) => {
                    next.submitting = false;
                    let kind = match e.field {
                        Field::Consent => ToastKind::Warning,
                        _ => ToastKind::Error,
                    };
                    next = next.with_toast(kind, e.to_string());
                }
                Err(SubmitError::Submission(_)) => {
                    next.submitting = false;
                    next = next.with_toast(ToastKind::Warning, SUBMISSION_FAILED);
                }
                Ok(cached) => {
                    next.submitting = false;
                    next.confirmation = Some(Confirmation {
                        name: cached.name.clone(),
                        plan: cached.plan_preference,
                    });
                    let welcome = format!("Welcome {}! Registration Successful.", cached.name);
                    next.returning = Some(cached);
                    next.form = FormFields::default();
                    next = next.with_toast(ToastKind::Success, welcome);
                }
            },
            RegistrationAction::DismissToast(id) => {
                if next.toast.as_ref().map_or(false, |t| t.id == id) {
                    next.toast = None;
                }
            }
            RegistrationAction::DismissConfirmation => next.confirmation = None,
        }
        Rc::new(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::pipeline::StoreError;
    use crate::registration::validate::ValidationError;

    fn reduce(state: RegistrationState, actions: Vec<RegistrationAction>) -> RegistrationState {
        let mut rc = Rc::new(state);
        for action in actions {
            rc = rc.reduce(action);
        }
        (*rc).clone()
    }

    fn filled() -> RegistrationState {
        reduce(
            RegistrationState::default(),
            vec![
                RegistrationAction::SetName("  Rahul Sharma ".to_string()),
                RegistrationAction::SetEmail("rahul@example.com".to_string()),
                RegistrationAction::SetPhone("9876543210".to_string()),
                RegistrationAction::SetPlan("elite".to_string()),
                RegistrationAction::SetAgree(true),
            ],
        )
    }

    fn rahul() -> CachedRegistration {
        CachedRegistration {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            plan_preference: PlanPreference::Elite,
        }
    }

    #[test]
    fn draft_trims_and_parses_plan() {
        let draft = filled().form.to_draft();
        assert_eq!(draft.name, "Rahul Sharma");
        assert_eq!(draft.plan, Some(PlanPreference::Elite));
        assert!(draft.consent);

        let placeholder = FormFields::default().to_draft();
        assert_eq!(placeholder.plan, None);
    }

    #[test]
    fn success_clears_form_and_shows_confirmation() {
        let state = reduce(
            filled(),
            vec![
                RegistrationAction::SubmitStarted,
                RegistrationAction::SubmitFinished(Ok(rahul())),
            ],
        );
        assert_eq!(state.form, FormFields::default());
        assert!(!state.submitting);
        assert!(state.is_registered());
        assert_eq!(state.returning, Some(rahul()));

        let confirmation = state.confirmation.unwrap();
        assert_eq!(confirmation.plan.label(), "Elite");
        assert_eq!(confirmation.plan.motivation(), "Elite circle. Only discipline survives here.");

        let toast = state.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Success);
        assert_eq!(toast.message, "Welcome Rahul Sharma! Registration Successful.");
    }

    #[test]
    fn validation_failure_keeps_form() {
        let before = filled();
        let state = reduce(
            before.clone(),
            vec![
                RegistrationAction::SubmitStarted,
                RegistrationAction::SubmitFinished(Err(ValidationError { field: Field::Phone }.into())),
            ],
        );
        assert_eq!(state.form, before.form);
        assert!(state.returning.is_none());
        assert!(state.confirmation.is_none());
        assert_eq!(state.toast.unwrap().message, "Enter a valid 10 digit Indian number");
    }

    #[test]
    fn remote_failure_keeps_form_and_shows_generic_message() {
        let before = filled();
        let state = reduce(
            before.clone(),
            vec![
                RegistrationAction::SubmitStarted,
                RegistrationAction::SubmitFinished(Err(StoreError::Transport("offline".to_string()).into())),
            ],
        );
        assert_eq!(state.form, before.form);
        assert!(!state.submitting);
        assert!(state.confirmation.is_none());
        let toast = state.toast.unwrap();
        assert_eq!(toast.kind, ToastKind::Warning);
        assert_eq!(toast.message, SUBMISSION_FAILED);
    }

    #[test]
    fn rejected_duplicate_leaves_submitting_flag() {
        let state = reduce(
            filled(),
            vec![
                RegistrationAction::SubmitStarted,
                RegistrationAction::SubmitStarted,
                RegistrationAction::SubmitFinished(Err(SubmitError::InFlight)),
            ],
        );
        assert!(state.submitting);
        assert!(state.toast.is_none());
    }

    #[test]
    fn stale_toast_timeout_does_not_hide_newer_toast() {
        let state = reduce(
            filled(),
            vec![
                RegistrationAction::SubmitFinished(Err(ValidationError { field: Field::Consent }.into())),
                RegistrationAction::SubmitFinished(Err(ValidationError { field: Field::Phone }.into())),
            ],
        );
        let newest = state.toast.clone().unwrap();
        let state = reduce(state, vec![RegistrationAction::DismissToast(newest.id - 1)]);
        assert_eq!(state.toast, Some(newest.clone()));
        let state = reduce(state, vec![RegistrationAction::DismissToast(newest.id)]);
        assert_eq!(state.toast, None);
    }

    #[test]
    fn restore_and_dismiss() {
        let state = reduce(
            RegistrationState::default(),
            vec![RegistrationAction::Restore(Some(rahul()))],
        );
        assert!(state.is_registered());
        assert!(state.confirmation.is_none());

        let state = reduce(
            filled(),
            vec![
                RegistrationAction::SubmitFinished(Ok(rahul())),
                RegistrationAction::DismissConfirmation,
            ],
        );
        assert!(state.confirmation.is_none());
        assert!(state.is_registered());
    }
}
