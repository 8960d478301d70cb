use std::cell::Cell;

use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

use super::model::{CachedRegistration, RegistrationDraft, RegistrationRecord, ValidRegistration};
use super::plan::PlanPreference;
use super::validate::{validate, ValidationError};
use crate::services::storage::{KeyValueStore, RegistrationCache};

/// Append-only document sink for registrations.
pub trait RegistrationStore {
    async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError>;
}

/// Best-effort analytics. Implementations swallow their own failures.
pub trait Telemetry {
    fn event(&self, name: &str, params: &EventParams);
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("request failed: {0}")]
    Transport(String),
    #[error("store rejected the write ({status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("could not encode record: {0}")]
    Encode(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a registration is already being submitted")]
    InFlight,
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("could not store registration: {0}")]
    Submission(#[from] StoreError),
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct EventParams {
    pub category: &'static str,
    pub label: String,
    pub value: u32,
}

pub const REGISTRATION_SUCCESS: &str = "registration_success";
pub const PLAN_INTEREST_SELECTED: &str = "plan_interest_selected";

pub fn success_events(plan: PlanPreference) -> [(&'static str, EventParams); 2] {
    [
        (
            REGISTRATION_SUCCESS,
            EventParams {
                category: "registration",
                label: "pre_register".to_string(),
                value: 1,
            },
        ),
        (
            PLAN_INTEREST_SELECTED,
            EventParams {
                category: "registration",
                label: plan.as_str().to_string(),
                value: 1,
            },
        ),
    ]
}

/// Runs a pre-registration: validate, append remotely, then record the
/// success locally. At most one submission runs at a time.
pub struct Registrar<S, T, K> {
    store: S,
    telemetry: T,
    cache: RegistrationCache<K>,
    in_flight: Cell<bool>,
}

struct FlightGuard<'a>(&'a Cell<bool>);

impl<'a> FlightGuard<'a> {
    fn enter(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        FlightGuard(flag)
    }
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S, T, K> Registrar<S, T, K>
where
    S: RegistrationStore,
    T: Telemetry,
    K: KeyValueStore,
{
    pub fn new(store: S, telemetry: T, cache: RegistrationCache<K>) -> Self {
        Self {
            store,
            telemetry,
            cache,
            in_flight: Cell::new(false),
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }

    pub fn returning_user(&self) -> Option<CachedRegistration> {
        self.cache.load()
    }

    pub async fn submit(&self, draft: &RegistrationDraft) -> Result<CachedRegistration, SubmitError> {
        if self.in_flight.get() {
            return Err(SubmitError::InFlight);
        }
        let valid = validate(draft)?;
        let _guard = FlightGuard::enter(&self.in_flight);
        self.commit(&valid).await
    }

    // Nothing below the remote write runs unless it succeeded.
    async fn commit(&self, valid: &ValidRegistration) -> Result<CachedRegistration, SubmitError> {
        let record = valid.to_record();
        if let Err(e) = self.store.append(&record).await {
            error!("Registration write failed: {}", e);
            return Err(e.into());
        }
        info!("Pre-registered with plan {}", valid.plan());

        for (name, params) in success_events(valid.plan()) {
            self.telemetry.event(name, &params);
        }

        let cached = valid.to_cached();
        // The remote record exists even if this fails; the page will offer the
        // form again on the next load.
        if let Err(e) = self.cache.save(&cached) {
            warn!("Registration stored but not cached locally: {}", e);
        }
        Ok(cached)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use super::super::validate::Field;
    use crate::config;
    use crate::services::storage::MemoryStore;
    use futures::channel::oneshot;
    use futures::executor::block_on;
    use std::cell::RefCell;
    use std::future::Future;
    use std::rc::Rc;
    use std::task::{Context, Poll};

    #[derive(Clone, Default)]
    struct FakeStore {
        writes: Rc<RefCell<Vec<RegistrationRecord>>>,
        fail: bool,
    }

    impl RegistrationStore for FakeStore {
        async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError> {
            self.writes.borrow_mut().push(record.clone());
            if self.fail {
                return Err(StoreError::Transport("offline".to_string()));
            }
            Ok(())
        }
    }

    /// Holds the write open until the test releases it.
    struct GatedStore {
        gate: RefCell<Option<oneshot::Receiver<()>>>,
        writes: Rc<RefCell<Vec<RegistrationRecord>>>,
    }

    impl RegistrationStore for GatedStore {
        async fn append(&self, record: &RegistrationRecord) -> Result<(), StoreError> {
            let gate = self.gate.borrow_mut().take();
            if let Some(gate) = gate {
                let _ = gate.await;
            }
            self.writes.borrow_mut().push(record.clone());
            Ok(())
        }
    }

    #[derive(Clone, Default)]
    struct Events(Rc<RefCell<Vec<(String, EventParams)>>>);

    impl Telemetry for Events {
        fn event(&self, name: &str, params: &EventParams) {
            self.0.borrow_mut().push((name.to_string(), params.clone()));
        }
    }

    struct Harness {
        store: FakeStore,
        events: Events,
        kv: MemoryStore,
        registrar: Registrar<FakeStore, Events, MemoryStore>,
    }

    fn harness(fail: bool) -> Harness {
        let store = FakeStore { fail, ..Default::default() };
        let events = Events::default();
        let kv = MemoryStore::default();
        let registrar = Registrar::new(store.clone(), events.clone(), RegistrationCache::new(kv.clone()));
        Harness { store, events, kv, registrar }
    }

    fn rahul() -> RegistrationDraft {
        RegistrationDraft {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            plan: Some(PlanPreference::Elite),
            consent: true,
        }
    }

    #[test]
    fn successful_registration_end_to_end() {
        let h = harness(false);
        let cached = block_on(h.registrar.submit(&rahul())).unwrap();

        let writes = h.store.writes.borrow();
        assert_eq!(writes.len(), 1);
        assert_eq!(writes[0].country, "India");
        assert_eq!(writes[0].status, "pre_registered");
        assert_eq!(writes[0].plan_preference, PlanPreference::Elite);

        let events = h.events.0.borrow();
        let names: Vec<&str> = events.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["registration_success", "plan_interest_selected"]);
        assert_eq!(events[0].1.label, "pre_register");
        assert_eq!(events[1].1.label, "elite");

        assert_eq!(
            serde_json::from_str::<serde_json::Value>(&h.kv.raw(config::REGISTRATION_KEY).unwrap()).unwrap(),
            serde_json::json!({
                "name": "Rahul Sharma",
                "email": "rahul@example.com",
                "phone": "9876543210",
                "planPreference": "elite",
            })
        );
        assert_eq!(h.registrar.returning_user(), Some(cached));
        assert!(!h.registrar.is_submitting());
    }

    #[test]
    fn invalid_phone_touches_nothing() {
        let h = harness(false);
        for phone in ["1234567890", "12345", "5123456789", "91234567890"] {
            let mut draft = rahul();
            draft.phone = phone.to_string();
            let err = block_on(h.registrar.submit(&draft)).unwrap_err();
            assert!(matches!(err, SubmitError::Invalid(ValidationError { field: Field::Phone })));
        }
        assert!(h.store.writes.borrow().is_empty());
        assert!(h.events.0.borrow().is_empty());
        assert_eq!(h.kv.raw(config::REGISTRATION_KEY), None);
    }

    #[test]
    fn missing_consent_never_reaches_the_store() {
        let h = harness(false);
        let mut draft = rahul();
        draft.consent = false;
        assert!(matches!(block_on(h.registrar.submit(&draft)), Err(SubmitError::Invalid(_))));
        assert!(h.store.writes.borrow().is_empty());
    }

    #[test]
    fn remote_failure_leaves_cache_alone() {
        let h = harness(true);
        let previous = r#"{"name":"Old","email":"old@example.com","phone":"9000000000","planPreference":"free"}"#;
        h.kv.set(config::REGISTRATION_KEY, previous).unwrap();

        let err = block_on(h.registrar.submit(&rahul())).unwrap_err();
        assert!(matches!(err, SubmitError::Submission(StoreError::Transport(_))));
        assert_eq!(h.store.writes.borrow().len(), 1);
        assert!(h.events.0.borrow().is_empty());
        assert_eq!(h.kv.raw(config::REGISTRATION_KEY).as_deref(), Some(previous));
        assert!(!h.registrar.is_submitting());
    }

    #[test]
    fn cache_write_failure_still_succeeds() {
        let h = harness(false);
        h.kv.set_read_only(true);
        assert!(block_on(h.registrar.submit(&rahul())).is_ok());
        assert_eq!(h.store.writes.borrow().len(), 1);
        assert_eq!(h.events.0.borrow().len(), 2);
        assert_eq!(h.registrar.returning_user(), None);
    }

    #[test]
    fn second_submit_while_pending_is_rejected() {
        let (release, gate) = oneshot::channel();
        let writes = Rc::new(RefCell::new(Vec::new()));
        let kv = MemoryStore::default();
        let registrar = Registrar::new(
            GatedStore { gate: RefCell::new(Some(gate)), writes: writes.clone() },
            Events::default(),
            RegistrationCache::new(kv.clone()),
        );

        let draft = rahul();
        let mut first = Box::pin(registrar.submit(&draft));
        let waker = futures::task::noop_waker();
        let mut cx = Context::from_waker(&waker);
        assert!(matches!(first.as_mut().poll(&mut cx), Poll::Pending));
        assert!(registrar.is_submitting());

        let second = block_on(registrar.submit(&draft));
        assert_eq!(second, Err(SubmitError::InFlight));

        release.send(()).unwrap();
        assert!(block_on(first).is_ok());
        assert_eq!(writes.borrow().len(), 1);
        assert!(!registrar.is_submitting());
        assert!(kv.raw(config::REGISTRATION_KEY).is_some());
    }

    #[test]
    fn plan_event_uses_form_identifier() {
        let [_, (name, params)] = success_events(PlanPreference::ProPlus);
        assert_eq!(name, "plan_interest_selected");
        assert_eq!(params.label, "pro_plus");
        assert_eq!(params.category, "registration");
    }
}
