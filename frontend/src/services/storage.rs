use log::{debug, warn};
use thiserror::Error;
use web_sys::window;

use crate::config;
use crate::registration::model::CachedRegistration;

#[derive(Debug, Error)]
pub enum CacheError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("local storage rejected the write")]
    Rejected,
    #[error("could not serialize cache entry: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Browser-scoped string key/value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> Result<(), CacheError>;
}

/// `window.localStorage`. Every call looks the storage up again; private
/// browsing modes can make it disappear.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let storage = Self::storage().ok_or(CacheError::Unavailable)?;
        storage.set_item(key, value).map_err(|_| CacheError::Rejected)
    }
}

/// The `fyt_registration` slot.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RegistrationCache<K> {
    kv: K,
}

impl<K: KeyValueStore> RegistrationCache<K> {
    pub fn new(kv: K) -> Self {
        Self { kv }
    }

    /// Anything that does not deserialize counts as "not registered".
    pub fn load(&self) -> Option<CachedRegistration> {
        let raw = self.kv.get(config::REGISTRATION_KEY)?;
        match serde_json::from_str(&raw) {
            Ok(cached) => Some(cached),
            Err(e) => {
                warn!("Ignoring malformed cached registration: {}", e);
                None
            }
        }
    }

    pub fn save(&self, cached: &CachedRegistration) -> Result<(), CacheError> {
        let raw = serde_json::to_string(cached)?;
        self.kv.set(config::REGISTRATION_KEY, &raw)?;
        debug!("Cached registration for {}", cached.email);
        Ok(())
    }
}

#[cfg(test)]
pub use memory::MemoryStore;

#[cfg(test)]
mod memory {
    use super::{CacheError, KeyValueStore};
    use std::cell::{Cell, RefCell};
    use std::collections::HashMap;
    use std::rc::Rc;

    /// In-memory stand-in for localStorage. Clones share the same map.
    #[derive(Clone, Default)]
    pub struct MemoryStore {
        items: Rc<RefCell<HashMap<String, String>>>,
        read_only: Rc<Cell<bool>>,
    }

    impl MemoryStore {
        pub fn with(key: &str, value: &str) -> Self {
            let store = Self::default();
            store.items.borrow_mut().insert(key.to_string(), value.to_string());
            store
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.items.borrow().get(key).cloned()
        }

        pub fn set_read_only(&self, read_only: bool) {
            self.read_only.set(read_only);
        }
    }

    impl KeyValueStore for MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.raw(key)
        }

        fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
            if self.read_only.get() {
                return Err(CacheError::Rejected);
            }
            self.items.borrow_mut().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registration::plan::PlanPreference;

    fn rahul() -> CachedRegistration {
        CachedRegistration {
            name: "Rahul Sharma".to_string(),
            email: "rahul@example.com".to_string(),
            phone: "9876543210".to_string(),
            plan_preference: PlanPreference::Elite,
        }
    }

    #[test]
    fn empty_slot_loads_nothing() {
        let cache = RegistrationCache::new(MemoryStore::default());
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn saved_entry_reads_back_with_catalog_lookup() {
        let store = MemoryStore::default();
        let cache = RegistrationCache::new(store.clone());
        let mut entry = rahul();
        entry.plan_preference = PlanPreference::ProPlus;
        cache.save(&entry).unwrap();

        let loaded = cache.load().unwrap();
        assert_eq!(loaded, entry);
        assert_eq!(loaded.plan_preference.label(), "Pro+");
        assert_eq!(loaded.plan_preference.color(), "text-orange-400");
    }

    #[test]
    fn save_overwrites_previous_entry() {
        let store = MemoryStore::default();
        let cache = RegistrationCache::new(store.clone());
        cache.save(&rahul()).unwrap();
        let mut second = rahul();
        second.name = "Priya Nair".to_string();
        second.plan_preference = PlanPreference::Free;
        cache.save(&second).unwrap();
        assert_eq!(cache.load(), Some(second));
    }

    #[test]
    fn malformed_entries_fail_closed() {
        for raw in ["not json", "{}", r#"{"name":"x","email":"y","phone":"z","planPreference":"gold"}"#] {
            let cache = RegistrationCache::new(MemoryStore::with(config::REGISTRATION_KEY, raw));
            assert_eq!(cache.load(), None, "{raw}");
        }
    }

    #[test]
    fn write_failure_is_reported() {
        let store = MemoryStore::default();
        store.set_read_only(true);
        let cache = RegistrationCache::new(store.clone());
        assert!(matches!(cache.save(&rahul()), Err(CacheError::Rejected)));
        assert_eq!(store.raw(config::REGISTRATION_KEY), None);
    }
}
