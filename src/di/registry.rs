use crate::di::key::{Service, Shared, TypeKey};
use dashmap::DashMap;
use std::sync::Arc;

/// Type-keyed instance store holding at most one value per [`TypeKey`].
///
/// Lookups by an interface key fall back to a capability scan over every
/// stored value. The scan order is unspecified: when several stored types
/// satisfy the same interface, which one is returned is not defined.
pub struct Registry {
    entries: DashMap<TypeKey, Shared>,
}

impl Clone for Registry {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Exact lookup, then capability scan for interface keys.
    ///
    /// Values found for an interface key are re-typed as that interface.
    pub fn get(&self, key: &TypeKey) -> Option<Shared> {
        let stored = self.find(key)?;
        if key.is_interface() {
            key.satisfied_by(&stored)
        } else {
            Some(stored)
        }
    }

    /// Stored value answering `key`, as it was stored.
    ///
    /// For an interface bound with `Injector::mapping` or matched by the
    /// capability scan this is the concrete implementation.
    pub fn find(&self, key: &TypeKey) -> Option<Shared> {
        if let Some(entry) = self.entries.get(key) {
            return Some(Arc::clone(entry.value()));
        }
        if !key.is_interface() {
            return None;
        }

        let found = self
            .entries
            .iter()
            .find(|entry| key.satisfied_by(entry.value()).is_some())
            .map(|entry| Arc::clone(entry.value()));
        if found.is_some() {
            tracing::trace!("Resolved {} through capability scan", key);
        }
        found
    }

    /// Stores `value` under `key`, replacing any previous value.
    pub fn set(&self, key: TypeKey, value: Shared) {
        tracing::trace!("Registering {}", key);
        self.entries.insert(key, value);
    }

    pub fn resolve<S: ?Sized + Service>(&self) -> Option<Arc<S>> {
        self.get(&S::type_key()).and_then(S::from_shared)
    }

    pub fn insert<S: ?Sized + Service>(&self, instance: Arc<S>) {
        self.set(S::type_key(), S::into_shared(instance));
    }

    /// Exact-match presence check; does not run the capability scan.
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    trait Greeter: Send + Sync {
        fn greet(&self) -> String;
    }

    struct English;

    impl Greeter for English {
        fn greet(&self) -> String {
            "hello".to_string()
        }
    }

    impl crate::Injectable for English {
        fn wire(&self, _: &crate::Injector) {}
    }

    crate::interface!(dyn Greeter => [English]);

    #[test]
    fn test_set_and_get() {
        let registry = Registry::new();
        registry.insert(Arc::new(42_i32));
        let value = registry.resolve::<i32>().unwrap();
        assert_eq!(*value, 42);
        assert!(registry.resolve::<u32>().is_none());
    }

    #[test]
    fn test_last_set_wins() {
        let registry = Registry::new();
        registry.insert(Arc::new("first".to_string()));
        registry.insert(Arc::new("second".to_string()));
        assert_eq!(registry.len(), 1);
        assert_eq!(*registry.resolve::<String>().unwrap(), "second");
    }

    #[test]
    fn test_capability_scan_finds_implementation() {
        let registry = Registry::new();
        registry.insert(Arc::new(1_u8));
        registry.insert(Arc::new(English));

        let greeter = registry.resolve::<dyn Greeter>().unwrap();
        assert_eq!(greeter.greet(), "hello");
        // the scan does not create an interface entry
        assert!(!registry.contains(&TypeKey::of::<dyn Greeter>()));

        let stored = registry.find(&TypeKey::of::<dyn Greeter>()).unwrap();
        assert!(stored.downcast::<English>().is_ok());
    }

    #[test]
    fn test_interface_slot_holding_concrete_value() {
        let registry = Registry::new();
        registry.set(TypeKey::of::<dyn Greeter>(), Arc::new(English));
        assert_eq!(registry.resolve::<dyn Greeter>().unwrap().greet(), "hello");
        assert!(registry.resolve::<English>().is_none());
    }

    #[test]
    fn test_concrete_key_never_scans() {
        let registry = Registry::new();
        registry.insert(Arc::new(English));
        assert!(registry.get(&TypeKey::of::<u8>()).is_none());
    }

    #[test]
    fn test_interface_entry_preferred_over_scan() {
        struct Loud;
        impl Greeter for Loud {
            fn greet(&self) -> String {
                "HELLO".to_string()
            }
        }

        let registry = Registry::new();
        registry.insert(Arc::new(English));
        let bound: Arc<dyn Greeter> = Arc::new(Loud);
        registry.insert::<dyn Greeter>(bound);

        assert_eq!(registry.resolve::<dyn Greeter>().unwrap().greet(), "HELLO");
    }

    #[test]
    fn test_clone_is_independent() {
        let registry = Registry::new();
        registry.insert(Arc::new(1_u32));
        let copy = registry.clone();
        copy.insert(Arc::new(2_u32));
        assert_eq!(*registry.resolve::<u32>().unwrap(), 1);
        assert_eq!(*copy.resolve::<u32>().unwrap(), 2);
    }
}
