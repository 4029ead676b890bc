use crate::di::{Configuration, Implements, Injectable, Injector, Service};
use std::sync::Arc;

/// Builder for wiring an injector in one expression
///
/// Each step runs immediately, in call order, against the injector being built.
///
/// # Example
/// ```
/// use autowire::{Injectable, Injector};
/// use std::sync::Arc;
///
/// #[derive(Default, Injectable)]
/// struct Metrics;
///
/// let injector = Injector::builder()
///     .set("orders".to_string())
///     .apply(Arc::new(Metrics))
///     .build();
///
/// assert_eq!(*injector.get::<String>().unwrap(), "orders");
/// assert!(injector.get::<Metrics>().is_some());
/// ```
pub struct InjectorBuilder {
    injector: Injector,
}

impl InjectorBuilder {
    pub fn new() -> Self {
        Self {
            injector: Injector::new(),
        }
    }

    /// Register a value under its own type
    pub fn set<T: Service>(self, value: T) -> Self {
        self.injector.set(value);
        self
    }

    /// Register an existing shared instance
    pub fn set_shared<S: ?Sized + Service>(self, instance: Arc<S>) -> Self {
        self.injector.set_shared(instance);
        self
    }

    /// Wire a root object and register it
    pub fn apply<T: Injectable>(self, obj: Arc<T>) -> Self {
        self.injector.apply(&obj);
        self
    }

    /// Bind an interface to an implementation
    ///
    /// # Panics
    /// Panics if `I` is not an interface type listing `T`.
    pub fn mapping<I, T>(self, instance: Arc<T>) -> Self
    where
        I: ?Sized + Service,
        T: Implements<I>,
    {
        self.injector.mapping::<I, T>(instance);
        self
    }

    /// Apply a config object and register its providers' values
    pub fn configs<C: Configuration>(self, config: Arc<C>) -> Self {
        self.injector.configs(&config);
        self
    }

    /// Build the injector
    pub fn build(self) -> Injector {
        self.injector
    }
}

impl Default for InjectorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
