use crate::di::configuration::Configuration;
use crate::di::inject::Inject;
use crate::di::injectable::Injectable;
use crate::di::invoke::{FromRegistry, Invocable};
use crate::di::key::{Implements, Service, Shared, TypeKey};
use crate::di::registry::Registry;
use crate::di::InjectorBuilder;
use crate::error::Result;
use std::sync::Arc;

/// Recursive field injector over a [`Registry`].
///
/// Every object the injector touches becomes the singleton for its concrete
/// type: the last `set` or `apply` of a type wins. Wiring is meant to happen
/// during start-up; there is no cycle detection, so a struct graph that
/// requires itself recurses without bound.
#[derive(Clone, Default)]
pub struct Injector {
    registry: Registry,
}

impl Injector {
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
        }
    }

    pub fn builder() -> InjectorBuilder {
        InjectorBuilder::new()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Registered value for `S`, by exact type or (for `dyn Trait`) capability.
    pub fn get<S: ?Sized + Service>(&self) -> Option<Arc<S>> {
        self.registry.resolve::<S>()
    }

    /// Like [`Injector::get`], calling `fallback` with the requested key when
    /// nothing is registered. The fallback may itself produce nothing.
    pub fn get_or_else<S, F>(&self, fallback: F) -> Option<Arc<S>>
    where
        S: ?Sized + Service,
        F: FnOnce(TypeKey) -> Option<Arc<S>>,
    {
        self.get::<S>().or_else(|| fallback(S::type_key()))
    }

    /// Untyped lookup by descriptor.
    pub fn get_by_key(&self, key: &TypeKey) -> Option<Shared> {
        self.registry.get(key)
    }

    /// Registers `value` under its own type.
    ///
    /// An existing `Arc` must go through [`Injector::set_shared`]; passed here
    /// it would be registered as the type `Arc<T>`.
    pub fn set<T: Service>(&self, value: T) {
        self.registry.insert(Arc::new(value));
    }

    pub fn set_shared<S: ?Sized + Service>(&self, instance: Arc<S>) {
        self.registry.insert(instance);
    }

    /// Registers each element of a tuple under its own type.
    pub fn set_all<V: Values>(&self, values: V) {
        values.register(&self.registry);
    }

    /// Wires `obj`'s `#[inject]` fields, recursively, then registers `obj`.
    ///
    /// Every marked field is resolved again on each call. Concrete
    /// dependencies missing from the registry are created with `Default`.
    /// Whatever a field resolves to is applied in turn. Interface dependencies
    /// with no match are left as they are and may be filled by a later `apply`.
    pub fn apply<T: Injectable>(&self, obj: &Arc<T>) {
        tracing::debug!("Applying injection: {}", std::any::type_name::<T>());
        obj.wire(self);
        self.registry.insert(Arc::clone(obj));
    }

    /// Fills a concrete `#[inject]` field. Called by derived [`Injectable`] impls.
    #[doc(hidden)]
    pub fn autowire<T>(&self, slot: &Inject<T>)
    where
        T: Injectable + Default,
    {
        let resolved = self.get_or_else::<T, _>(|key| {
            tracing::debug!("Instantiating: {}", key);
            Some(Arc::new(T::default()))
        });
        if let Some(instance) = resolved {
            self.apply(&instance);
            slot.set(instance);
        }
    }

    /// Fills an interface `#[inject]` field. Called by derived [`Injectable`] impls.
    ///
    /// The implementation found is applied through its concrete type first.
    #[doc(hidden)]
    pub fn autowire_interface<I>(&self, slot: &Inject<I>)
    where
        I: ?Sized + Service,
    {
        let key = TypeKey::of::<I>();
        let Some(stored) = self.registry.find(&key) else {
            tracing::debug!("No implementation registered for {}, leaving field empty", key);
            return;
        };
        key.wire(&stored, self);
        if let Some(instance) = key.satisfied_by(&stored).and_then(I::from_shared) {
            slot.set(instance);
        }
    }

    /// Applies `config`, then registers the value of each of its providers.
    pub fn configs<C: Configuration>(&self, config: &Arc<C>) {
        self.apply(config);
        tracing::debug!("Running providers of {}", std::any::type_name::<C>());
        config.provide(self);
    }

    /// Binds the interface `I` to `instance`.
    ///
    /// `instance` is applied (which registers it under its concrete type) and
    /// then stored in the separate slot for `I`.
    ///
    /// # Panics
    ///
    /// Panics if `I` is not an interface type declared with `interface!`, or if
    /// `T` is not one of the implementations listed for it.
    ///
    /// A type that does not implement the interface is rejected at compile time:
    ///
    /// ```compile_fail
    /// use autowire::{interface, Injectable, Injector};
    /// use std::sync::Arc;
    ///
    /// pub trait Catalog: Send + Sync {}
    ///
    /// #[derive(Default, Injectable)]
    /// pub struct Shelf;
    /// impl Catalog for Shelf {}
    ///
    /// #[derive(Default, Injectable)]
    /// pub struct Clock;
    ///
    /// interface!(dyn Catalog => [Shelf]);
    ///
    /// Injector::new().mapping::<dyn Catalog, _>(Arc::new(Clock));
    /// ```
    pub fn mapping<I, T>(&self, instance: Arc<T>)
    where
        I: ?Sized + Service,
        T: Implements<I>,
    {
        let key = TypeKey::of::<I>();
        if !key.is_interface() {
            panic!("Mapping key must be an interface type, got {}", key);
        }
        let bound: Shared = Arc::<T>::clone(&instance);
        if key.satisfied_by(&bound).is_none() {
            panic!(
                "{} is not declared as an implementation of {}",
                std::any::type_name::<T>(),
                key
            );
        }
        tracing::debug!("Mapping {} => {}", key, std::any::type_name::<T>());
        self.apply(&instance);
        self.registry.set(key, bound);
    }

    /// Calls `f` with every parameter resolved from the registry.
    pub fn invoke<Args, F>(&self, f: F) -> Result<F::Output>
    where
        Args: FromRegistry,
        F: Invocable<Args>,
    {
        self.registry.invoke::<Args, F>(f)
    }
}

/// Tuples of values registered together by [`Injector::set_all`].
pub trait Values {
    fn register(self, registry: &Registry);
}

macro_rules! define_values {
    ($($T:ident),+) => {
        impl<$($T: Service),+> Values for ($($T,)+) {
            #[allow(non_snake_case)]
            fn register(self, registry: &Registry) {
                let ($($T,)+) = self;
                $(
                registry.insert(Arc::new($T));
                )+
            }
        }
    };
}

define_values! { T1 }
define_values! { T1, T2 }
define_values! { T1, T2, T3 }
define_values! { T1, T2, T3, T4 }
define_values! { T1, T2, T3, T4, T5 }
define_values! { T1, T2, T3, T4, T5, T6 }
define_values! { T1, T2, T3, T4, T5, T6, T7 }
define_values! { T1, T2, T3, T4, T5, T6, T7, T8 }
