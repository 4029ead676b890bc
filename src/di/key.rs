use crate::di::injectable::Injectable;
use crate::di::injector::Injector;
use std::any::{Any, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Type-erased value as held by the registry.
pub type Shared = Arc<dyn Any + Send + Sync>;

/// Re-types a stored value as an interface when its concrete type satisfies it.
///
/// The returned value is laid out the way the interface stores itself
/// (an `Arc<Arc<dyn Trait>>` behind [`Shared`]). A value already in that form
/// is returned as is.
pub type CapabilityFn = fn(&Shared) -> Option<Shared>;

/// Applies the injector to a stored value through its concrete type.
pub type WireFn = fn(&Shared, &Injector);

/// Whether a [`TypeKey`] names a concrete type or a capability (trait object) type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeKind {
    Concrete,
    Interface,
}

/// Identity of a declared type, used as the registry key.
///
/// Two keys are equal iff they denote the same type. Interface keys also carry
/// the capability check used for fallback lookup.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
    capability: Option<CapabilityFn>,
    wiring: Option<WireFn>,
}

impl TypeKey {
    /// Key of any registrable type, concrete or `dyn Trait`.
    pub fn of<S: ?Sized + Service>() -> Self {
        S::type_key()
    }

    /// Key taken from a prototype value.
    pub fn of_val<S: Service>(_prototype: &S) -> Self {
        S::type_key()
    }

    pub fn concrete<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
            capability: None,
            wiring: None,
        }
    }

    /// Interface key for `I` (normally `dyn Trait`), checking stored values with
    /// `capability` and wiring the implementations it finds with `wiring`.
    ///
    /// Usually generated by `interface!` rather than called directly.
    pub fn interface<I: ?Sized + 'static>(capability: CapabilityFn, wiring: WireFn) -> Self {
        Self {
            id: TypeId::of::<I>(),
            name: std::any::type_name::<I>(),
            capability: Some(capability),
            wiring: Some(wiring),
        }
    }

    pub fn type_id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn kind(&self) -> TypeKind {
        if self.capability.is_some() {
            TypeKind::Interface
        } else {
            TypeKind::Concrete
        }
    }

    pub fn is_interface(&self) -> bool {
        self.kind() == TypeKind::Interface
    }

    /// Re-types `value` as this interface if its concrete type satisfies it.
    /// Always `None` for concrete keys.
    pub fn satisfied_by(&self, value: &Shared) -> Option<Shared> {
        self.capability.and_then(|check| check(value))
    }

    /// Applies `injector` to `value` when it is one of this interface's
    /// declared implementations. Values stored already re-typed are left alone.
    pub fn wire(&self, value: &Shared, injector: &Injector) {
        if let Some(wiring) = self.wiring {
            wiring(value, injector);
        }
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeKey")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

/// A type the registry can hold.
///
/// Every sized `Send + Sync + 'static` type is a concrete service. Trait objects
/// become interface services through the `interface!` macro, which requires the
/// trait to have `Send + Sync` supertraits.
pub trait Service: Send + Sync + 'static {
    fn type_key() -> TypeKey;

    /// Erases an instance into its stored form.
    fn into_shared(this: Arc<Self>) -> Shared;

    /// Recovers an instance from its stored form.
    fn from_shared(shared: Shared) -> Option<Arc<Self>>;
}

impl<T: Send + Sync + 'static> Service for T {
    fn type_key() -> TypeKey {
        TypeKey::concrete::<T>()
    }

    fn into_shared(this: Arc<Self>) -> Shared {
        this
    }

    fn from_shared(shared: Shared) -> Option<Arc<Self>> {
        shared.downcast::<T>().ok()
    }
}

/// Marks `Self` as a declared implementation of the capability type `I`.
///
/// Generated by `interface!` for every listed implementation.
pub trait Implements<I: ?Sized + Service>: Injectable {}
