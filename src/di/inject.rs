use crate::error::{AutowireError, Result};
use arc_swap::ArcSwapOption;
use std::fmt;
use std::sync::Arc;

/// A field slot filled by the injector.
///
/// Mark the field with `#[inject]` inside a `#[derive(Injectable)]` struct.
/// `Inject<T>` asks for the singleton of a concrete type (created on demand),
/// `Inject<dyn Trait>` for whatever satisfies the interface.
///
/// The slot starts empty. Every `apply` of the owning object resolves it
/// again, so it follows the registry when a dependency is re-registered. A
/// slot the injector could not fill stays empty; the failure surfaces on
/// first use.
pub struct Inject<T: ?Sized + 'static> {
    // `ArcSwapOption` needs a thin pointer, hence the extra `Arc` for `dyn Trait`.
    current: ArcSwapOption<Arc<T>>,
}

impl<T: ?Sized + 'static> Inject<T> {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::empty(),
        }
    }

    /// Current instance, if the slot has been wired.
    pub fn get(&self) -> Option<Arc<T>> {
        self.current.load_full().map(|wrapper| Arc::clone(&*wrapper))
    }

    pub fn try_get(&self) -> Result<Arc<T>> {
        self.get()
            .ok_or_else(|| AutowireError::not_injected(std::any::type_name::<T>()))
    }

    /// Current instance.
    ///
    /// # Panics
    ///
    /// Panics if the slot was never wired. Use [`Inject::get`] or
    /// [`Inject::try_get`] where an unwired slot is expected.
    pub fn load(&self) -> Arc<T> {
        match self.get() {
            Some(instance) => instance,
            None => panic!(
                "Dependency '{}' was used before it was injected",
                std::any::type_name::<T>()
            ),
        }
    }

    pub fn is_wired(&self) -> bool {
        self.current.load().is_some()
    }

    /// Points the slot at `instance`, replacing any previous value.
    pub(crate) fn set(&self, instance: Arc<T>) {
        self.current.store(Some(Arc::new(instance)));
    }
}

impl<T: ?Sized + 'static> Default for Inject<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + 'static> From<Arc<T>> for Inject<T> {
    fn from(instance: Arc<T>) -> Self {
        let slot = Self::new();
        slot.set(instance);
        slot
    }
}

impl<T: ?Sized + 'static> Clone for Inject<T> {
    fn clone(&self) -> Self {
        match self.get() {
            Some(instance) => Self::from(instance),
            None => Self::new(),
        }
    }
}

impl<T: ?Sized + 'static> fmt::Debug for Inject<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Inject")
            .field("type", &std::any::type_name::<T>())
            .field("wired", &self.is_wired())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_is_replaceable() {
        let slot: Inject<String> = Inject::new();
        assert!(!slot.is_wired());
        slot.set(Arc::new("first".to_string()));
        assert_eq!(slot.load().as_str(), "first");
        slot.set(Arc::new("second".to_string()));
        assert_eq!(slot.load().as_str(), "second");
    }

    #[test]
    fn test_try_get_reports_type() {
        let slot: Inject<u64> = Inject::default();
        let err = slot.try_get().unwrap_err();
        assert_eq!(err, AutowireError::not_injected("u64"));
    }

    #[test]
    #[should_panic(expected = "was used before it was injected")]
    fn test_load_empty_slot_panics() {
        let slot: Inject<u64> = Inject::default();
        let _ = *slot.load() + 1;
    }

    #[test]
    fn test_trait_object_slot() {
        let slot: Inject<dyn fmt::Display + Send + Sync> = Inject::new();
        slot.set(Arc::new(7_u8));
        assert_eq!(slot.load().to_string(), "7");
    }

    #[test]
    fn test_clone_shares_instance() {
        let slot = Inject::from(Arc::new(5_u32));
        let copy = slot.clone();
        assert!(Arc::ptr_eq(&slot.get().unwrap(), &copy.get().unwrap()));
    }
}
