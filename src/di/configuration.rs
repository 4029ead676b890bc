use crate::di::{Injectable, Injector};

/// A config object whose providers feed the registry.
///
/// Implemented by `#[configuration]` on an impl block: every method marked
/// `#[provide]` takes `&self`, returns exactly one value, and that value is
/// registered under its own type. Methods without the marker are never called.
///
/// ```
/// use autowire::{configuration, Injectable, Injector};
/// use std::sync::Arc;
///
/// pub struct Database {
///     pub url: String,
/// }
///
/// #[derive(Default, Injectable)]
/// pub struct AppConfig;
///
/// #[configuration]
/// impl AppConfig {
///     #[provide]
///     fn database(&self) -> Arc<Database> {
///         Arc::new(Database { url: "sqlite::memory:".to_string() })
///     }
///
///     #[provide]
///     fn retries(&self) -> u32 {
///         3
///     }
/// }
///
/// let injector = Injector::new();
/// injector.configs(&Arc::new(AppConfig));
/// assert_eq!(injector.get::<Database>().unwrap().url, "sqlite::memory:");
/// assert_eq!(*injector.get::<u32>().unwrap(), 3);
/// ```
pub trait Configuration: Injectable {
    /// Run every provider, registering what each one returns.
    fn provide(&self, injector: &Injector);
}
