use crate::di::Injector;

/// Trait for structs whose `#[inject]` fields the injector can wire
///
/// This trait is typically implemented automatically via the `#[derive(Injectable)]` macro.
///
/// # Example
/// ```
/// use autowire::{Inject, Injectable, Injector, interface};
/// use std::sync::Arc;
///
/// pub trait UserRepository: Send + Sync {}
///
/// #[derive(Default, Injectable)]
/// pub struct SqlUserRepository;
///
/// impl UserRepository for SqlUserRepository {}
///
/// interface!(dyn UserRepository => [SqlUserRepository]);
///
/// #[derive(Default, Injectable)]
/// pub struct UserService {
///     // resolved from the registry, or left empty until one is bound
///     #[inject]
///     repository: Inject<dyn UserRepository>,
///     // resolved from the registry, or created with `Default`
///     #[inject]
///     audit: Inject<AuditLog>,
/// }
///
/// #[derive(Default, Injectable)]
/// pub struct AuditLog;
///
/// let injector = Injector::new();
/// injector.mapping::<dyn UserRepository, _>(Arc::new(SqlUserRepository));
/// let service = Arc::new(UserService::default());
/// injector.apply(&service);
/// assert!(service.repository.is_wired());
/// assert!(injector.get::<AuditLog>().is_some());
/// ```
pub trait Injectable: Send + Sync + 'static {
    /// Resolve every `#[inject]` field through `injector` and point it at the result.
    fn wire(&self, injector: &Injector);
}
