//! # Autowire
//!
//! A small runtime dependency-injection container for Rust.
//!
//! The container keeps at most one instance per type. Structs deriving
//! [`Injectable`] get their `#[inject]` fields filled from it, with missing
//! concrete dependencies created on demand, so a whole object graph is wired
//! from its root.
//!
//! ## Features
//!
//! - **Singleton registry**: one value per type, the last registration wins
//! - **Field autowiring**: `#[inject]` fields of type [`Inject<T>`] or `Inject<dyn Trait>`
//! - **Interfaces**: [`interface!`] declares which types satisfy a trait, so
//!   `dyn Trait` lookups find a registered implementation
//! - **Bindings**: [`Injector::mapping`] pins an interface to a chosen instance
//! - **Config objects**: `#[configuration]` impl blocks whose `#[provide]`
//!   methods feed the registry
//! - **Invocation**: [`Injector::invoke`] calls a function with its arguments
//!   resolved from the registry
//!
//! ## Quick Start
//!
//! ```rust
//! use autowire::{interface, Inject, Injectable, Injector};
//! use std::sync::Arc;
//!
//! pub trait OrderItems: Send + Sync {
//!     fn order_num(&self) -> String;
//! }
//!
//! #[derive(Default, Injectable)]
//! pub struct OrderItemSvc {
//!     pub order_num: String,
//! }
//!
//! impl OrderItems for OrderItemSvc {
//!     fn order_num(&self) -> String {
//!         self.order_num.clone()
//!     }
//! }
//!
//! interface!(dyn OrderItems => [OrderItemSvc]);
//!
//! #[derive(Default, Injectable)]
//! pub struct UserSvc;
//!
//! #[derive(Default, Injectable)]
//! pub struct OrderSvc {
//!     #[inject]
//!     users: Inject<UserSvc>,
//!     #[inject]
//!     items: Inject<dyn OrderItems>,
//! }
//!
//! let injector = Injector::new();
//! injector.set(OrderItemSvc { order_num: "X".to_string() });
//!
//! let orders = Arc::new(OrderSvc::default());
//! injector.apply(&orders);
//!
//! assert_eq!(orders.items.load().order_num(), "X");
//! assert!(injector.get::<UserSvc>().is_some());
//!
//! let num = injector
//!     .invoke(|items: Arc<dyn OrderItems>| items.order_num())
//!     .unwrap();
//! assert_eq!(num, "X");
//! ```

// Lets the derive output (`::autowire::...`) resolve inside this crate's own tests.
extern crate self as autowire;

pub mod di;
pub mod error;

// Re-export core types
pub use di::{
    CapabilityFn, Configuration, FromRegistry, Implements, Inject, Injectable, Injector,
    InjectorBuilder, Invocable, Registry, Service, Shared, TypeKey, TypeKind, Values, WireFn,
};
pub use error::{AutowireError, Result};

// Re-export macros
pub use autowire_macro::{Injectable, configuration, interface};

/// Prelude module for convenient imports
///
/// ```
/// use autowire::prelude::*;
/// ```
pub mod prelude {
    pub use crate::di::{Configuration, Inject, Injector, InjectorBuilder, TypeKey};
    pub use crate::error::{AutowireError, Result};
    pub use crate::{Injectable, configuration, interface};
    pub use std::sync::Arc;
}
