use proc_macro::TokenStream;

mod configuration;
mod injectable;
mod interface;

/// Derive macro implementing `autowire::Injectable`
///
/// Fields marked `#[inject]` are filled by the injector. A marked field must be
/// declared as `Inject<T>` (a concrete type, created on demand when missing) or
/// `Inject<dyn Trait>` (an interface, left empty when nothing satisfies it).
/// Any other marked field type is rejected at compile time.
///
/// # Example
/// ```ignore
/// use autowire::{Inject, Injectable};
///
/// #[derive(Default, Injectable)]
/// pub struct OrderSvc {
///     #[inject]
///     users: Inject<UserSvc>,
///     #[inject]
///     items: Inject<dyn OrderItems>,
///     // left alone
///     label: String,
/// }
/// ```
#[proc_macro_derive(Injectable, attributes(inject))]
pub fn derive_injectable(input: TokenStream) -> TokenStream {
    injectable::derive_injectable(input)
}

/// Declares a trait object type as an interface and lists the types satisfying it
///
/// The trait needs `Send + Sync` supertraits. Every listed type must implement it
/// and `Injectable`; an implementation reached through the interface is applied
/// through its concrete type.
///
/// # Example
/// ```ignore
/// use autowire::interface;
///
/// pub trait OrderItems: Send + Sync {
///     fn order_num(&self) -> String;
/// }
///
/// interface!(dyn OrderItems => [OrderItemSvc, MockOrderItems]);
/// ```
#[proc_macro]
pub fn interface(input: TokenStream) -> TokenStream {
    interface::interface_macro(input)
}

/// Attribute macro turning an impl block into a config object
///
/// Methods marked `#[provide]` become providers. Each must take only `&self` and
/// return exactly one value of a concrete type. A provider returning `Arc<T>`
/// registers under `T`; any other value is wrapped in an `Arc`. `Arc<dyn Trait>`
/// is rejected: `dyn Trait` lookups find the concrete value by capability.
///
/// # Example
/// ```ignore
/// #[configuration]
/// impl AppConfig {
///     #[provide]
///     fn users(&self) -> Arc<UserSvc> {
///         Arc::new(UserSvc::default())
///     }
/// }
/// ```
#[proc_macro_attribute]
pub fn configuration(attr: TokenStream, item: TokenStream) -> TokenStream {
    configuration::configuration_attribute(attr, item)
}
