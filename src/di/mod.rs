mod builder;
mod configuration;
mod inject;
mod injectable;
mod injector;
mod invoke;
mod key;
mod registry;

pub use builder::InjectorBuilder;
pub use configuration::Configuration;
pub use inject::Inject;
pub use injectable::Injectable;
pub use injector::{Injector, Values};
pub use invoke::{FromRegistry, Invocable};
pub use key::{CapabilityFn, Implements, Service, Shared, TypeKey, TypeKind, WireFn};
pub use registry::Registry;
