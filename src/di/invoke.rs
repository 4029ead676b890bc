//! Calling functions with arguments resolved from the registry

use crate::di::key::Service;
use crate::di::registry::Registry;
use crate::error::{AutowireError, Result};
use std::sync::Arc;

/// A parameter type the invoker can resolve.
///
/// `Arc<T>` resolves the registered `T`; `Arc<dyn Trait>` resolves a bound or
/// capability-matching implementation. Nothing is instantiated on demand.
pub trait FromRegistry: Sized {
    fn from_registry(registry: &Registry) -> Result<Self>;
}

impl<S: ?Sized + Service> FromRegistry for Arc<S> {
    fn from_registry(registry: &Registry) -> Result<Self> {
        registry.resolve::<S>().ok_or_else(|| {
            let key = S::type_key();
            tracing::debug!("Invoke argument unresolved: {}", key);
            AutowireError::unresolved(key.name())
        })
    }
}

impl FromRegistry for () {
    #[inline]
    fn from_registry(_: &Registry) -> Result<Self> {
        Ok(())
    }
}

macro_rules! define_from_registry_tuple {
    ($($T:ident),+) => {
        impl<$($T: FromRegistry),+> FromRegistry for ($($T,)+) {
            #[inline]
            fn from_registry(registry: &Registry) -> Result<Self> {
                Ok((
                    $(
                    $T::from_registry(registry)?,
                    )+
                ))
            }
        }
    };
}

define_from_registry_tuple! { T1 }
define_from_registry_tuple! { T1, T2 }
define_from_registry_tuple! { T1, T2, T3 }
define_from_registry_tuple! { T1, T2, T3, T4 }
define_from_registry_tuple! { T1, T2, T3, T4, T5 }
define_from_registry_tuple! { T1, T2, T3, T4, T5, T6 }
define_from_registry_tuple! { T1, T2, T3, T4, T5, T6, T7 }
define_from_registry_tuple! { T1, T2, T3, T4, T5, T6, T7, T8 }

/// A function whose parameters are all [`FromRegistry`].
///
/// Implemented for closures and fn items of up to eight parameters. Several
/// results are returned the usual way, as a tuple.
pub trait Invocable<Args> {
    type Output;

    fn call(self, args: Args) -> Self::Output;
}

macro_rules! define_invocable ({ $($T:ident)* } => {
    impl<F, R, $($T,)*> Invocable<($($T,)*)> for F
    where
        F: FnOnce($($T),*) -> R,
    {
        type Output = R;

        #[inline]
        #[allow(non_snake_case)]
        fn call(self, ($($T,)*): ($($T,)*)) -> Self::Output {
            (self)($($T),*)
        }
    }
});

define_invocable! {}
define_invocable! { T1 }
define_invocable! { T1 T2 }
define_invocable! { T1 T2 T3 }
define_invocable! { T1 T2 T3 T4 }
define_invocable! { T1 T2 T3 T4 T5 }
define_invocable! { T1 T2 T3 T4 T5 T6 }
define_invocable! { T1 T2 T3 T4 T5 T6 T7 }
define_invocable! { T1 T2 T3 T4 T5 T6 T7 T8 }

impl Registry {
    /// Resolves every parameter of `f`, then calls it.
    ///
    /// Resolution is all-or-nothing: if any parameter has no satisfying entry,
    /// `f` is not called and the error names the first missing type.
    pub fn invoke<Args, F>(&self, f: F) -> Result<F::Output>
    where
        Args: FromRegistry,
        F: Invocable<Args>,
    {
        let args = Args::from_registry(self)?;
        Ok(f.call(args))
    }
}
