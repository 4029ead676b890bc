use thiserror::Error;

pub type Result<T> = std::result::Result<T, AutowireError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AutowireError {
    /// No registered value satisfies a requested type.
    #[error("Value not found for type {type_name}")]
    Unresolved { type_name: &'static str },

    /// An `Inject<T>` slot was read before the injector filled it.
    #[error("Dependency was never injected: {type_name}")]
    NotInjected { type_name: &'static str },
}

impl AutowireError {
    pub fn unresolved(type_name: &'static str) -> Self {
        Self::Unresolved { type_name }
    }

    pub fn not_injected(type_name: &'static str) -> Self {
        Self::NotInjected { type_name }
    }

    /// Name of the type the failure is about.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Unresolved { type_name } | Self::NotInjected { type_name } => type_name,
        }
    }
}
