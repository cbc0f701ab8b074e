//! Error types for the singleton service and its registry.

use thiserror::Error;

/// Dependency injection errors
///
/// Represents the conditions that can occur while resolving a service
/// from a [`ServiceProvider`](crate::ServiceProvider).
///
/// # Examples
///
/// ```rust
/// use singleton_di::{DiError, ServiceCollection, Resolver};
///
/// let provider = ServiceCollection::new().build();
/// match provider.get::<String>() {
///     Err(DiError::NotFound(type_name)) => {
///         assert_eq!(type_name, "alloc::string::String");
///     }
///     _ => unreachable!(),
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DiError {
    /// Service not registered
    #[error("Service not found: {0}")]
    NotFound(&'static str),
    /// Type downcast failed
    #[error("Type mismatch for: {0}")]
    TypeMismatch(&'static str),
}

/// Result type for DI operations
///
/// A convenience alias for `Result<T, DiError>` used by the registry.
pub type DiResult<T> = Result<T, DiError>;

/// The asynchronous initialization of the singleton did not complete.
///
/// Construction is all-or-nothing: when this error is returned no instance
/// exists, so nothing can have been registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InitializationError {
    /// The simulated external dependency refused the connection.
    #[error("upstream unavailable: {0}")]
    UpstreamUnavailable(String),
}

/// Failures surfaced by the composition root.
///
/// Both variants are fatal: the root reports them and performs no work.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ServiceError {
    /// The singleton factory failed.
    #[error("singleton initialization failed: {0}")]
    Initialization(#[from] InitializationError),
    /// The registry yielded no instance for the capability.
    #[error("no service registered for {0}")]
    Resolution(&'static str),
}

/// Invalid configuration input.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid value {value:?} for {name}")]
    InvalidValue {
        /// Variable name
        name: &'static str,
        /// Raw value as found
        value: String,
    },
    /// The JSON document could not be parsed.
    #[cfg(feature = "config")]
    #[error("invalid config document: {0}")]
    Json(#[from] serde_json::Error),
}
