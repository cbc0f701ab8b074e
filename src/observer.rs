//! Diagnostic observers for registry resolution events.
//!
//! Observers are notified synchronously on every lookup, which makes them a
//! cheap way to trace which capability each consumer resolved.

use std::sync::Arc;
use std::time::Duration;
use crate::Key;

/// Observer trait for dependency injection resolution events.
///
/// # Examples
///
/// ```
/// use singleton_di::{DiObserver, Key, ServiceCollection};
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::time::Duration;
///
/// #[derive(Default)]
/// struct CountingObserver {
///     hits: AtomicUsize,
/// }
///
/// impl DiObserver for CountingObserver {
///     fn resolving(&self, _key: &Key) {}
///     fn resolved(&self, _key: &Key, _duration: Duration) {
///         self.hits.fetch_add(1, Ordering::Relaxed);
///     }
/// }
///
/// let mut services = ServiceCollection::new();
/// services.add_observer(Arc::new(CountingObserver::default()));
/// let provider = services.build();
/// ```
pub trait DiObserver: Send + Sync {
    /// Called before the registry lookup.
    fn resolving(&self, key: &Key);

    /// Called after a successful lookup.
    fn resolved(&self, key: &Key, duration: Duration);

    /// Called when nothing is bound for the key.
    fn not_found(&self, key: &Key) {
        let _ = key;
    }
}

/// Collection of observers attached to a provider.
#[derive(Clone, Default)]
pub(crate) struct Observers {
    observers: Vec<Arc<dyn DiObserver>>,
}

impl Observers {
    pub(crate) fn new() -> Self {
        Self {
            observers: Vec::new(),
        }
    }

    pub(crate) fn add(&mut self, observer: Arc<dyn DiObserver>) {
        self.observers.push(observer);
    }

    #[inline]
    pub(crate) fn has_observers(&self) -> bool {
        !self.observers.is_empty()
    }

    #[inline]
    pub(crate) fn resolving(&self, key: &Key) {
        for observer in &self.observers {
            observer.resolving(key);
        }
    }

    #[inline]
    pub(crate) fn resolved(&self, key: &Key, duration: Duration) {
        for observer in &self.observers {
            observer.resolved(key, duration);
        }
    }

    #[inline]
    pub(crate) fn not_found(&self, key: &Key) {
        for observer in &self.observers {
            observer.not_found(key);
        }
    }
}

/// Built-in observer that forwards events to `tracing` at debug level.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    prefix: String,
}

impl TracingObserver {
    /// Creates a new tracing observer with default prefix.
    pub fn new() -> Self {
        Self {
            prefix: "[singleton-di]".to_string(),
        }
    }

    /// Creates a new tracing observer with a custom prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }
}

impl Default for TracingObserver {
    fn default() -> Self {
        Self::new()
    }
}

impl DiObserver for TracingObserver {
    fn resolving(&self, key: &Key) {
        tracing::debug!(service = key.display_name(), "{} Resolving", self.prefix);
    }

    fn resolved(&self, key: &Key, duration: Duration) {
        tracing::debug!(
            service = key.display_name(),
            ?duration,
            "{} Resolved",
            self.prefix
        );
    }

    fn not_found(&self, key: &Key) {
        tracing::warn!(service = key.display_name(), "{} Not registered", self.prefix);
    }
}
