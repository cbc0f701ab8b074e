//! Service provider module for dependency injection.
//!
//! This module contains the ServiceProvider type which hands out shared
//! references to the instances bound in a [`ServiceCollection`](crate::ServiceCollection).

use std::sync::Arc;

use crate::{DiError, DiResult, Key};
use crate::observer::Observers;
use crate::registration::{AnyArc, Registry};
use crate::traits::{Resolver, ResolverCore};

/// Service provider for resolving dependencies from the registry.
///
/// The provider owns the single strong reference the registry holds to each
/// bound instance; every resolution clones that `Arc`. Cloning the provider
/// itself is cheap and shares the same registry.
///
/// # Thread Safety
///
/// The registry is frozen at build time, so lookups take no locks and the
/// provider can be shared freely across tasks and threads.
///
/// # Examples
///
/// ```
/// use singleton_di::{ServiceCollection, Resolver};
/// use std::sync::Arc;
///
/// struct Database { url: String }
///
/// let mut collection = ServiceCollection::new();
/// collection.add_singleton(Database { url: "postgres://localhost".to_string() });
///
/// let provider = collection.build();
/// let a = provider.get_required::<Database>();
/// let b = provider.clone().get_required::<Database>();
/// assert!(Arc::ptr_eq(&a, &b));
/// ```
#[derive(Clone)]
pub struct ServiceProvider {
    inner: Arc<ProviderInner>,
}

pub(crate) struct ProviderInner {
    registry: Registry,
    observers: Observers,
}

impl ServiceProvider {
    pub(crate) fn new(registry: Registry, observers: Observers) -> Self {
        Self {
            inner: Arc::new(ProviderInner { registry, observers }),
        }
    }

    /// Returns true if an instance is bound for `key`.
    pub fn contains(&self, key: &Key) -> bool {
        self.inner.registry.contains_key(key)
    }

    fn lookup(&self, key: &Key) -> DiResult<AnyArc> {
        self.inner
            .registry
            .get(key)
            .cloned()
            .ok_or(DiError::NotFound(key.display_name()))
    }

    fn resolve_any_impl(&self, key: &Key) -> DiResult<AnyArc> {
        let observers = &self.inner.observers;
        if !observers.has_observers() {
            return self.lookup(key);
        }

        let start = std::time::Instant::now();
        observers.resolving(key);
        let result = self.lookup(key);
        match &result {
            Ok(_) => observers.resolved(key, start.elapsed()),
            Err(_) => observers.not_found(key),
        }
        result
    }
}

impl ResolverCore for ServiceProvider {
    fn resolve_any(&self, key: &Key) -> DiResult<AnyArc> {
        self.resolve_any_impl(key)
    }
}

impl Resolver for ServiceProvider {}

impl std::fmt::Debug for ServiceProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceProvider")
            .field("services", &self.inner.registry.len())
            .field("observed", &self.inner.observers.has_observers())
            .finish()
    }
}
