//! Service collection module for dependency injection.
//!
//! This module contains the ServiceCollection type used to bind
//! already-constructed instances before building a service provider.

use std::sync::Arc;

use crate::{DiObserver, Key, ServiceProvider};
use crate::key::{key_of_trait, key_of_type};
use crate::observer::Observers;
use crate::registration::{AnyArc, Registry};

/// Builder for a [`ServiceProvider`].
///
/// Every registration binds an existing value, never a constructor, so each
/// resolution of a key yields the identical instance.
pub struct ServiceCollection {
    registry: Registry,
    observers: Observers,
}

impl ServiceCollection {
    /// Creates a new empty service collection.
    pub fn new() -> Self {
        Self {
            registry: Registry::new(),
            observers: Observers::new(),
        }
    }

    // ----- Concrete Type Registrations -----

    /// Registers a singleton value under its concrete type.
    ///
    /// The value is wrapped in an `Arc` immediately. Registering the same
    /// type again replaces the earlier binding.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use singleton_di::{ServiceCollection, Resolver};
    /// struct Config {
    ///     database_url: String
    /// }
    ///
    /// let mut services = ServiceCollection::new();
    /// services.add_singleton(Config {
    ///     database_url: "postgres://localhost".to_string()
    /// });
    /// let provider = services.build();
    /// assert_eq!(provider.get_required::<Config>().database_url, "postgres://localhost");
    /// ```
    pub fn add_singleton<T: 'static + Send + Sync>(&mut self, value: T) -> &mut Self {
        self.add_singleton_arc(Arc::new(value))
    }

    /// Registers an already shared singleton under its concrete type.
    pub fn add_singleton_arc<T: 'static + Send + Sync>(&mut self, value: Arc<T>) -> &mut Self {
        let key = key_of_type::<T>();
        tracing::debug!(service = key.display_name(), "Binding singleton instance");
        self.registry.insert(key, value as AnyArc);
        self
    }

    // ----- Trait Registrations -----

    /// Registers an existing instance under capability trait `T`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use singleton_di::{ServiceCollection, Resolver};
    /// # use std::sync::Arc;
    /// trait Clock: Send + Sync {
    ///     fn now(&self) -> u64;
    /// }
    ///
    /// struct Fixed;
    /// impl Clock for Fixed {
    ///     fn now(&self) -> u64 { 7 }
    /// }
    ///
    /// let mut services = ServiceCollection::new();
    /// services.add_singleton_trait::<dyn Clock>(Arc::new(Fixed));
    /// let provider = services.build();
    /// assert_eq!(provider.get_required_trait::<dyn Clock>().now(), 7);
    /// ```
    pub fn add_singleton_trait<T>(&mut self, value: Arc<T>) -> &mut Self
    where
        T: ?Sized + 'static + Send + Sync,
    {
        let key = key_of_trait::<T>();
        tracing::debug!(service = key.display_name(), "Binding singleton trait instance");
        // Stored as Arc<Arc<dyn Trait>> in Any
        let any_arc: AnyArc = Arc::new(value);
        self.registry.insert(key, any_arc);
        self
    }

    /// Registers the instance under trait `T` only if nothing is bound yet.
    ///
    /// Returns `true` when the instance was registered.
    pub fn try_add_singleton_trait<T>(&mut self, value: Arc<T>) -> bool
    where
        T: ?Sized + 'static + Send + Sync,
    {
        if self.contains_trait::<T>() {
            return false;
        }
        self.add_singleton_trait(value);
        true
    }

    /// Returns true if capability trait `T` has a binding.
    pub fn contains_trait<T: ?Sized + 'static>(&self) -> bool {
        self.registry.contains_key(&key_of_trait::<T>())
    }

    /// Returns true if an entry exists for `key`.
    pub fn contains(&self, key: &Key) -> bool {
        self.registry.contains_key(key)
    }

    /// Number of bound services.
    pub fn len(&self) -> usize {
        self.registry.len()
    }

    /// Returns true if nothing has been registered.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // ----- Observer Management -----

    /// Adds a diagnostic observer for resolution events.
    ///
    /// Observer calls are made synchronously during resolution.
    pub fn add_observer(&mut self, observer: Arc<dyn DiObserver>) -> &mut Self {
        self.observers.add(observer);
        self
    }

    /// Freezes the registrations into a provider.
    ///
    /// The registry is never mutated after this point.
    pub fn build(self) -> ServiceProvider {
        tracing::debug!(services = self.registry.len(), "Building service provider");
        ServiceProvider::new(self.registry, self.observers)
    }
}

impl Default for ServiceCollection {
    fn default() -> Self {
        Self::new()
    }
}
