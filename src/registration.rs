//! Service registration storage.

use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;
use crate::key::Key;

// Type-erased Arc for storage
pub(crate) type AnyArc = Arc<dyn Any + Send + Sync>;

/// Service registry holding pre-built instances.
///
/// Only already-constructed values are bound here, so resolution never
/// runs user code and always hands out a clone of the same `Arc`.
pub(crate) struct Registry {
    /// Fast Vec lookup for first N registrations (cache-friendly)
    one_small: Vec<(Key, AnyArc)>,
    /// HashMap fallback for remaining registrations
    one_large: HashMap<Key, AnyArc>,
    /// Threshold for Vec vs HashMap
    small_threshold: usize,
}

impl Registry {
    pub(crate) fn new() -> Self {
        Self {
            one_small: Vec::new(),
            one_large: HashMap::new(),
            small_threshold: 16,
        }
    }

    /// Inserts an instance, replacing any previous binding for the key.
    pub(crate) fn insert(&mut self, key: Key, instance: AnyArc) {
        if let Some(pos) = self.one_small.iter().position(|(k, _)| k == &key) {
            self.one_small[pos] = (key, instance);
        } else if self.one_small.len() < self.small_threshold {
            self.one_small.push((key, instance));
        } else {
            self.one_large.insert(key, instance);
        }
    }

    #[inline(always)]
    pub(crate) fn get(&self, key: &Key) -> Option<&AnyArc> {
        for (k, instance) in &self.one_small {
            if k == key {
                return Some(instance);
            }
        }

        self.one_large.get(key)
    }

    #[inline(always)]
    pub(crate) fn contains_key(&self, key: &Key) -> bool {
        self.get(key).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.one_small.len() + self.one_large.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::key_of_type;
    use std::any::TypeId;

    #[test]
    fn insert_replaces_existing_binding() {
        let mut registry = Registry::new();
        registry.insert(key_of_type::<u32>(), Arc::new(1u32));
        registry.insert(key_of_type::<u32>(), Arc::new(2u32));

        assert_eq!(registry.len(), 1);
        let value = registry.get(&key_of_type::<u32>()).unwrap().clone();
        assert_eq!(*value.downcast::<u32>().unwrap(), 2);
    }

    #[test]
    fn spills_into_map_past_threshold() {
        let mut registry = Registry::new();
        registry.small_threshold = 2;

        registry.insert(key_of_type::<u8>(), Arc::new(1u8));
        registry.insert(key_of_type::<u16>(), Arc::new(2u16));
        registry.insert(key_of_type::<u32>(), Arc::new(3u32));

        assert_eq!(registry.one_small.len(), 2);
        assert_eq!(registry.one_large.len(), 1);
        assert!(registry.contains_key(&Key::Type(TypeId::of::<u32>(), "u32")));
        assert!(!registry.contains_key(&key_of_type::<u64>()));
    }
}
