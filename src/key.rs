//! Service key types for the registry.

use std::any::TypeId;

/// Key for service storage and lookup.
///
/// A key names either a concrete type or a capability trait. Both carry the
/// `std::any::type_name` string so errors and diagnostics stay readable.
///
/// # Examples
///
/// ```rust
/// use singleton_di::{Key, key_of_type, key_of_trait};
///
/// trait Capability: Send + Sync {}
///
/// assert_eq!(key_of_type::<u32>().display_name(), "u32");
/// assert!(key_of_trait::<dyn Capability>().display_name().contains("Capability"));
/// assert_ne!(key_of_type::<u32>(), key_of_type::<u64>());
/// ```
#[derive(Debug, Clone)]
pub enum Key {
    /// Concrete type key with TypeId and name for diagnostics
    Type(TypeId, &'static str),
    /// Capability trait key
    ///
    /// Trait objects are keyed by name since `dyn Trait` bindings are stored
    /// behind an extra `Arc` layer. `type_name` is not guaranteed unique; two
    /// traits sharing a name collide and resolve to `DiError::TypeMismatch`.
    Trait(&'static str),
}

impl Key {
    /// Get the type or trait name for display
    pub fn display_name(&self) -> &'static str {
        match self {
            Key::Type(_, name) => name,
            Key::Trait(name) => name,
        }
    }
}

// TypeId-only comparison for concrete types
impl PartialEq for Key {
    #[inline(always)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Key::Type(a, _), Key::Type(b, _)) => a == b,
            (Key::Trait(a), Key::Trait(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Key {}

impl std::hash::Hash for Key {
    #[inline(always)]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        match self {
            Key::Type(id, _) => {
                0u8.hash(state);
                id.hash(state);
            }
            Key::Trait(name) => {
                1u8.hash(state);
                name.hash(state);
            }
        }
    }
}

/// Key for a concrete type binding.
#[inline(always)]
pub fn key_of_type<T: 'static>() -> Key {
    Key::Type(TypeId::of::<T>(), std::any::type_name::<T>())
}

/// Key for a capability trait binding.
#[inline(always)]
pub fn key_of_trait<T: ?Sized + 'static>() -> Key {
    Key::Trait(std::any::type_name::<T>())
}
