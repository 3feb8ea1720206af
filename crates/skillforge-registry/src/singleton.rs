//! Once-only registry of skill declaration instances
//!
//! Each concrete declaration type registers exactly one instance for the
//! process lifetime. The embedding application owns the registry and keeps
//! it alive for the whole run; there is no unregister operation and the
//! map only ever grows. Callers must not parallelize registration: the
//! registry is written for the sequential startup phase and carries no
//! internal locking.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use skillforge_types::{Result, SkillError};

struct Entry {
    type_name: &'static str,
    instance: Arc<dyn Any + Send + Sync>,
}

/// Registered declaration instances, keyed by concrete type
#[derive(Default)]
pub struct SkillRegistry {
    entries: HashMap<TypeId, Entry>,
}

impl SkillRegistry {
    /// Create an empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim the singleton slot for `D` and store its instance.
    ///
    /// This runs before any other side effect of a registration, so a
    /// violation never leaves partially-applied state behind. A second
    /// call for the same `D` fails with
    /// [`SkillError::AlreadyRegistered`] and leaves the original entry
    /// untouched.
    pub fn register<D>(&mut self, instance: Arc<D>) -> Result<()>
    where
        D: Any + Send + Sync,
    {
        let type_name = std::any::type_name::<D>();
        if self.entries.contains_key(&TypeId::of::<D>()) {
            return Err(SkillError::AlreadyRegistered { type_name });
        }

        self.entries.insert(
            TypeId::of::<D>(),
            Entry {
                type_name,
                instance,
            },
        );
        debug!(type_name, "Claimed singleton slot");
        Ok(())
    }

    /// The registered instance for `D`
    pub fn instance<D>(&self) -> Result<Arc<D>>
    where
        D: Any + Send + Sync,
    {
        let not_registered = || SkillError::NotRegistered {
            type_name: std::any::type_name::<D>(),
        };
        let entry = self
            .entries
            .get(&TypeId::of::<D>())
            .ok_or_else(not_registered)?;
        Arc::clone(&entry.instance)
            .downcast::<D>()
            .map_err(|_| not_registered())
    }

    /// Whether `D` has already registered
    #[must_use]
    pub fn contains<D: Any>(&self) -> bool {
        self.entries.contains_key(&TypeId::of::<D>())
    }

    /// Names of every registered declaration type
    pub fn type_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|e| e.type_name)
    }

    /// Number of registered declaration types
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has registered yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Alpha;
    struct Beta;

    #[test]
    fn test_register_and_instance() {
        let mut registry = SkillRegistry::new();
        assert!(registry.is_empty());

        let alpha = Arc::new(Alpha);
        registry.register(Arc::clone(&alpha)).unwrap();
        assert_eq!(registry.len(), 1);
        assert!(registry.contains::<Alpha>());
        assert!(!registry.contains::<Beta>());

        let looked_up = registry.instance::<Alpha>().unwrap();
        assert!(Arc::ptr_eq(&alpha, &looked_up));
    }

    #[test]
    fn test_double_registration_fails_and_preserves_original() {
        let mut registry = SkillRegistry::new();
        let first = Arc::new(Alpha);
        registry.register(Arc::clone(&first)).unwrap();

        let second = Arc::new(Alpha);
        let err = registry.register(second).unwrap_err();
        assert!(matches!(err, SkillError::AlreadyRegistered { .. }));

        // the original entry is untouched
        assert_eq!(registry.len(), 1);
        let looked_up = registry.instance::<Alpha>().unwrap();
        assert!(Arc::ptr_eq(&first, &looked_up));
    }

    #[test]
    fn test_instance_of_unregistered_type() {
        let registry = SkillRegistry::new();
        assert!(matches!(
            registry.instance::<Alpha>(),
            Err(SkillError::NotRegistered { .. })
        ));
    }

    #[test]
    fn test_distinct_types_coexist() {
        let mut registry = SkillRegistry::new();
        registry.register(Arc::new(Alpha)).unwrap();
        registry.register(Arc::new(Beta)).unwrap();
        assert_eq!(registry.len(), 2);
    }
}
