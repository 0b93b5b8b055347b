//! Registry for named cache instances

use std::collections::HashMap;
use std::sync::Arc;

use super::Cache;
use crate::error::{CacheError, Result};

/// Registry mapping unique string keys to cache instances.
///
/// Registration order is tracked explicitly so "first registered" is a
/// committed guarantee rather than an accident of map iteration. The registry
/// holds instances for lookup only; it does not manage backend lifecycles.
pub struct CacheRegistry {
    instances: HashMap<String, Arc<dyn Cache>>,
    order: Vec<String>,
}

impl CacheRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            instances: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Register an instance, replacing any previous one under the same key.
    ///
    /// A replaced key keeps its original position in registration order.
    pub fn register(&mut self, key: impl Into<String>, instance: Arc<dyn Cache>) -> Result<()> {
        let key = key.into();
        validate_key(&key)?;
        if self.instances.insert(key.clone(), instance).is_none() {
            self.order.push(key);
        }
        Ok(())
    }

    /// Remove the instance under `key`; returns whether one was removed.
    ///
    /// An absent key is a no-op, not an error.
    pub fn unregister(&mut self, key: &str) -> Result<bool> {
        validate_key(key)?;
        let removed = self.instances.remove(key).is_some();
        if removed {
            self.order.retain(|registered| registered != key);
        }
        Ok(removed)
    }

    /// Whether an instance is registered under `key`
    pub fn contains(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        Ok(self.instances.contains_key(key))
    }

    /// Get the instance registered under `key`
    pub fn get(&self, key: &str) -> Result<Arc<dyn Cache>> {
        validate_key(key)?;
        self.instances
            .get(key)
            .cloned()
            .ok_or_else(|| CacheError::NotRegistered {
                key: key.to_string(),
            })
    }

    /// The earliest-registered instance still present, if any
    pub fn first(&self) -> Option<Arc<dyn Cache>> {
        self.order
            .first()
            .and_then(|key| self.instances.get(key))
            .cloned()
    }

    /// Registered keys in registration order
    pub fn keys(&self) -> Vec<String> {
        self.order.clone()
    }

    /// Number of registered instances
    pub fn len(&self) -> usize {
        self.instances.len()
    }

    /// Whether the registry has no instances
    pub fn is_empty(&self) -> bool {
        self.instances.is_empty()
    }
}

impl Default for CacheRegistry {
    fn default() -> Self {
        Self::new()
    }
}

// A concrete key is mandatory; the empty string is reserved as invalid.
fn validate_key(key: &str) -> Result<()> {
    if key.is_empty() {
        return Err(CacheError::InvalidKey {
            key: key.to_string(),
        });
    }
    Ok(())
}
