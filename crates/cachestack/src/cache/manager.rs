//! Manager fronting multiple named cache instances

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use super::{Cache, CacheRegistry, ValueProducer};
use crate::error::{CacheError, Result};
use crate::ttl::Ttl;

/// Front for a set of named cache instances.
///
/// Instances are registered under unique keys, one of them may be selected
/// as the default, and the manager's own [`Cache`] implementation forwards
/// every cache operation to the resolved default. Code that needs a single
/// cache takes the manager as an `Arc<dyn Cache>`; code that needs
/// multi-instance awareness uses the registry surface.
///
/// Configuration is expected to happen once, at startup, from a single
/// place; the manager adds no locking of its own.
pub struct CacheManager {
    registry: CacheRegistry,
    default_key: Option<String>,
}

impl std::fmt::Debug for CacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CacheManager")
            .field("keys", &self.registry.keys())
            .field("default_key", &self.default_key)
            .finish()
    }
}

impl CacheManager {
    /// Create a manager with an empty registry and no default selected
    pub fn new() -> Self {
        Self {
            registry: CacheRegistry::new(),
            default_key: None,
        }
    }

    /// Create a manager over an already-populated registry
    pub fn with_registry(registry: CacheRegistry) -> Self {
        Self {
            registry,
            default_key: None,
        }
    }

    /// Register `instance` under `key`, replacing any previous entry
    pub fn register(
        &mut self,
        key: impl Into<String>,
        instance: Arc<dyn Cache>,
    ) -> Result<&mut Self> {
        let key = key.into();
        self.registry.register(key.clone(), instance)?;
        debug!(key = %key, "cache instance registered");
        Ok(self)
    }

    /// Remove the instance under `key`; an absent key is a no-op
    pub fn unregister(&mut self, key: &str) -> Result<&mut Self> {
        if self.registry.unregister(key)? {
            debug!(key = %key, "cache instance unregistered");
        }
        Ok(self)
    }

    /// Whether an instance is registered under `key`
    pub fn is_registered(&self, key: &str) -> Result<bool> {
        self.registry.contains(key)
    }

    /// Select the instance that services delegated calls.
    ///
    /// `None` clears the selection, so resolution falls back to the first
    /// registered instance. `Some(key)` requires `key` to be registered;
    /// otherwise the previous selection stays in place and the call fails.
    /// A selection is not re-validated when its instance is later
    /// unregistered; resolution reports the stale key instead.
    pub fn set_default(&mut self, key: Option<&str>) -> Result<&mut Self> {
        match key {
            None => {
                self.default_key = None;
                debug!("default cache selection cleared");
            }
            Some(key) => {
                if !self.registry.contains(key)? {
                    return Err(CacheError::NotRegistered {
                        key: key.to_string(),
                    });
                }
                self.default_key = Some(key.to_string());
                debug!(key = %key, "default cache selected");
            }
        }
        Ok(self)
    }

    /// The currently selected default key, if any
    pub fn default_key(&self) -> Option<&str> {
        self.default_key.as_deref()
    }

    /// Resolve the instance servicing delegated calls.
    ///
    /// With no default selected this is the first registered instance.
    pub fn default_cache(&self) -> Result<Arc<dyn Cache>> {
        match &self.default_key {
            Some(key) => self.registry.get(key),
            None => self.registry.first().ok_or(CacheError::EmptyRegistry),
        }
    }

    /// Resolve the instance under `key`, or the default when `key` is `None`
    pub fn cache(&self, key: Option<&str>) -> Result<Arc<dyn Cache>> {
        match key {
            Some(key) => self.registry.get(key),
            None => self.default_cache(),
        }
    }

    /// The underlying registry
    pub fn registry(&self) -> &CacheRegistry {
        &self.registry
    }

    /// Mutable access to the underlying registry
    pub fn registry_mut(&mut self) -> &mut CacheRegistry {
        &mut self.registry
    }
}

impl Default for CacheManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Pure delegation: every operation resolves the default instance and
/// forwards arguments and results unchanged. Resolution failures surface
/// exactly as [`CacheManager::default_cache`] reports them.
#[async_trait]
impl Cache for CacheManager {
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        self.default_cache()?.get(key, default).await
    }

    async fn put(&self, key: &str, value: Value, ttl: Ttl) -> Result<bool> {
        self.default_cache()?.put(key, value, ttl).await
    }

    async fn add(&self, key: &str, value: Value, ttl: Ttl) -> Result<bool> {
        self.default_cache()?.add(key, value, ttl).await
    }

    async fn forever(&self, key: &str, value: Value) -> Result<bool> {
        self.default_cache()?.forever(key, value).await
    }

    async fn forget(&self, key: &str) -> Result<bool> {
        self.default_cache()?.forget(key).await
    }

    async fn has(&self, key: &str) -> Result<bool> {
        self.default_cache()?.has(key).await
    }

    async fn missing(&self, key: &str) -> Result<bool> {
        self.default_cache()?.missing(key).await
    }

    async fn increment(&self, key: &str, amount: i64) -> Result<i64> {
        self.default_cache()?.increment(key, amount).await
    }

    async fn decrement(&self, key: &str, amount: i64) -> Result<i64> {
        self.default_cache()?.decrement(key, amount).await
    }

    async fn pull(&self, key: &str, default: Option<Value>) -> Result<Option<Value>> {
        self.default_cache()?.pull(key, default).await
    }

    async fn remember(&self, key: &str, ttl: Ttl, producer: ValueProducer) -> Result<Value> {
        self.default_cache()?.remember(key, ttl, producer).await
    }

    async fn remember_forever(&self, key: &str, producer: ValueProducer) -> Result<Value> {
        self.default_cache()?.remember_forever(key, producer).await
    }
}
