//! Cache contract and instance management

use async_trait::async_trait;
use futures::future::BoxFuture;
use serde_json::Value;

use crate::error::Result;
use crate::ttl::Ttl;

pub mod manager;
pub mod registry;

pub use manager::CacheManager;
pub use registry::CacheRegistry;

/// Deferred computation handed to [`Cache::remember`] and
/// [`Cache::remember_forever`], run only on a cache miss.
pub type ValueProducer = Box<dyn FnOnce() -> BoxFuture<'static, Result<Value>> + Send>;

/// Core trait that all cache backends must implement.
///
/// Keys are arbitrary strings; values cross the boundary as JSON so any
/// serializable type fits without making the trait generic. Every operation
/// may involve backend I/O and is therefore async.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Retrieve the value under `key`, or `default` when the key is absent
    /// or expired
    async fn get(&self, key: &str, default: Option<Value>) -> Result<Option<Value>>;

    /// Store `value` under `key` with the given expiration; returns whether
    /// the store succeeded
    async fn put(&self, key: &str, value: Value, ttl: Ttl) -> Result<bool>;

    /// Store `value` under `key` only when the key is absent; returns
    /// whether it stored
    async fn add(&self, key: &str, value: Value, ttl: Ttl) -> Result<bool>;

    /// Store `value` under `key` without expiration; returns whether the
    /// store succeeded
    async fn forever(&self, key: &str, value: Value) -> Result<bool>;

    /// Remove the entry under `key`; returns whether something was removed
    async fn forget(&self, key: &str) -> Result<bool>;

    /// Whether `key` currently holds an unexpired entry
    async fn has(&self, key: &str) -> Result<bool>;

    /// Whether `key` holds no entry; complement of [`Cache::has`]
    async fn missing(&self, key: &str) -> Result<bool>;

    /// Increment the numeric value under `key` by `amount`; returns the
    /// value after the increment
    async fn increment(&self, key: &str, amount: i64) -> Result<i64>;

    /// Decrement the numeric value under `key` by `amount`; returns the
    /// value after the decrement
    async fn decrement(&self, key: &str, amount: i64) -> Result<i64>;

    /// Remove and return the value under `key`, or `default` when the key
    /// is absent or expired
    async fn pull(&self, key: &str, default: Option<Value>) -> Result<Option<Value>>;

    /// Return the value under `key`; on a miss, run `producer` and store
    /// its value with `ttl` before returning it
    async fn remember(&self, key: &str, ttl: Ttl, producer: ValueProducer) -> Result<Value>;

    /// Return the value under `key`; on a miss, run `producer` and store
    /// its value without expiration before returning it
    async fn remember_forever(&self, key: &str, producer: ValueProducer) -> Result<Value>;
}
