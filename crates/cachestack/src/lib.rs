//! # Cachestack
//!
//! Contract-first caching: an async [`Cache`] capability trait plus a
//! [`CacheManager`] that fronts any number of named cache instances behind a
//! single default.
//!
//! ## Features
//!
//! - **Backend-agnostic contract**: twelve async operations over string keys
//!   and JSON values; anything implementing [`Cache`] plugs in
//! - **Named instance registry**: register, replace, and remove instances at
//!   runtime, with first-registered fallback ordering as a committed guarantee
//! - **Default selection**: point delegated calls at any registered instance,
//!   or clear the selection to fall back to the first one registered
//! - **Pure delegation**: the manager is itself a [`Cache`], forwarding every
//!   operation to the resolved instance unchanged
//!
//! The crate ships no storage backend. Host applications construct one
//! [`CacheManager`], register their backends into it, and hand it out through
//! their own dependency wiring.

pub mod cache;
pub mod error;
pub mod ttl;

pub use cache::{Cache, CacheManager, CacheRegistry, ValueProducer};
pub use error::CacheError;
pub use ttl::Ttl;

/// Re-export commonly used types
pub type Result<T> = std::result::Result<T, CacheError>;
