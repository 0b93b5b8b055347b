//! Entry expiration types

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Time to live for a cache entry.
///
/// Expiration is either relative to the moment the entry is stored or an
/// absolute deadline. Backends resolve both forms to a deadline with
/// [`Ttl::deadline_from`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ttl {
    /// Expires this long after the entry is stored
    Duration(Duration),
    /// Expires at this instant
    Until(DateTime<Utc>),
}

impl Ttl {
    /// TTL of the given number of seconds
    pub fn from_secs(secs: u64) -> Self {
        Ttl::Duration(Duration::from_secs(secs))
    }

    /// TTL expiring at the given instant
    pub fn until(deadline: DateTime<Utc>) -> Self {
        Ttl::Until(deadline)
    }

    /// Resolve to an absolute deadline, anchoring the relative form at `now`.
    ///
    /// Durations too large to represent saturate to the maximum instant.
    pub fn deadline_from(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Ttl::Duration(duration) => chrono::Duration::from_std(*duration)
                .ok()
                .and_then(|delta| now.checked_add_signed(delta))
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
            Ttl::Until(deadline) => *deadline,
        }
    }
}

impl From<Duration> for Ttl {
    fn from(duration: Duration) -> Self {
        Ttl::Duration(duration)
    }
}

impl From<DateTime<Utc>> for Ttl {
    fn from(deadline: DateTime<Utc>) -> Self {
        Ttl::Until(deadline)
    }
}
