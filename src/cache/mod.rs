//! Local cache for registry API responses
//!
//! SQLite-backed caching with file blob storage for large responses.
//! Reads go through the cache; every mutation invalidates the whole
//! resource family it touched, so the next read re-fetches.

pub mod client;
pub mod key;
pub mod storage;

use std::time::Duration;

/// Cache TTL configuration per resource family.
///
/// Mutations through this CLI invalidate eagerly, so the TTL only
/// bounds staleness against edits made by other operators.
pub struct CacheTtl;

impl CacheTtl {
    // Working lists, edited all day by the back office
    pub const LIST: Duration = Duration::from_secs(2 * 60);
    pub const DETAIL: Duration = Duration::from_secs(5 * 60);

    // Reference lists that change a few times a year
    pub const CITIES: Duration = Duration::from_secs(24 * 60 * 60);
    pub const CATEGORIES: Duration = Duration::from_secs(60 * 60);

    // Ledgers follow the working-list cadence
    pub const LEDGER: Duration = Duration::from_secs(2 * 60);

    pub const HOMEPAGE: Duration = Duration::from_secs(10 * 60);
}

pub use client::CachedRegistryClient;
pub use key::cache_key;
pub use storage::CacheStorage;
