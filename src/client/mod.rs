//! Chamber registry API client

pub mod api;
pub mod body;
pub mod http;
pub mod models;

#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;

pub use api::{AuthApi, ContentApi, DirectoryApi, RecordsApi, RegistryApi, StaffApi};
pub use http::RegistryClient;
#[cfg(test)]
pub use mock::MockRegistryClient;
