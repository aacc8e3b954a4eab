//! Registry API trait surface
//!
//! The trait is split by responsibility so command handlers depend only
//! on the slice they use. [`RegistryApi`] combines the slices; the HTTP
//! client, the cached wrapper, and the test mock all implement it.

mod auth;
mod content;
mod directory;
mod records;
mod staff;

pub use auth::AuthApi;
pub use content::ContentApi;
pub use directory::DirectoryApi;
pub use records::RecordsApi;
pub use staff::StaffApi;

/// The full registry API surface
pub trait RegistryApi:
    AuthApi + DirectoryApi + StaffApi + RecordsApi + ContentApi + Send + Sync
{
}

impl<T> RegistryApi for T where
    T: AuthApi + DirectoryApi + StaffApi + RecordsApi + ContentApi + Send + Sync
{
}
