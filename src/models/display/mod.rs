//! Display model implementations for table and JSON output
//!
//! Display models transform API response types into CLI-friendly formats
//! with appropriate column names and serialization.

mod advertisement;
mod certificate;
mod company;
mod congress;
mod finance;
mod homepage;
mod license;
mod member;
mod news;
mod staff;

pub use advertisement::AdvertisementDisplay;
pub use certificate::{CertificateDisplay, CertificateFileDisplay};
pub use company::CompanyDisplay;
pub use congress::CongressDisplay;
pub use finance::{BalanceDisplay, FinanceDisplay};
pub use homepage::HomePageDisplay;
pub use license::LicenseDisplay;
pub use member::{CityDisplay, MemberDisplay};
pub use news::{CategoryDisplay, NewsDisplay};
pub use staff::{ConsultantDisplay, ContractDisplay, EmployeeDisplay};

/// Text a row exposes to `--search` matching.
///
/// Matching is case-insensitive on the lowercased haystack, so
/// implementations return raw column text.
pub trait Searchable {
    fn haystack(&self) -> String;
}
