//! Display models for CLI output
//!
//! This module provides shared display model abstractions for converting
//! API response types into CLI-friendly display formats.

pub mod display;

pub use display::{
    AdvertisementDisplay, BalanceDisplay, CategoryDisplay, CertificateDisplay,
    CertificateFileDisplay, CityDisplay, CompanyDisplay, CongressDisplay, ConsultantDisplay,
    ContractDisplay, EmployeeDisplay, FinanceDisplay, HomePageDisplay, LicenseDisplay,
    MemberDisplay, NewsDisplay, Searchable,
};
