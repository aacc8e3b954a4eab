//! Registry API data models
//!
//! Domain types returned by the chamber registry backend, organized by
//! resource family, plus the typed create/update payloads the client
//! submits. Relations arrive embedded (a license carries its owning
//! member, a company its city), so list views never join client-side.

mod advertisement;
mod auth;
mod certificate;
mod company;
mod congress;
mod consultant;
mod employee;
mod finance;
mod homepage;
mod license;
mod member;
mod news;

pub use advertisement::{Advertisement, AdvertisementPayload};
pub use auth::{LoginRequest, LoginResponse};
pub use certificate::{
    Certificate, CertificateFile, CertificateFilePayload, CertificatePayload, FileUpload,
};
pub use company::{Company, CompanyPayload};
pub use congress::CongressParticipant;
pub use consultant::{Consultant, ConsultantPayload, Contract, ContractPayload};
pub use employee::{Employee, EmployeeFileField, EmployeePayload};
pub use finance::{FinancePayload, FinanceRecord, LedgerBalance};
pub use homepage::{HomePage, HomePagePayload};
pub use license::{License, LicensePayload};
pub use member::{City, LicenseSummary, Member, MemberPayload, MemberSummary};
pub use news::{Category, NewsItem, NewsPayload, NewsUpdatePayload};

/// How a fetched attachment blob should be served by the backend
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Disposition {
    /// Serve for in-place viewing
    #[default]
    Inline,
    /// Force a download
    Attachment,
}

impl Disposition {
    pub fn as_str(&self) -> &'static str {
        match self {
            Disposition::Inline => "inline",
            Disposition::Attachment => "attachment",
        }
    }
}

pub(crate) mod de {
    use serde::{Deserialize, Deserializer};

    /// The backend is loose about boolean flags: `0`/`1`, `"0"`/`"1"`,
    /// or a real boolean, depending on the endpoint.
    pub fn flexible_bool<'de, D>(deserializer: D) -> Result<bool, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::Bool(b) => b,
            serde_json::Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
            serde_json::Value::String(s) => s == "1" || s.eq_ignore_ascii_case("true"),
            _ => false,
        })
    }
}
