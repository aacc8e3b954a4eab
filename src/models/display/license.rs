//! License display model

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::License;
use crate::output::formatters::format_opt;

/// License display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct LicenseDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NUMBER")]
    pub number: String,

    #[tabled(rename = "TYPE")]
    pub license_type: String,

    #[tabled(rename = "EXPIRES")]
    pub expires_at: String,

    #[tabled(rename = "HOLDER")]
    pub holder: String,
}

impl From<&License> for LicenseDisplay {
    fn from(license: &License) -> Self {
        Self {
            id: license.id,
            number: format_opt(&license.license_number),
            license_type: license.license_type.clone(),
            expires_at: format_opt(&license.expires_at),
            holder: license
                .member
                .as_ref()
                .map(|m| m.full_name())
                .unwrap_or_else(|| format!("member {}", license.member_id)),
        }
    }
}

impl Searchable for LicenseDisplay {
    fn haystack(&self) -> String {
        format!("{} {} {}", self.number, self.license_type, self.holder)
    }
}
