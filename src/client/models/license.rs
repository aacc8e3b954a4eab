//! License models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::body::{Payload, RequestBody};
use crate::client::models::MemberSummary;
use crate::error::Result;
use crate::validate;

/// A work license issued to a member
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct License {
    pub id: i64,

    pub member_id: i64,

    /// `permanent` or `temporary`
    #[serde(rename = "type")]
    pub license_type: String,

    #[serde(default)]
    pub license_number: Option<String>,

    /// Expiry date, set for temporary licenses
    #[serde(default)]
    pub expires_at: Option<String>,

    #[serde(default)]
    pub kind: Option<String>,

    /// Owning member resolved server-side
    #[serde(default)]
    pub member: Option<MemberSummary>,
}

/// Fields submitted when creating or updating a license
#[derive(Debug, Clone, Serialize)]
pub struct LicensePayload {
    pub member_id: i64,
    #[serde(rename = "type")]
    pub license_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub license_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl LicensePayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("type", &self.license_type)?;
        Ok(())
    }
}

impl Payload for LicensePayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}
