//! Member (chamber registrant) models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::body::{Payload, RequestBody};
use crate::error::Result;
use crate::validate;

/// A chamber member as returned by the registry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    /// Backend-assigned identifier, immutable, never reused
    pub id: i64,

    pub name: String,
    pub surname: String,

    #[serde(default)]
    pub sex: Option<String>,

    /// `YYYY-MM-DD` as stored by the backend
    #[serde(default)]
    pub date_of_birth: Option<String>,

    #[serde(default)]
    pub speciality: Option<String>,

    #[serde(default)]
    pub email: Option<String>,

    #[serde(default)]
    pub phone: Option<String>,

    /// Facsimile stamp number, keyed `faximil` on older rows
    #[serde(default, alias = "faximil")]
    pub fax_nbr: Option<String>,

    #[serde(default)]
    pub city_id: Option<i64>,

    #[serde(default)]
    pub company_id: Option<i64>,

    /// City resolved server-side
    #[serde(default)]
    pub city: Option<City>,

    /// Licenses held by this member, embedded by the list endpoint
    #[serde(default)]
    pub licenses: Vec<LicenseSummary>,
}

/// Reduced member shape embedded in other resources
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberSummary {
    pub id: i64,
    pub name: String,
    pub surname: String,
}

impl MemberSummary {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// City reference record (read-only list)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct City {
    pub id: i64,
    pub name: String,
}

/// License info as embedded inside a member record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LicenseSummary {
    pub id: i64,
    #[serde(default)]
    pub license_number: Option<String>,
}

/// Fields submitted when creating or updating a member
#[derive(Debug, Clone, Serialize)]
pub struct MemberPayload {
    pub name: String,
    pub surname: String,
    pub sex: String,
    pub date_of_birth: NaiveDate,
    pub speciality: String,
    pub city_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_id: Option<i64>,
    #[serde(rename = "faximil", skip_serializing_if = "Option::is_none")]
    pub fax_nbr: Option<String>,
    pub email: String,
    pub phone: String,
}

impl MemberPayload {
    /// Run the form rules; nothing is sent when any rule fails
    pub fn validate(&self) -> Result<()> {
        validate::required("name", &self.name)?;
        validate::required("surname", &self.surname)?;
        validate::required("sex", &self.sex)?;
        validate::required("speciality", &self.speciality)?;
        validate::email("email", &self.email)?;
        validate::phone("phone", &self.phone)?;
        Ok(())
    }
}

impl Payload for MemberPayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}
