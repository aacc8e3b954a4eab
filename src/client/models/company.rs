//! Dental company models

use serde::{Deserialize, Serialize};

use crate::client::body::{Payload, RequestBody};
use crate::client::models::{City, MemberSummary};
use crate::error::Result;
use crate::validate;

/// A dental practice in the directory
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub city_id: Option<i64>,
    /// Owning member (dentist), when assigned
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub city: Option<City>,
    #[serde(default)]
    pub user: Option<MemberSummary>,
}

/// Fields submitted when creating or updating a company
#[derive(Debug, Clone, Serialize)]
pub struct CompanyPayload {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<i64>,
}

impl CompanyPayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("name", &self.name)?;
        if let Some(phone) = &self.phone {
            validate::phone("phone", phone)?;
        }
        Ok(())
    }
}

impl Payload for CompanyPayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CompanyPayload {
        CompanyPayload {
            name: "Ordinacija Smile".to_string(),
            city_id: Some(18),
            address: None,
            phone: Some("020123456".to_string()),
            status: None,
            user_id: Some(7),
        }
    }

    #[test]
    fn test_company_json_omits_empty_fields() {
        match payload().to_body().unwrap() {
            RequestBody::Json(v) => {
                assert_eq!(v["name"], "Ordinacija Smile");
                assert_eq!(v["city_id"], 18);
                assert_eq!(v["user_id"], 7);
                assert!(v.get("address").is_none());
            }
            _ => panic!("expected JSON"),
        }
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut bad = payload();
        bad.phone = Some("12345".to_string());
        assert!(bad.validate().is_err());
    }

    #[test]
    fn test_company_embeds_city_and_owner() {
        let raw = r#"{
            "id": 2,
            "name": "Ordinacija Smile",
            "city": {"id": 18, "name": "Podgorica"},
            "user": {"id": 7, "name": "Ana", "surname": "Perić"}
        }"#;
        let company: Company = serde_json::from_str(raw).unwrap();
        assert_eq!(company.city.unwrap().name, "Podgorica");
        assert_eq!(company.user.unwrap().full_name(), "Ana Perić");
    }
}
