//! Advertisement models
//!
//! The backend route is spelled `/advertisments`; the misspelling is part
//! of the wire contract and stays out of user-facing names.

use serde::{Deserialize, Serialize};

use crate::client::body::{Payload, RequestBody};
use crate::error::Result;
use crate::validate;

/// A classified advertisement shown on the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Advertisement {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Fields submitted when creating or updating an advertisement
#[derive(Debug, Clone, Serialize)]
pub struct AdvertisementPayload {
    pub title: String,
    pub full_text: String,
    pub phone: String,
}

impl AdvertisementPayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("title", &self.title)?;
        validate::required("full_text", &self.full_text)?;
        validate::phone("phone", &self.phone)?;
        Ok(())
    }
}

impl Payload for AdvertisementPayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}
