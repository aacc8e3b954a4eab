//! Homepage content models

use serde::{Deserialize, Serialize};

use crate::client::body::{Payload, RequestBody};
use crate::error::Result;
use crate::validate;

/// The single editable homepage record of the public site
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HomePage {
    pub id: i64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Fields submitted when updating the homepage content
#[derive(Debug, Clone, Serialize)]
pub struct HomePagePayload {
    pub title: String,
    pub text: String,
}

impl HomePagePayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("title", &self.title)?;
        validate::required("text", &self.text)?;
        Ok(())
    }
}

impl Payload for HomePagePayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}
