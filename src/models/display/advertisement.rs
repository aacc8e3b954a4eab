//! Advertisement display model

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::Advertisement;
use crate::output::formatters::{format_opt, truncate};

/// Advertisement display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct AdvertisementDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "TEXT")]
    pub text: String,
}

impl From<&Advertisement> for AdvertisementDisplay {
    fn from(ad: &Advertisement) -> Self {
        Self {
            id: ad.id,
            title: ad.title.clone(),
            phone: format_opt(&ad.phone),
            text: ad
                .full_text
                .as_deref()
                .map(|t| truncate(t, 60))
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl Searchable for AdvertisementDisplay {
    fn haystack(&self) -> String {
        format!("{} {}", self.title, self.text)
    }
}
