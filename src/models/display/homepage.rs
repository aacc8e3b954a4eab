//! Homepage display model

use serde::Serialize;
use tabled::Tabled;

use crate::client::models::HomePage;
use crate::output::formatters::{format_opt, truncate};

/// Homepage display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct HomePageDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "TEXT")]
    pub text: String,

    #[tabled(rename = "UPDATED")]
    pub updated_at: String,
}

impl From<&HomePage> for HomePageDisplay {
    fn from(page: &HomePage) -> Self {
        Self {
            id: page.id,
            title: format_opt(&page.title),
            text: page
                .text
                .as_deref()
                .map(|t| truncate(t, 80))
                .unwrap_or_else(|| "-".to_string()),
            updated_at: format_opt(&page.updated_at),
        }
    }
}
