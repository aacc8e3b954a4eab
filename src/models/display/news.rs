//! News and category display models

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::{Category, NewsItem};
use crate::output::formatters::{format_flag, format_opt, truncate};

const TEASER_WIDTH: usize = 48;

/// News display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct NewsDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "CATEGORY")]
    pub category: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "TEASER")]
    pub teaser: String,

    #[tabled(rename = "IMAGE")]
    pub image: String,
}

impl From<&NewsItem> for NewsDisplay {
    fn from(item: &NewsItem) -> Self {
        Self {
            id: item.id,
            title: item.title.clone(),
            category: item
                .category
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            date: format_opt(&item.date),
            teaser: item
                .content
                .as_deref()
                .map(|c| truncate(c, TEASER_WIDTH))
                .unwrap_or_else(|| "-".to_string()),
            image: format_flag(item.images.is_some()),
        }
    }
}

impl Searchable for NewsDisplay {
    fn haystack(&self) -> String {
        format!("{} {} {}", self.title, self.category, self.teaser)
    }
}

/// Category display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CategoryDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<&Category> for CategoryDisplay {
    fn from(category: &Category) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
        }
    }
}

impl Searchable for CategoryDisplay {
    fn haystack(&self) -> String {
        self.name.clone()
    }
}
