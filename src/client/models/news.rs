//! News and category models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::body::{FilePart, FormData, Payload, RequestBody};
use crate::error::Result;
use crate::validate;

/// A news category
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A published news article
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: i64,
    pub title: String,
    /// Short teaser shown on list pages
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub full_text: Option<String>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub posted_by: Option<String>,
    /// Server-side path of the cover image
    #[serde(default)]
    pub images: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Body for publishing an article. The cover image rides along at
/// create time, so creates are always multipart; articles are posted
/// under the fixed `admin` author.
#[derive(Debug, Clone, Default)]
pub struct NewsPayload {
    pub title: String,
    pub category_id: i64,
    pub category_name: Option<String>,
    pub date: Option<NaiveDate>,
    pub content: Option<String>,
    pub full_text: Option<String>,
    pub image: Option<FilePart>,
    pub image_title: Option<String>,
}

impl NewsPayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("title", &self.title)?;
        Ok(())
    }
}

impl Payload for NewsPayload {
    fn to_body(&self) -> Result<RequestBody> {
        let form = FormData::new()
            .int("category_id", self.category_id)
            .text("category_name", self.category_name.clone().unwrap_or_default())
            .text("content", self.content.clone().unwrap_or_default())
            .text("full_text", self.full_text.clone().unwrap_or_default())
            .text("posted_by", "admin")
            .text("title", &self.title)
            .maybe_date("date", self.date)
            .maybe_file("images", self.image.clone())
            .maybe_text("imgTitle", self.image_title.as_deref());
        Ok(RequestBody::Multipart(form))
    }
}

/// Body for editing an article's text fields. Image management is a
/// separate concern, so updates stay JSON.
#[derive(Debug, Clone, Serialize)]
pub struct NewsUpdatePayload {
    pub title: String,
    pub category_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_text: Option<String>,
}

impl NewsUpdatePayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("title", &self.title)?;
        Ok(())
    }
}

impl Payload for NewsUpdatePayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_is_multipart_with_admin_author() {
        let payload = NewsPayload {
            title: "Kongres 2026".to_string(),
            category_id: 2,
            content: Some("Prijave su otvorene.".to_string()),
            image: Some(FilePart::from_bytes("cover.png", b"\x89PNG".to_vec())),
            image_title: Some("Naslovna".to_string()),
            ..Default::default()
        };
        match payload.to_body().unwrap() {
            RequestBody::Multipart(form) => {
                let posted_by = form
                    .parts()
                    .iter()
                    .find(|(k, _)| k == "posted_by")
                    .and_then(|(_, v)| v.as_text());
                assert_eq!(posted_by, Some("admin"));
                assert!(form.parts().iter().any(|(k, _)| k == "images"));
                assert!(form.parts().iter().any(|(k, _)| k == "imgTitle"));
            }
            _ => panic!("news create must be multipart"),
        }
    }

    #[test]
    fn test_update_is_json() {
        let payload = NewsUpdatePayload {
            title: "Ispravka".to_string(),
            category_id: 1,
            date: None,
            content: Some("Novi tekst.".to_string()),
            full_text: None,
        };
        match payload.to_body().unwrap() {
            RequestBody::Json(v) => {
                assert_eq!(v["title"], "Ispravka");
                assert!(v.get("date").is_none());
            }
            _ => panic!("news update must be JSON"),
        }
    }
}
