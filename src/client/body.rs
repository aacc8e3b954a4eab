//! Request body encoding
//!
//! Each payload type declares its wire encoding by what it builds here:
//! plain field sets become JSON, payloads carrying file parts become
//! multipart forms. The call sites (`create`/`update`) take a
//! [`RequestBody`] and never inspect payload shape themselves.
//!
//! Multipart conventions match the registry backend: dates as
//! `YYYY-MM-DD`, booleans as `"1"`/`"0"`, array-valued fields appended
//! with a `[]` suffix, and multipart updates tunneled through POST with a
//! `_method=PUT` override field.

use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, ValidationError};
use crate::validate;

/// A fully-built request body, ready for the HTTP layer
#[derive(Debug, Clone)]
pub enum RequestBody {
    Json(serde_json::Value),
    Multipart(FormData),
}

/// Something the client can submit as a create/update body
pub trait Payload {
    fn to_body(&self) -> Result<RequestBody>;
}

/// An in-memory multipart form description.
///
/// Kept separate from `reqwest::multipart::Form` so encodings can be
/// built and asserted on without a network stack.
#[derive(Debug, Clone, Default)]
pub struct FormData {
    parts: Vec<(String, PartValue)>,
}

#[derive(Debug, Clone)]
pub enum PartValue {
    Text(String),
    File(FilePart),
}

impl PartValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            PartValue::Text(t) => Some(t.as_str()),
            PartValue::File(_) => None,
        }
    }
}

/// One file part: name, bytes, and content type
#[derive(Debug, Clone)]
pub struct FilePart {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub mime: String,
}

impl FilePart {
    /// Build a part from in-memory bytes, inferring the mime type from
    /// the file name.
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        let file_name = file_name.into();
        let mime = mime_for(&file_name);
        Self {
            file_name,
            bytes,
            mime,
        }
    }

    /// Validate (allow-list + magic bytes) and read a file from disk.
    ///
    /// A file that fails validation is never read into a part, so it can
    /// never reach the network.
    pub fn read(path: &Path) -> Result<Self> {
        validate::upload_file(path)?;

        let bytes = std::fs::read(path).map_err(|e| ValidationError::FileUnreadable {
            path: path.display().to_string(),
            reason: e.to_string(),
        })?;
        let file_name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_for(&file_name);

        Ok(Self {
            file_name,
            bytes,
            mime,
        })
    }
}

fn mime_for(file_name: &str) -> String {
    let ext = file_name.rsplit('.').next().unwrap_or("").to_ascii_lowercase();
    match ext.as_str() {
        "pdf" => "application/pdf",
        "jpg" | "jpeg" => "image/jpeg",
        "png" => "image/png",
        _ => "application/octet-stream",
    }
    .to_string()
}

impl FormData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text field
    pub fn text(mut self, key: &str, value: impl Into<String>) -> Self {
        self.parts.push((key.to_string(), PartValue::Text(value.into())));
        self
    }

    /// Append a text field only when present
    pub fn maybe_text(self, key: &str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.text(key, v),
            None => self,
        }
    }

    /// Append a date as `YYYY-MM-DD`
    pub fn date(self, key: &str, value: NaiveDate) -> Self {
        self.text(key, value.format("%Y-%m-%d").to_string())
    }

    pub fn maybe_date(self, key: &str, value: Option<NaiveDate>) -> Self {
        match value {
            Some(v) => self.date(key, v),
            None => self,
        }
    }

    /// Append a boolean as `"1"` / `"0"`
    pub fn flag(self, key: &str, value: bool) -> Self {
        self.text(key, if value { "1" } else { "0" })
    }

    /// Append an integer field
    pub fn int(self, key: &str, value: i64) -> Self {
        self.text(key, value.to_string())
    }

    /// Append a single file part
    pub fn file(mut self, key: &str, part: FilePart) -> Self {
        self.parts.push((key.to_string(), PartValue::File(part)));
        self
    }

    pub fn maybe_file(self, key: &str, part: Option<FilePart>) -> Self {
        match part {
            Some(p) => self.file(key, p),
            None => self,
        }
    }

    /// Append an array of file parts under `key[]`
    pub fn files(mut self, key: &str, parts: impl IntoIterator<Item = FilePart>) -> Self {
        let array_key = format!("{}[]", key);
        for part in parts {
            self.parts.push((array_key.clone(), PartValue::File(part)));
        }
        self
    }

    /// Append an array of text values under `key[]`
    pub fn texts(mut self, key: &str, values: impl IntoIterator<Item = String>) -> Self {
        let array_key = format!("{}[]", key);
        for value in values {
            self.parts.push((array_key.clone(), PartValue::Text(value)));
        }
        self
    }

    /// Laravel method override for multipart updates
    pub fn method_override_put(self) -> Self {
        self.text("_method", "PUT")
    }

    /// True when at least one part is a file
    pub fn has_files(&self) -> bool {
        self.parts
            .iter()
            .any(|(_, v)| matches!(v, PartValue::File(_)))
    }

    pub fn parts(&self) -> &[(String, PartValue)] {
        &self.parts
    }

    /// Convert into a reqwest multipart form
    pub fn into_form(self) -> reqwest::multipart::Form {
        let mut form = reqwest::multipart::Form::new();
        for (key, value) in self.parts {
            form = match value {
                PartValue::Text(text) => form.text(key, text),
                PartValue::File(f) => {
                    let part = reqwest::multipart::Part::bytes(f.bytes)
                        .file_name(f.file_name)
                        .mime_str(&f.mime)
                        // mime strings here come from our own allow-list
                        .unwrap_or_else(|_| {
                            reqwest::multipart::Part::bytes(Vec::new())
                        });
                    form.part(key, part)
                }
            };
        }
        form
    }
}
