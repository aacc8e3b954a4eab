//! Certificate models

use serde::{Deserialize, Serialize};

use crate::client::body::{FilePart, FormData, Payload, RequestBody};
use crate::client::models::MemberSummary;
use crate::error::{Result, ValidationError};
use crate::validate;

/// A member's continuing-education certificate record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certificate {
    pub id: i64,
    pub user_id: i64,
    #[serde(default)]
    pub user: Option<MemberSummary>,
    #[serde(default)]
    pub files: Vec<CertificateFile>,
}

/// One scanned document attached to a certificate record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CertificateFile {
    pub id: i64,
    #[serde(default)]
    pub file: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

/// A certificate record is only ever created with its scans, so the
/// payload is multipart by construction.
#[derive(Debug, Clone)]
pub struct CertificatePayload {
    pub user_id: i64,
    pub uploads: Vec<FileUpload>,
}

/// One file plus its display title
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file: FilePart,
    pub title: String,
}

impl CertificatePayload {
    pub fn validate(&self) -> Result<()> {
        if self.uploads.is_empty() {
            return Err(ValidationError::Required("files").into());
        }
        for upload in &self.uploads {
            validate::required("title", &upload.title)?;
        }
        Ok(())
    }
}

impl Payload for CertificatePayload {
    fn to_body(&self) -> Result<RequestBody> {
        let form = FormData::new()
            .int("user_id", self.user_id)
            .files("certificates", self.uploads.iter().map(|u| u.file.clone()))
            .texts("titles", self.uploads.iter().map(|u| u.title.clone()));
        Ok(RequestBody::Multipart(form))
    }
}

/// Body for adding a single scan to an existing certificate record
#[derive(Debug, Clone)]
pub struct CertificateFilePayload {
    pub upload: FileUpload,
}

impl Payload for CertificateFilePayload {
    fn to_body(&self) -> Result<RequestBody> {
        let form = FormData::new()
            .file("file", self.upload.file.clone())
            .text("title", &self.upload.title);
        Ok(RequestBody::Multipart(form))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upload(name: &str, title: &str) -> FileUpload {
        FileUpload {
            file: FilePart::from_bytes(name, b"%PDF".to_vec()),
            title: title.to_string(),
        }
    }

    #[test]
    fn test_create_is_always_multipart() {
        let payload = CertificatePayload {
            user_id: 4,
            uploads: vec![upload("a.pdf", "Course A"), upload("b.pdf", "Course B")],
        };
        match payload.to_body().unwrap() {
            RequestBody::Multipart(form) => {
                let keys: Vec<&str> = form.parts().iter().map(|(k, _)| k.as_str()).collect();
                assert_eq!(
                    keys,
                    vec![
                        "user_id",
                        "certificates[]",
                        "certificates[]",
                        "titles[]",
                        "titles[]"
                    ]
                );
            }
            _ => panic!("certificate create must be multipart"),
        }
    }

    #[test]
    fn test_empty_uploads_rejected() {
        let payload = CertificatePayload {
            user_id: 4,
            uploads: vec![],
        };
        assert!(payload.validate().is_err());
    }
}
