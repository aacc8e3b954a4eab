//! Certificate display models

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::{Certificate, CertificateFile};
use crate::output::formatters::format_opt;

/// Certificate display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CertificateDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "MEMBER")]
    pub member: String,

    #[tabled(rename = "FILES")]
    pub files: usize,

    #[tabled(rename = "TITLES")]
    pub titles: String,
}

impl From<&Certificate> for CertificateDisplay {
    fn from(certificate: &Certificate) -> Self {
        let titles: Vec<&str> = certificate
            .files
            .iter()
            .filter_map(|f| f.title.as_deref())
            .collect();
        Self {
            id: certificate.id,
            member: certificate
                .user
                .as_ref()
                .map(|u| u.full_name())
                .unwrap_or_else(|| format!("member {}", certificate.user_id)),
            files: certificate.files.len(),
            titles: if titles.is_empty() {
                "-".to_string()
            } else {
                titles.join(", ")
            },
        }
    }
}

impl Searchable for CertificateDisplay {
    fn haystack(&self) -> String {
        format!("{} {}", self.member, self.titles)
    }
}

/// One scan inside a certificate record, for `show` output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CertificateFileDisplay {
    #[tabled(rename = "FILE ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "PATH")]
    pub path: String,
}

impl From<&CertificateFile> for CertificateFileDisplay {
    fn from(file: &CertificateFile) -> Self {
        Self {
            id: file.id,
            title: format_opt(&file.title),
            path: format_opt(&file.file),
        }
    }
}
