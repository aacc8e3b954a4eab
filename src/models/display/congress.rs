//! Congress registration display model

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::CongressParticipant;
use crate::output::formatters::{format_flag, format_mark, format_opt};

/// Congress participant display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CongressDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "VOCATION")]
    pub vocation: String,

    #[tabled(rename = "INSTITUTION")]
    pub institution: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PAID")]
    pub paid: String,

    #[tabled(rename = "PAPER")]
    pub paper: String,
}

impl From<&CongressParticipant> for CongressDisplay {
    fn from(p: &CongressParticipant) -> Self {
        Self {
            id: p.id,
            name: p.name.clone(),
            vocation: format_opt(&p.vocation),
            institution: format_opt(&p.company),
            email: format_opt(&p.email),
            paid: format_mark(p.paid),
            paper: format_flag(p.file.is_some()),
        }
    }
}

impl Searchable for CongressDisplay {
    fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.institution, self.email)
    }
}
