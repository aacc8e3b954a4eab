//! Company display model

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::Company;
use crate::output::formatters::format_opt;

/// Company display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CompanyDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "CITY")]
    pub city: String,

    #[tabled(rename = "ADDRESS")]
    pub address: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "STATUS")]
    pub status: String,

    #[tabled(rename = "OWNER")]
    pub owner: String,
}

impl From<&Company> for CompanyDisplay {
    fn from(company: &Company) -> Self {
        Self {
            id: company.id,
            name: company.name.clone(),
            city: company
                .city
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            address: format_opt(&company.address),
            phone: format_opt(&company.phone),
            status: format_opt(&company.status),
            owner: company
                .user
                .as_ref()
                .map(|u| u.full_name())
                .unwrap_or_else(|| "-".to_string()),
        }
    }
}

impl Searchable for CompanyDisplay {
    fn haystack(&self) -> String {
        format!("{} {} {} {}", self.name, self.city, self.address, self.owner)
    }
}
