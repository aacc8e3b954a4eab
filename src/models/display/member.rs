//! Member and city display models

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::{City, Member};
use crate::output::formatters::format_opt;

/// Member display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct MemberDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "SURNAME")]
    pub surname: String,

    #[tabled(rename = "SPECIALITY")]
    pub speciality: String,

    #[tabled(rename = "CITY")]
    pub city: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "LICENSES")]
    pub licenses: usize,
}

impl From<&Member> for MemberDisplay {
    fn from(member: &Member) -> Self {
        Self {
            id: member.id,
            name: member.name.clone(),
            surname: member.surname.clone(),
            speciality: format_opt(&member.speciality),
            city: member
                .city
                .as_ref()
                .map(|c| c.name.clone())
                .unwrap_or_else(|| "-".to_string()),
            email: format_opt(&member.email),
            licenses: member.licenses.len(),
        }
    }
}

impl Searchable for MemberDisplay {
    fn haystack(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name, self.surname, self.speciality, self.city, self.email
        )
    }
}

/// City display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct CityDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<&City> for CityDisplay {
    fn from(city: &City) -> Self {
        Self {
            id: city.id,
            name: city.name.clone(),
        }
    }
}

impl Searchable for CityDisplay {
    fn haystack(&self) -> String {
        self.name.clone()
    }
}
