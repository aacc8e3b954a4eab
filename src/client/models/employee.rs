//! Chamber employee models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::body::{FilePart, FormData, Payload, RequestBody};
use crate::error::Result;
use crate::validate;

/// A chamber staff employee
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub surname: String,
    #[serde(default)]
    pub jmbg: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    /// Server-side path of the stored personal id scan
    #[serde(default)]
    pub personal_id: Option<String>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// An uploaded contract attached to an employee or consultant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Contract {
    pub id: i64,
    /// Server-side file path, keyed `contract` on employee rows
    #[serde(default, alias = "contract")]
    pub file: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// File slots an employee record can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum EmployeeFileField {
    PersonalId,
    Contract,
}

impl EmployeeFileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeFileField::PersonalId => "personal_id",
            EmployeeFileField::Contract => "contract",
        }
    }
}

/// Fields submitted when creating or updating an employee.
///
/// Encodes as multipart when a file part is attached, plain JSON otherwise.
#[derive(Debug, Clone, Default)]
pub struct EmployeePayload {
    pub name: String,
    pub surname: String,
    pub jmbg: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub position: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub personal_id: Option<FilePart>,
    pub contract: Option<FilePart>,
    /// When true the multipart form carries a `_method=PUT` override
    pub is_update: bool,
}

impl EmployeePayload {
    pub fn validate(&self) -> Result<()> {
        validate::required("name", &self.name)?;
        validate::required("surname", &self.surname)?;
        if let Some(jmbg) = &self.jmbg {
            validate::jmbg("jmbg", jmbg)?;
        }
        if let Some(email) = &self.email {
            validate::email("email", email)?;
        }
        if let Some(phone) = &self.phone {
            validate::phone("phone", phone)?;
        }
        Ok(())
    }

    fn has_files(&self) -> bool {
        self.personal_id.is_some() || self.contract.is_some()
    }
}

impl Payload for EmployeePayload {
    fn to_body(&self) -> Result<RequestBody> {
        if self.has_files() {
            let mut form = FormData::new()
                .text("name", &self.name)
                .text("surname", &self.surname)
                .maybe_text("jmbg", self.jmbg.as_deref())
                .maybe_text("email", self.email.as_deref())
                .maybe_text("phone", self.phone.as_deref())
                .maybe_text("address", self.address.as_deref())
                .maybe_text("position", self.position.as_deref())
                .maybe_date("date_of_birth", self.date_of_birth)
                .maybe_file("personal_id", self.personal_id.clone())
                .maybe_file("contract", self.contract.clone());
            if self.is_update {
                form = form.method_override_put();
            }
            Ok(RequestBody::Multipart(form))
        } else {
            let mut value = serde_json::json!({
                "name": self.name,
                "surname": self.surname,
            });
            let obj = value.as_object_mut().unwrap();
            if let Some(v) = &self.jmbg {
                obj.insert("jmbg".into(), v.clone().into());
            }
            if let Some(v) = &self.email {
                obj.insert("email".into(), v.clone().into());
            }
            if let Some(v) = &self.phone {
                obj.insert("phone".into(), v.clone().into());
            }
            if let Some(v) = &self.address {
                obj.insert("address".into(), v.clone().into());
            }
            if let Some(v) = &self.position {
                obj.insert("position".into(), v.clone().into());
            }
            if let Some(v) = self.date_of_birth {
                obj.insert("date_of_birth".into(), v.format("%Y-%m-%d").to_string().into());
            }
            Ok(RequestBody::Json(value))
        }
    }
}
