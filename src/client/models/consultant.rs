//! External consultant models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::body::{FilePart, FormData, Payload, RequestBody};
pub use crate::client::models::employee::Contract;
use crate::error::Result;
use crate::validate;

/// An external consultant engaged by the chamber
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Consultant {
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
    pub date_of_birth: Option<String>,
    /// Server-side path of the stored personal id scan
    #[serde(default)]
    pub personal_id: Option<String>,
    #[serde(default)]
    pub contracts: Vec<Contract>,
}

impl Consultant {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.name, self.surname)
    }
}

/// Fields submitted when creating or updating a consultant.
///
/// A personal id scan or new contract files switch the encoding to
/// multipart; contract files ride along as a `contracts[]` array.
#[derive(Debug, Clone, Default)]
pub struct ConsultantPayload {
    pub name: String,
    pub surname: String,
    pub jmbg: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub personal_id: Option<FilePart>,
    pub contracts: Vec<FilePart>,
    pub is_update: bool,
}

impl ConsultantPayload {
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
        self.personal_id.is_some() || !self.contracts.is_empty()
    }
}

impl Payload for ConsultantPayload {
    fn to_body(&self) -> Result<RequestBody> {
        if self.has_files() {
            let mut form = FormData::new()
                .text("name", &self.name)
                .text("surname", &self.surname)
                .maybe_text("jmbg", self.jmbg.as_deref())
                .maybe_text("email", self.email.as_deref())
                .maybe_text("phone", self.phone.as_deref())
                .maybe_date("date_of_birth", self.date_of_birth)
                .maybe_file("personal_id", self.personal_id.clone())
                .files("contracts", self.contracts.iter().cloned());
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
            if let Some(v) = self.date_of_birth {
                obj.insert(
                    "date_of_birth".into(),
                    v.format("%Y-%m-%d").to_string().into(),
                );
            }
            Ok(RequestBody::Json(value))
        }
    }
}

/// Body for attaching a single contract to an existing consultant
#[derive(Debug, Clone)]
pub struct ContractPayload {
    pub contract: FilePart,
}

impl Payload for ContractPayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Multipart(
            FormData::new().file("contract", self.contract.clone()),
        ))
    }
}
