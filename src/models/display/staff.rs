//! Employee and consultant display models

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::{Consultant, Contract, Employee};
use crate::output::formatters::{format_flag, format_opt};

/// Employee display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct EmployeeDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "POSITION")]
    pub position: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "ID SCAN")]
    pub personal_id: String,

    #[tabled(rename = "CONTRACTS")]
    pub contracts: usize,
}

impl From<&Employee> for EmployeeDisplay {
    fn from(employee: &Employee) -> Self {
        Self {
            id: employee.id,
            name: employee.full_name(),
            position: format_opt(&employee.position),
            email: format_opt(&employee.email),
            phone: format_opt(&employee.phone),
            personal_id: format_flag(employee.personal_id.is_some()),
            contracts: employee.contracts.len(),
        }
    }
}

impl Searchable for EmployeeDisplay {
    fn haystack(&self) -> String {
        format!("{} {} {}", self.name, self.position, self.email)
    }
}

/// Consultant display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ConsultantDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    #[tabled(rename = "PHONE")]
    pub phone: String,

    #[tabled(rename = "ID SCAN")]
    pub personal_id: String,

    #[tabled(rename = "CONTRACTS")]
    pub contracts: usize,
}

impl From<&Consultant> for ConsultantDisplay {
    fn from(consultant: &Consultant) -> Self {
        Self {
            id: consultant.id,
            name: consultant.full_name(),
            email: format_opt(&consultant.email),
            phone: format_opt(&consultant.phone),
            personal_id: format_flag(consultant.personal_id.is_some()),
            contracts: consultant.contracts.len(),
        }
    }
}

impl Searchable for ConsultantDisplay {
    fn haystack(&self) -> String {
        format!("{} {}", self.name, self.email)
    }
}

/// Contract attachment display, used by `show` subcommands.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct ContractDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "TITLE")]
    pub title: String,

    #[tabled(rename = "UPLOADED")]
    pub uploaded: String,
}

impl From<&Contract> for ContractDisplay {
    fn from(contract: &Contract) -> Self {
        Self {
            id: contract.id,
            title: format_opt(&contract.title),
            uploaded: format_opt(&contract.created_at),
        }
    }
}
