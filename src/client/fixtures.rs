//! Test fixtures and builders for registry model types
//!
//! Builder patterns with sensible defaults, imported via
//! `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::{
    Advertisement, Category, Certificate, CertificateFile, City, Company, CongressParticipant,
    Consultant, Employee, FinanceRecord, License, Member, MemberSummary, NewsItem,
};

/// Builder for test [`Member`] instances.
#[derive(Debug, Clone)]
pub struct MemberBuilder {
    id: i64,
    name: String,
    surname: String,
    city: Option<City>,
    email: Option<String>,
    speciality: Option<String>,
}

impl MemberBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Member{}", id),
            surname: "Test".to_string(),
            city: None,
            email: None,
            speciality: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn city(mut self, id: i64, name: impl Into<String>) -> Self {
        self.city = Some(City {
            id,
            name: name.into(),
        });
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn speciality(mut self, speciality: impl Into<String>) -> Self {
        self.speciality = Some(speciality.into());
        self
    }

    pub fn build(self) -> Member {
        Member {
            id: self.id,
            name: self.name,
            surname: self.surname,
            sex: None,
            date_of_birth: None,
            speciality: self.speciality,
            email: self.email,
            phone: None,
            fax_nbr: None,
            city_id: self.city.as_ref().map(|c| c.id),
            company_id: None,
            city: self.city,
            licenses: Vec::new(),
        }
    }
}

pub fn member_summary(id: i64, name: &str, surname: &str) -> MemberSummary {
    MemberSummary {
        id,
        name: name.to_string(),
        surname: surname.to_string(),
    }
}

pub fn city(id: i64, name: &str) -> City {
    City {
        id,
        name: name.to_string(),
    }
}

/// Builder for test [`License`] instances.
#[derive(Debug, Clone)]
pub struct LicenseBuilder {
    id: i64,
    member_id: i64,
    license_type: String,
    license_number: Option<String>,
    expires_at: Option<String>,
    member: Option<MemberSummary>,
}

impl LicenseBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            member_id: 1,
            license_type: "permanent".to_string(),
            license_number: Some(format!("L-{}", id)),
            expires_at: None,
            member: None,
        }
    }

    pub fn member_id(mut self, member_id: i64) -> Self {
        self.member_id = member_id;
        self
    }

    pub fn temporary(mut self, expires_at: impl Into<String>) -> Self {
        self.license_type = "temporary".to_string();
        self.expires_at = Some(expires_at.into());
        self
    }

    pub fn member(mut self, member: MemberSummary) -> Self {
        self.member = Some(member);
        self
    }

    pub fn build(self) -> License {
        License {
            id: self.id,
            member_id: self.member_id,
            license_type: self.license_type,
            license_number: self.license_number,
            expires_at: self.expires_at,
            kind: None,
            member: self.member,
        }
    }
}

/// Builder for test [`Employee`] instances.
#[derive(Debug, Clone)]
pub struct EmployeeBuilder {
    id: i64,
    name: String,
    surname: String,
    personal_id: Option<String>,
}

impl EmployeeBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Employee{}", id),
            surname: "Test".to_string(),
            personal_id: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn surname(mut self, surname: impl Into<String>) -> Self {
        self.surname = surname.into();
        self
    }

    pub fn personal_id(mut self, path: impl Into<String>) -> Self {
        self.personal_id = Some(path.into());
        self
    }

    pub fn build(self) -> Employee {
        Employee {
            id: self.id,
            name: self.name,
            surname: self.surname,
            jmbg: None,
            email: None,
            phone: None,
            address: None,
            position: None,
            date_of_birth: None,
            personal_id: self.personal_id,
            contracts: Vec::new(),
        }
    }
}

pub fn consultant(id: i64, name: &str, surname: &str) -> Consultant {
    Consultant {
        id,
        name: name.to_string(),
        surname: surname.to_string(),
        jmbg: None,
        email: None,
        phone: None,
        date_of_birth: None,
        personal_id: None,
        contracts: Vec::new(),
    }
}

pub fn certificate(id: i64, user_id: i64, files: Vec<CertificateFile>) -> Certificate {
    Certificate {
        id,
        user_id,
        user: None,
        files,
    }
}

pub fn certificate_file(id: i64, title: &str) -> CertificateFile {
    CertificateFile {
        id,
        file: Some(format!("storage/certificates/{}.pdf", id)),
        title: Some(title.to_string()),
    }
}

pub fn company(id: i64, name: &str) -> Company {
    Company {
        id,
        name: name.to_string(),
        address: None,
        phone: None,
        status: None,
        city_id: None,
        user_id: None,
        city: None,
        user: None,
    }
}

/// Builder for test [`FinanceRecord`] instances.
#[derive(Debug, Clone)]
pub struct FinanceRecordBuilder {
    id: i64,
    member_id: i64,
    duguje: f64,
    potrazuje: f64,
    date: Option<String>,
}

impl FinanceRecordBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            member_id: 1,
            duguje: 0.0,
            potrazuje: 0.0,
            date: Some("2026-01-15".to_string()),
        }
    }

    pub fn member_id(mut self, member_id: i64) -> Self {
        self.member_id = member_id;
        self
    }

    pub fn duguje(mut self, amount: f64) -> Self {
        self.duguje = amount;
        self
    }

    pub fn potrazuje(mut self, amount: f64) -> Self {
        self.potrazuje = amount;
        self
    }

    pub fn build(self) -> FinanceRecord {
        FinanceRecord {
            id: self.id,
            member_id: self.member_id,
            date: self.date,
            duguje: self.duguje,
            potrazuje: self.potrazuje,
            description: None,
            member: None,
        }
    }
}

pub fn news_item(id: i64, title: &str, category_id: i64) -> NewsItem {
    NewsItem {
        id,
        title: title.to_string(),
        content: None,
        full_text: None,
        category_id: Some(category_id),
        category: None,
        date: None,
        posted_by: Some("admin".to_string()),
        images: None,
        created_at: None,
    }
}

pub fn category(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
    }
}

pub fn advertisement(id: i64, title: &str) -> Advertisement {
    Advertisement {
        id,
        title: title.to_string(),
        full_text: Some("Tekst oglasa.".to_string()),
        phone: Some("067123456".to_string()),
        created_at: None,
    }
}

/// Builder for test [`CongressParticipant`] instances.
#[derive(Debug, Clone)]
pub struct CongressBuilder {
    id: i64,
    name: String,
    email: Option<String>,
    company: Option<String>,
    paid: bool,
    file: Option<String>,
}

impl CongressBuilder {
    pub fn new(id: i64) -> Self {
        Self {
            id,
            name: format!("Participant {}", id),
            email: None,
            company: None,
            paid: false,
            file: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn company(mut self, company: impl Into<String>) -> Self {
        self.company = Some(company.into());
        self
    }

    pub fn paid(mut self, paid: bool) -> Self {
        self.paid = paid;
        self
    }

    pub fn file(mut self, path: impl Into<String>) -> Self {
        self.file = Some(path.into());
        self
    }

    pub fn build(self) -> CongressParticipant {
        CongressParticipant {
            id: self.id,
            name: self.name,
            vocation: None,
            company: self.company,
            email: self.email,
            phone: None,
            paid: self.paid,
            file: self.file,
            created_at: None,
        }
    }
}
