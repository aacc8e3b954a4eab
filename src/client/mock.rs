//! Mock registry client for testing
//!
//! Implements the API traits against in-memory stores so handlers and
//! the cache wrapper can be tested without a backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use std::sync::Mutex;

use super::api::{AuthApi, ContentApi, DirectoryApi, RecordsApi, StaffApi};
use super::body::{Payload, RequestBody};
use super::models::{
    Advertisement, AdvertisementPayload, Category, Certificate, CertificateFilePayload,
    CertificatePayload, City, Company, CompanyPayload, CongressParticipant, Consultant,
    ConsultantPayload, ContractPayload, Disposition, Employee, EmployeeFileField, EmployeePayload,
    FinancePayload, FinanceRecord, HomePage, HomePagePayload, License, LicensePayload,
    LoginRequest, LoginResponse, Member, MemberPayload, NewsItem, NewsPayload, NewsUpdatePayload,
};
use crate::error::{ApiError, Result};

/// Configure expected responses via builder methods, then hand the mock
/// to the code under test. Every call is counted under the method name;
/// create/update bodies are captured for assertions.
#[derive(Default)]
pub struct MockRegistryClient {
    members: Arc<Mutex<Vec<Member>>>,
    cities: Arc<Mutex<Vec<City>>>,
    licenses: Arc<Mutex<Vec<License>>>,
    companies: Arc<Mutex<Vec<Company>>>,
    employees: Arc<Mutex<Vec<Employee>>>,
    consultants: Arc<Mutex<Vec<Consultant>>>,
    certificates: Arc<Mutex<Vec<Certificate>>>,
    finances: Arc<Mutex<Vec<FinanceRecord>>>,
    news: Arc<Mutex<Vec<NewsItem>>>,
    categories: Arc<Mutex<Vec<Category>>>,
    advertisements: Arc<Mutex<Vec<Advertisement>>>,
    congress: Arc<Mutex<Vec<CongressParticipant>>>,
    homepage: Arc<Mutex<Option<HomePage>>>,
    login_response: Arc<Mutex<Option<LoginResponse>>>,
    blob: Arc<Mutex<Vec<u8>>>,
    /// Error to return, consumed on first use
    error: Arc<Mutex<Option<ApiError>>>,
    call_counts: Arc<Mutex<HashMap<&'static str, usize>>>,
    captured_bodies: Arc<Mutex<Vec<(String, RequestBody)>>>,
}

impl MockRegistryClient {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_members(self, members: Vec<Member>) -> Self {
        *self.members.lock().unwrap() = members;
        self
    }

    pub fn with_cities(self, cities: Vec<City>) -> Self {
        *self.cities.lock().unwrap() = cities;
        self
    }

    pub fn with_licenses(self, licenses: Vec<License>) -> Self {
        *self.licenses.lock().unwrap() = licenses;
        self
    }

    pub fn with_companies(self, companies: Vec<Company>) -> Self {
        *self.companies.lock().unwrap() = companies;
        self
    }

    pub fn with_employees(self, employees: Vec<Employee>) -> Self {
        *self.employees.lock().unwrap() = employees;
        self
    }

    pub fn with_consultants(self, consultants: Vec<Consultant>) -> Self {
        *self.consultants.lock().unwrap() = consultants;
        self
    }

    pub fn with_certificates(self, certificates: Vec<Certificate>) -> Self {
        *self.certificates.lock().unwrap() = certificates;
        self
    }

    pub fn with_finances(self, finances: Vec<FinanceRecord>) -> Self {
        *self.finances.lock().unwrap() = finances;
        self
    }

    pub fn with_news(self, news: Vec<NewsItem>) -> Self {
        *self.news.lock().unwrap() = news;
        self
    }

    pub fn with_categories(self, categories: Vec<Category>) -> Self {
        *self.categories.lock().unwrap() = categories;
        self
    }

    pub fn with_advertisements(self, advertisements: Vec<Advertisement>) -> Self {
        *self.advertisements.lock().unwrap() = advertisements;
        self
    }

    pub fn with_congress(self, congress: Vec<CongressParticipant>) -> Self {
        *self.congress.lock().unwrap() = congress;
        self
    }

    pub fn with_homepage(self, homepage: HomePage) -> Self {
        *self.homepage.lock().unwrap() = Some(homepage);
        self
    }

    pub fn with_login_response(self, response: LoginResponse) -> Self {
        *self.login_response.lock().unwrap() = Some(response);
        self
    }

    pub fn with_blob(self, bytes: Vec<u8>) -> Self {
        *self.blob.lock().unwrap() = bytes;
        self
    }

    pub fn with_error(self, error: ApiError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    /// Number of calls recorded under the given method name
    pub fn call_count(&self, method: &str) -> usize {
        self.call_counts
            .lock().unwrap()
            .get(method)
            .copied()
            .unwrap_or(0)
    }

    /// Bodies captured from create/update calls, oldest first
    pub fn captured_bodies(&self) -> Vec<(String, RequestBody)> {
        self.captured_bodies.lock().unwrap().clone()
    }

    fn record(&self, method: &'static str) -> Result<()> {
        *self.call_counts.lock().unwrap().entry(method).or_insert(0) += 1;
        if let Some(error) = self.error.lock().unwrap().take() {
            return Err(error.into());
        }
        Ok(())
    }

    fn capture(&self, method: &str, payload: &dyn Payload) -> Result<()> {
        let body = payload.to_body()?;
        self.captured_bodies
            .lock()
            .unwrap()
            .push((method.to_string(), body));
        Ok(())
    }

    fn find_by<T: Clone>(
        store: &Mutex<Vec<T>>,
        id: i64,
        get_id: impl Fn(&T) -> i64,
    ) -> Result<T> {
        store
            .lock()
            .unwrap()
            .iter()
            .find(|item| get_id(item) == id)
            .cloned()
            .ok_or_else(|| ApiError::NotFound(format!("id {}", id)).into())
    }
}

#[async_trait]
impl AuthApi for MockRegistryClient {
    async fn login(&self, _request: &LoginRequest) -> Result<LoginResponse> {
        self.record("login")?;
        self.login_response
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::Unauthorized.into())
    }
}

#[async_trait]
impl DirectoryApi for MockRegistryClient {
    async fn list_members(&self) -> Result<Vec<Member>> {
        self.record("list_members")?;
        Ok(self.members.lock().unwrap().clone())
    }

    async fn get_member(&self, id: i64) -> Result<Member> {
        self.record("get_member")?;
        Self::find_by(&self.members, id, |m| m.id)
    }

    async fn create_member(&self, payload: &MemberPayload) -> Result<Member> {
        self.record("create_member")?;
        self.capture("create_member", payload)?;
        Self::find_by(&self.members, 1, |m| m.id)
    }

    async fn update_member(&self, id: i64, payload: &MemberPayload) -> Result<Member> {
        self.record("update_member")?;
        self.capture("update_member", payload)?;
        Self::find_by(&self.members, id, |m| m.id)
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        self.record("delete_member")?;
        self.members.lock().unwrap().retain(|m| m.id != id);
        Ok(())
    }

    async fn list_cities(&self) -> Result<Vec<City>> {
        self.record("list_cities")?;
        Ok(self.cities.lock().unwrap().clone())
    }

    async fn list_licenses(&self) -> Result<Vec<License>> {
        self.record("list_licenses")?;
        Ok(self.licenses.lock().unwrap().clone())
    }

    async fn get_license(&self, id: i64) -> Result<License> {
        self.record("get_license")?;
        Self::find_by(&self.licenses, id, |l| l.id)
    }

    async fn create_license(&self, payload: &LicensePayload) -> Result<License> {
        self.record("create_license")?;
        self.capture("create_license", payload)?;
        Self::find_by(&self.licenses, 1, |l| l.id)
    }

    async fn update_license(&self, id: i64, payload: &LicensePayload) -> Result<License> {
        self.record("update_license")?;
        self.capture("update_license", payload)?;
        Self::find_by(&self.licenses, id, |l| l.id)
    }

    async fn delete_license(&self, id: i64) -> Result<()> {
        self.record("delete_license")?;
        self.licenses.lock().unwrap().retain(|l| l.id != id);
        Ok(())
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.record("list_companies")?;
        Ok(self.companies.lock().unwrap().clone())
    }

    async fn get_company(&self, id: i64) -> Result<Company> {
        self.record("get_company")?;
        Self::find_by(&self.companies, id, |c| c.id)
    }

    async fn create_company(&self, payload: &CompanyPayload) -> Result<Company> {
        self.record("create_company")?;
        self.capture("create_company", payload)?;
        Self::find_by(&self.companies, 1, |c| c.id)
    }

    async fn update_company(&self, id: i64, payload: &CompanyPayload) -> Result<Company> {
        self.record("update_company")?;
        self.capture("update_company", payload)?;
        Self::find_by(&self.companies, id, |c| c.id)
    }

    async fn delete_company(&self, id: i64) -> Result<()> {
        self.record("delete_company")?;
        self.companies.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }
}

#[async_trait]
impl StaffApi for MockRegistryClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.record("list_employees")?;
        Ok(self.employees.lock().unwrap().clone())
    }

    async fn get_employee(&self, id: i64) -> Result<Employee> {
        self.record("get_employee")?;
        Self::find_by(&self.employees, id, |e| e.id)
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee> {
        self.record("create_employee")?;
        self.capture("create_employee", payload)?;
        Self::find_by(&self.employees, 1, |e| e.id)
    }

    async fn update_employee(&self, id: i64, payload: &EmployeePayload) -> Result<Employee> {
        self.record("update_employee")?;
        self.capture("update_employee", payload)?;
        Self::find_by(&self.employees, id, |e| e.id)
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        self.record("delete_employee")?;
        self.employees.lock().unwrap().retain(|e| e.id != id);
        Ok(())
    }

    async fn fetch_employee_file(
        &self,
        _id: i64,
        _field: EmployeeFileField,
        _disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.record("fetch_employee_file")?;
        Ok(self.blob.lock().unwrap().clone())
    }

    async fn fetch_employee_contract(
        &self,
        _id: i64,
        _contract_id: i64,
        _disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.record("fetch_employee_contract")?;
        Ok(self.blob.lock().unwrap().clone())
    }

    async fn remove_employee_contract(&self, _id: i64, _contract_id: i64) -> Result<()> {
        self.record("remove_employee_contract")
    }

    async fn list_consultants(&self) -> Result<Vec<Consultant>> {
        self.record("list_consultants")?;
        Ok(self.consultants.lock().unwrap().clone())
    }

    async fn get_consultant(&self, id: i64) -> Result<Consultant> {
        self.record("get_consultant")?;
        Self::find_by(&self.consultants, id, |c| c.id)
    }

    async fn create_consultant(&self, payload: &ConsultantPayload) -> Result<Consultant> {
        self.record("create_consultant")?;
        self.capture("create_consultant", payload)?;
        Self::find_by(&self.consultants, 1, |c| c.id)
    }

    async fn update_consultant(&self, id: i64, payload: &ConsultantPayload) -> Result<Consultant> {
        self.record("update_consultant")?;
        self.capture("update_consultant", payload)?;
        Self::find_by(&self.consultants, id, |c| c.id)
    }

    async fn delete_consultant(&self, id: i64) -> Result<()> {
        self.record("delete_consultant")?;
        self.consultants.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn add_consultant_contract(
        &self,
        id: i64,
        payload: &ContractPayload,
    ) -> Result<Consultant> {
        self.record("add_consultant_contract")?;
        self.capture("add_consultant_contract", payload)?;
        Self::find_by(&self.consultants, id, |c| c.id)
    }

    async fn remove_consultant_contract(&self, _id: i64, _contract_id: i64) -> Result<()> {
        self.record("remove_consultant_contract")
    }

    async fn fetch_consultant_personal_id(
        &self,
        _id: i64,
        _disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.record("fetch_consultant_personal_id")?;
        Ok(self.blob.lock().unwrap().clone())
    }

    async fn fetch_consultant_contract(
        &self,
        _id: i64,
        _contract_id: i64,
        _disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.record("fetch_consultant_contract")?;
        Ok(self.blob.lock().unwrap().clone())
    }
}

#[async_trait]
impl RecordsApi for MockRegistryClient {
    async fn list_certificates(&self) -> Result<Vec<Certificate>> {
        self.record("list_certificates")?;
        Ok(self.certificates.lock().unwrap().clone())
    }

    async fn get_certificate(&self, id: i64) -> Result<Certificate> {
        self.record("get_certificate")?;
        Self::find_by(&self.certificates, id, |c| c.id)
    }

    async fn create_certificate(&self, payload: &CertificatePayload) -> Result<Certificate> {
        self.record("create_certificate")?;
        self.capture("create_certificate", payload)?;
        Self::find_by(&self.certificates, 1, |c| c.id)
    }

    async fn add_certificate_file(
        &self,
        id: i64,
        payload: &CertificateFilePayload,
    ) -> Result<Certificate> {
        self.record("add_certificate_file")?;
        self.capture("add_certificate_file", payload)?;
        Self::find_by(&self.certificates, id, |c| c.id)
    }

    async fn remove_certificate_file(&self, _id: i64, _file_id: i64) -> Result<()> {
        self.record("remove_certificate_file")
    }

    async fn fetch_certificate_file(
        &self,
        _id: i64,
        _file_id: i64,
        _disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.record("fetch_certificate_file")?;
        Ok(self.blob.lock().unwrap().clone())
    }

    async fn delete_certificate(&self, id: i64) -> Result<()> {
        self.record("delete_certificate")?;
        self.certificates.lock().unwrap().retain(|c| c.id != id);
        Ok(())
    }

    async fn list_finances(&self) -> Result<Vec<FinanceRecord>> {
        self.record("list_finances")?;
        Ok(self.finances.lock().unwrap().clone())
    }

    async fn get_finance(&self, id: i64) -> Result<FinanceRecord> {
        self.record("get_finance")?;
        Self::find_by(&self.finances, id, |r| r.id)
    }

    async fn member_ledger(&self, member_id: i64) -> Result<Vec<FinanceRecord>> {
        self.record("member_ledger")?;
        Ok(self
            .finances
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.member_id == member_id)
            .cloned()
            .collect())
    }

    async fn create_finance(&self, payload: &FinancePayload) -> Result<FinanceRecord> {
        self.record("create_finance")?;
        self.capture("create_finance", payload)?;
        Self::find_by(&self.finances, 1, |r| r.id)
    }

    async fn update_finance(&self, id: i64, payload: &FinancePayload) -> Result<FinanceRecord> {
        self.record("update_finance")?;
        self.capture("update_finance", payload)?;
        Self::find_by(&self.finances, id, |r| r.id)
    }

    async fn delete_finance(&self, id: i64) -> Result<()> {
        self.record("delete_finance")?;
        self.finances.lock().unwrap().retain(|r| r.id != id);
        Ok(())
    }
}

#[async_trait]
impl ContentApi for MockRegistryClient {
    async fn list_news(&self) -> Result<Vec<NewsItem>> {
        self.record("list_news")?;
        Ok(self.news.lock().unwrap().clone())
    }

    async fn news_for_category(&self, category_id: i64) -> Result<Vec<NewsItem>> {
        self.record("news_for_category")?;
        Ok(self
            .news
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.category_id == Some(category_id))
            .cloned()
            .collect())
    }

    async fn get_news(&self, id: i64) -> Result<NewsItem> {
        self.record("get_news")?;
        Self::find_by(&self.news, id, |n| n.id)
    }

    async fn create_news(&self, payload: &NewsPayload) -> Result<NewsItem> {
        self.record("create_news")?;
        self.capture("create_news", payload)?;
        Self::find_by(&self.news, 1, |n| n.id)
    }

    async fn update_news(&self, id: i64, payload: &NewsUpdatePayload) -> Result<NewsItem> {
        self.record("update_news")?;
        self.capture("update_news", payload)?;
        Self::find_by(&self.news, id, |n| n.id)
    }

    async fn delete_news(&self, id: i64) -> Result<()> {
        self.record("delete_news")?;
        self.news.lock().unwrap().retain(|n| n.id != id);
        Ok(())
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.record("list_categories")?;
        Ok(self.categories.lock().unwrap().clone())
    }

    async fn list_advertisements(&self) -> Result<Vec<Advertisement>> {
        self.record("list_advertisements")?;
        Ok(self.advertisements.lock().unwrap().clone())
    }

    async fn get_advertisement(&self, id: i64) -> Result<Advertisement> {
        self.record("get_advertisement")?;
        Self::find_by(&self.advertisements, id, |a| a.id)
    }

    async fn create_advertisement(&self, payload: &AdvertisementPayload) -> Result<Advertisement> {
        self.record("create_advertisement")?;
        self.capture("create_advertisement", payload)?;
        Self::find_by(&self.advertisements, 1, |a| a.id)
    }

    async fn update_advertisement(
        &self,
        id: i64,
        payload: &AdvertisementPayload,
    ) -> Result<Advertisement> {
        self.record("update_advertisement")?;
        self.capture("update_advertisement", payload)?;
        Self::find_by(&self.advertisements, id, |a| a.id)
    }

    async fn delete_advertisement(&self, id: i64) -> Result<()> {
        self.record("delete_advertisement")?;
        self.advertisements.lock().unwrap().retain(|a| a.id != id);
        Ok(())
    }

    async fn list_congress_participants(&self) -> Result<Vec<CongressParticipant>> {
        self.record("list_congress_participants")?;
        Ok(self.congress.lock().unwrap().clone())
    }

    async fn set_congress_payment(&self, id: i64, paid: bool) -> Result<()> {
        self.record("set_congress_payment")?;
        if let Some(p) = self.congress.lock().unwrap().iter_mut().find(|p| p.id == id) {
            p.paid = paid;
        }
        Ok(())
    }

    async fn delete_congress_participant(&self, id: i64) -> Result<()> {
        self.record("delete_congress_participant")?;
        self.congress.lock().unwrap().retain(|p| p.id != id);
        Ok(())
    }

    async fn get_homepage(&self) -> Result<HomePage> {
        self.record("get_homepage")?;
        self.homepage
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::NotFound("homepage".to_string()).into())
    }

    async fn update_homepage(&self, id: i64, payload: &HomePagePayload) -> Result<HomePage> {
        self.record("update_homepage")?;
        self.capture("update_homepage", payload)?;
        let _ = id;
        self.homepage
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ApiError::NotFound("homepage".to_string()).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::*;
    use crate::error::Error;
    use chrono::NaiveDate;

    fn member_payload() -> MemberPayload {
        MemberPayload {
            name: "Ana".to_string(),
            surname: "Perić".to_string(),
            sex: "ženski".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 14).unwrap(),
            speciality: "Ortodoncija".to_string(),
            city_id: 18,
            company_id: None,
            fax_nbr: None,
            email: "ana@komora.me".to_string(),
            phone: "067111222".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_then_list_round_trip() {
        let mock =
            MockRegistryClient::new().with_members(vec![MemberBuilder::new(1).name("Ana").build()]);

        let created = mock.create_member(&member_payload()).await.unwrap();
        let listed = mock.list_members().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, created.id);
        assert_eq!(mock.call_count("create_member"), 1);
        assert_eq!(mock.captured_bodies().len(), 1);
    }

    #[tokio::test]
    async fn test_delete_then_list_removes_the_record() {
        let mock = MockRegistryClient::new().with_members(vec![
            MemberBuilder::new(1).build(),
            MemberBuilder::new(2).build(),
        ]);

        mock.delete_member(1).await.unwrap();
        let listed = mock.list_members().await.unwrap();

        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, 2);
    }

    #[tokio::test]
    async fn test_unknown_id_surfaces_not_found() {
        let mock = MockRegistryClient::new();

        let err = mock.get_member(99).await.unwrap_err();
        assert!(matches!(err, Error::Api(ApiError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_noop_update_passes_fields_through() {
        let mock =
            MockRegistryClient::new().with_members(vec![MemberBuilder::new(1).name("Ana").build()]);

        mock.update_member(1, &member_payload()).await.unwrap();

        let bodies = mock.captured_bodies();
        assert_eq!(bodies.len(), 1);
        match &bodies[0].1 {
            RequestBody::Json(v) => assert_eq!(v["name"], "Ana"),
            _ => panic!("member update must encode as JSON"),
        }
    }

    #[tokio::test]
    async fn test_scripted_error_is_consumed_once() {
        let mock = MockRegistryClient::new()
            .with_cities(vec![city(18, "Podgorica")])
            .with_error(ApiError::ServerError("boom".to_string()));

        assert!(mock.list_cities().await.is_err());
        assert!(mock.list_cities().await.is_ok());
    }
}
