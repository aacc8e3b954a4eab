//! Cached wrapper for the registry API client
//!
//! Wraps any [`RegistryApi`] implementation with transparent read-through
//! caching. Every mutation passes through to the inner client and, on
//! success, drops every cached entry of the resource family it touched,
//! so the next read re-fetches. Nothing is patched optimistically.

use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde::{Serialize, de::DeserializeOwned};

use crate::cache::{CacheStorage, CacheTtl, cache_key};
use crate::client::api::{AuthApi, ContentApi, DirectoryApi, RecordsApi, StaffApi};
use crate::client::models::{
    Advertisement, AdvertisementPayload, Category, Certificate, CertificateFilePayload,
    CertificatePayload, City, Company, CompanyPayload, CongressParticipant, Consultant,
    ConsultantPayload, ContractPayload, Disposition, Employee, EmployeeFileField, EmployeePayload,
    FinancePayload, FinanceRecord, HomePage, HomePagePayload, License, LicensePayload,
    LoginRequest, LoginResponse, Member, MemberPayload, NewsItem, NewsPayload, NewsUpdatePayload,
};
use crate::client::RegistryApi;
use crate::error::Result;

/// Cached wrapper for any RegistryApi implementation.
///
/// Cache can be disabled via the `enabled` flag (for `--no-cache`); a
/// cache that fails to open degrades to pass-through.
pub struct CachedRegistryClient<C: RegistryApi> {
    inner: Arc<C>,
    cache: Option<Mutex<CacheStorage>>,
}

impl<C: RegistryApi> CachedRegistryClient<C> {
    pub fn new(inner: C, enabled: bool) -> Self {
        let cache = if enabled {
            CacheStorage::open().ok().map(Mutex::new)
        } else {
            None
        };
        Self {
            inner: Arc::new(inner),
            cache,
        }
    }

    /// Wrapper with a specific storage, for tests
    #[cfg(test)]
    pub fn with_storage(inner: C, storage: CacheStorage) -> Self {
        Self {
            inner: Arc::new(inner),
            cache: Some(Mutex::new(storage)),
        }
    }

    fn get_cached<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let cache = self.cache.as_ref()?;
        let guard = cache.lock().ok()?;
        guard
            .get(key)
            .ok()
            .flatten()
            .and_then(|data| serde_json::from_slice(&data).ok())
    }

    fn set_cached<T: Serialize>(
        &self,
        key: &str,
        data: &T,
        resource: &str,
        endpoint: &str,
        ttl: Duration,
    ) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
            && let Ok(json) = serde_json::to_vec(data)
        {
            let _ = guard.put(key, &json, resource, endpoint, ttl);
        }
    }

    fn invalidate(&self, resources: &[&str]) {
        if let Some(ref cache) = self.cache
            && let Ok(guard) = cache.lock()
        {
            for resource in resources {
                match guard.delete_by_resource(resource) {
                    Ok(n) if n > 0 => log::debug!("Invalidated {} {} entries", n, resource),
                    Ok(_) => {}
                    Err(e) => log::warn!("Cache invalidation failed for {}: {}", resource, e),
                }
            }
        }
    }

    /// Serve from cache when fresh, fetch and store otherwise
    async fn read_through<T, Fut>(
        &self,
        resource: &str,
        endpoint: &str,
        ttl: Duration,
        fetch: Fut,
    ) -> Result<T>
    where
        T: Serialize + DeserializeOwned,
        Fut: Future<Output = Result<T>> + Send,
    {
        let key = cache_key(endpoint, &[]);
        if let Some(cached) = self.get_cached(&key) {
            log::debug!("Cache hit: {}", endpoint);
            return Ok(cached);
        }

        let result = fetch.await?;
        self.set_cached(&key, &result, resource, endpoint, ttl);
        Ok(result)
    }

    /// Run a mutation, then drop every entry of the touched resources
    async fn write_through<T, Fut>(&self, resources: &[&str], op: Fut) -> Result<T>
    where
        Fut: Future<Output = Result<T>> + Send,
    {
        let result = op.await?;
        self.invalidate(resources);
        Ok(result)
    }
}

#[async_trait]
impl<C: RegistryApi + 'static> AuthApi for CachedRegistryClient<C> {
    /// Never cached
    async fn login(&self, request: &LoginRequest) -> Result<LoginResponse> {
        self.inner.login(request).await
    }
}

#[async_trait]
impl<C: RegistryApi + 'static> DirectoryApi for CachedRegistryClient<C> {
    async fn list_members(&self) -> Result<Vec<Member>> {
        self.read_through("member", "/member", CacheTtl::LIST, self.inner.list_members())
            .await
    }

    async fn get_member(&self, id: i64) -> Result<Member> {
        self.read_through(
            "member",
            &format!("/member/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_member(id),
        )
        .await
    }

    async fn create_member(&self, payload: &MemberPayload) -> Result<Member> {
        self.write_through(&["member"], self.inner.create_member(payload))
            .await
    }

    async fn update_member(&self, id: i64, payload: &MemberPayload) -> Result<Member> {
        self.write_through(&["member"], self.inner.update_member(id, payload))
            .await
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        // Licenses and ledgers embed the member, drop them too
        self.write_through(
            &["member", "license", "finance"],
            self.inner.delete_member(id),
        )
        .await
    }

    async fn list_cities(&self) -> Result<Vec<City>> {
        self.read_through("city", "/cities", CacheTtl::CITIES, self.inner.list_cities())
            .await
    }

    async fn list_licenses(&self) -> Result<Vec<License>> {
        self.read_through(
            "license",
            "/licenses",
            CacheTtl::LIST,
            self.inner.list_licenses(),
        )
        .await
    }

    async fn get_license(&self, id: i64) -> Result<License> {
        self.read_through(
            "license",
            &format!("/licenses/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_license(id),
        )
        .await
    }

    async fn create_license(&self, payload: &LicensePayload) -> Result<License> {
        // Members embed their licenses, so both families go stale
        self.write_through(&["license", "member"], self.inner.create_license(payload))
            .await
    }

    async fn update_license(&self, id: i64, payload: &LicensePayload) -> Result<License> {
        self.write_through(&["license", "member"], self.inner.update_license(id, payload))
            .await
    }

    async fn delete_license(&self, id: i64) -> Result<()> {
        self.write_through(&["license", "member"], self.inner.delete_license(id))
            .await
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.read_through(
            "company",
            "/companies",
            CacheTtl::LIST,
            self.inner.list_companies(),
        )
        .await
    }

    async fn get_company(&self, id: i64) -> Result<Company> {
        self.read_through(
            "company",
            &format!("/companies/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_company(id),
        )
        .await
    }

    async fn create_company(&self, payload: &CompanyPayload) -> Result<Company> {
        self.write_through(&["company"], self.inner.create_company(payload))
            .await
    }

    async fn update_company(&self, id: i64, payload: &CompanyPayload) -> Result<Company> {
        self.write_through(&["company"], self.inner.update_company(id, payload))
            .await
    }

    async fn delete_company(&self, id: i64) -> Result<()> {
        self.write_through(&["company"], self.inner.delete_company(id))
            .await
    }
}

#[async_trait]
impl<C: RegistryApi + 'static> StaffApi for CachedRegistryClient<C> {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.read_through(
            "employee",
            "/employees",
            CacheTtl::LIST,
            self.inner.list_employees(),
        )
        .await
    }

    async fn get_employee(&self, id: i64) -> Result<Employee> {
        self.read_through(
            "employee",
            &format!("/employees/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_employee(id),
        )
        .await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee> {
        self.write_through(&["employee"], self.inner.create_employee(payload))
            .await
    }

    async fn update_employee(&self, id: i64, payload: &EmployeePayload) -> Result<Employee> {
        self.write_through(&["employee"], self.inner.update_employee(id, payload))
            .await
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        self.write_through(&["employee"], self.inner.delete_employee(id))
            .await
    }

    /// Blobs are never cached
    async fn fetch_employee_file(
        &self,
        id: i64,
        field: EmployeeFileField,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.inner.fetch_employee_file(id, field, disposition).await
    }

    async fn fetch_employee_contract(
        &self,
        id: i64,
        contract_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.inner
            .fetch_employee_contract(id, contract_id, disposition)
            .await
    }

    async fn remove_employee_contract(&self, id: i64, contract_id: i64) -> Result<()> {
        self.write_through(
            &["employee"],
            self.inner.remove_employee_contract(id, contract_id),
        )
        .await
    }

    async fn list_consultants(&self) -> Result<Vec<Consultant>> {
        self.read_through(
            "consultant",
            "/external-consultants",
            CacheTtl::LIST,
            self.inner.list_consultants(),
        )
        .await
    }

    async fn get_consultant(&self, id: i64) -> Result<Consultant> {
        self.read_through(
            "consultant",
            &format!("/external-consultants/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_consultant(id),
        )
        .await
    }

    async fn create_consultant(&self, payload: &ConsultantPayload) -> Result<Consultant> {
        self.write_through(&["consultant"], self.inner.create_consultant(payload))
            .await
    }

    async fn update_consultant(&self, id: i64, payload: &ConsultantPayload) -> Result<Consultant> {
        self.write_through(&["consultant"], self.inner.update_consultant(id, payload))
            .await
    }

    async fn delete_consultant(&self, id: i64) -> Result<()> {
        self.write_through(&["consultant"], self.inner.delete_consultant(id))
            .await
    }

    async fn add_consultant_contract(
        &self,
        id: i64,
        payload: &ContractPayload,
    ) -> Result<Consultant> {
        self.write_through(
            &["consultant"],
            self.inner.add_consultant_contract(id, payload),
        )
        .await
    }

    async fn remove_consultant_contract(&self, id: i64, contract_id: i64) -> Result<()> {
        self.write_through(
            &["consultant"],
            self.inner.remove_consultant_contract(id, contract_id),
        )
        .await
    }

    async fn fetch_consultant_personal_id(
        &self,
        id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.inner.fetch_consultant_personal_id(id, disposition).await
    }

    async fn fetch_consultant_contract(
        &self,
        id: i64,
        contract_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.inner
            .fetch_consultant_contract(id, contract_id, disposition)
            .await
    }
}

#[async_trait]
impl<C: RegistryApi + 'static> RecordsApi for CachedRegistryClient<C> {
    async fn list_certificates(&self) -> Result<Vec<Certificate>> {
        self.read_through(
            "certificate",
            "/certificates",
            CacheTtl::LIST,
            self.inner.list_certificates(),
        )
        .await
    }

    async fn get_certificate(&self, id: i64) -> Result<Certificate> {
        self.read_through(
            "certificate",
            &format!("/certificates/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_certificate(id),
        )
        .await
    }

    async fn create_certificate(&self, payload: &CertificatePayload) -> Result<Certificate> {
        self.write_through(&["certificate"], self.inner.create_certificate(payload))
            .await
    }

    async fn add_certificate_file(
        &self,
        id: i64,
        payload: &CertificateFilePayload,
    ) -> Result<Certificate> {
        self.write_through(
            &["certificate"],
            self.inner.add_certificate_file(id, payload),
        )
        .await
    }

    async fn remove_certificate_file(&self, id: i64, file_id: i64) -> Result<()> {
        self.write_through(
            &["certificate"],
            self.inner.remove_certificate_file(id, file_id),
        )
        .await
    }

    async fn fetch_certificate_file(
        &self,
        id: i64,
        file_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.inner
            .fetch_certificate_file(id, file_id, disposition)
            .await
    }

    async fn delete_certificate(&self, id: i64) -> Result<()> {
        self.write_through(&["certificate"], self.inner.delete_certificate(id))
            .await
    }

    async fn list_finances(&self) -> Result<Vec<FinanceRecord>> {
        self.read_through(
            "finance",
            "/finances",
            CacheTtl::LIST,
            self.inner.list_finances(),
        )
        .await
    }

    async fn get_finance(&self, id: i64) -> Result<FinanceRecord> {
        self.read_through(
            "finance",
            &format!("/finances/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_finance(id),
        )
        .await
    }

    async fn member_ledger(&self, member_id: i64) -> Result<Vec<FinanceRecord>> {
        self.read_through(
            "finance",
            &format!("/finances/member/{}", member_id),
            CacheTtl::LEDGER,
            self.inner.member_ledger(member_id),
        )
        .await
    }

    async fn create_finance(&self, payload: &FinancePayload) -> Result<FinanceRecord> {
        self.write_through(&["finance"], self.inner.create_finance(payload))
            .await
    }

    async fn update_finance(&self, id: i64, payload: &FinancePayload) -> Result<FinanceRecord> {
        self.write_through(&["finance"], self.inner.update_finance(id, payload))
            .await
    }

    async fn delete_finance(&self, id: i64) -> Result<()> {
        self.write_through(&["finance"], self.inner.delete_finance(id))
            .await
    }
}

#[async_trait]
impl<C: RegistryApi + 'static> ContentApi for CachedRegistryClient<C> {
    async fn list_news(&self) -> Result<Vec<NewsItem>> {
        self.read_through("news", "/news", CacheTtl::LIST, self.inner.list_news())
            .await
    }

    async fn news_for_category(&self, category_id: i64) -> Result<Vec<NewsItem>> {
        self.read_through(
            "news",
            &format!("/newsForCategory/{}", category_id),
            CacheTtl::LIST,
            self.inner.news_for_category(category_id),
        )
        .await
    }

    async fn get_news(&self, id: i64) -> Result<NewsItem> {
        self.read_through(
            "news",
            &format!("/news/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_news(id),
        )
        .await
    }

    async fn create_news(&self, payload: &NewsPayload) -> Result<NewsItem> {
        self.write_through(&["news"], self.inner.create_news(payload))
            .await
    }

    async fn update_news(&self, id: i64, payload: &NewsUpdatePayload) -> Result<NewsItem> {
        self.write_through(&["news"], self.inner.update_news(id, payload))
            .await
    }

    async fn delete_news(&self, id: i64) -> Result<()> {
        self.write_through(&["news"], self.inner.delete_news(id)).await
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        self.read_through(
            "category",
            "/category",
            CacheTtl::CATEGORIES,
            self.inner.list_categories(),
        )
        .await
    }

    async fn list_advertisements(&self) -> Result<Vec<Advertisement>> {
        self.read_through(
            "advertisement",
            "/advertisments",
            CacheTtl::LIST,
            self.inner.list_advertisements(),
        )
        .await
    }

    async fn get_advertisement(&self, id: i64) -> Result<Advertisement> {
        self.read_through(
            "advertisement",
            &format!("/advertisments/{}", id),
            CacheTtl::DETAIL,
            self.inner.get_advertisement(id),
        )
        .await
    }

    async fn create_advertisement(&self, payload: &AdvertisementPayload) -> Result<Advertisement> {
        self.write_through(
            &["advertisement"],
            self.inner.create_advertisement(payload),
        )
        .await
    }

    async fn update_advertisement(
        &self,
        id: i64,
        payload: &AdvertisementPayload,
    ) -> Result<Advertisement> {
        self.write_through(
            &["advertisement"],
            self.inner.update_advertisement(id, payload),
        )
        .await
    }

    async fn delete_advertisement(&self, id: i64) -> Result<()> {
        self.write_through(&["advertisement"], self.inner.delete_advertisement(id))
            .await
    }

    async fn list_congress_participants(&self) -> Result<Vec<CongressParticipant>> {
        self.read_through(
            "congress",
            "/congress",
            CacheTtl::LIST,
            self.inner.list_congress_participants(),
        )
        .await
    }

    async fn set_congress_payment(&self, id: i64, paid: bool) -> Result<()> {
        self.write_through(&["congress"], self.inner.set_congress_payment(id, paid))
            .await
    }

    async fn delete_congress_participant(&self, id: i64) -> Result<()> {
        self.write_through(&["congress"], self.inner.delete_congress_participant(id))
            .await
    }

    async fn get_homepage(&self) -> Result<HomePage> {
        self.read_through(
            "homepage",
            "/homePage",
            CacheTtl::HOMEPAGE,
            self.inner.get_homepage(),
        )
        .await
    }

    async fn update_homepage(&self, id: i64, payload: &HomePagePayload) -> Result<HomePage> {
        self.write_through(&["homepage"], self.inner.update_homepage(id, payload))
            .await
    }
}
