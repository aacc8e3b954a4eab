//! Directory resources: members, cities, licenses, companies

use async_trait::async_trait;

use crate::client::body::Payload;
use crate::client::http::RegistryClient;
use crate::client::models::{
    City, Company, CompanyPayload, License, LicensePayload, Member, MemberPayload,
};
use crate::error::Result;

#[async_trait]
pub trait DirectoryApi {
    async fn list_members(&self) -> Result<Vec<Member>>;
    async fn get_member(&self, id: i64) -> Result<Member>;
    async fn create_member(&self, payload: &MemberPayload) -> Result<Member>;
    async fn update_member(&self, id: i64, payload: &MemberPayload) -> Result<Member>;
    async fn delete_member(&self, id: i64) -> Result<()>;

    async fn list_cities(&self) -> Result<Vec<City>>;

    async fn list_licenses(&self) -> Result<Vec<License>>;
    async fn get_license(&self, id: i64) -> Result<License>;
    async fn create_license(&self, payload: &LicensePayload) -> Result<License>;
    async fn update_license(&self, id: i64, payload: &LicensePayload) -> Result<License>;
    async fn delete_license(&self, id: i64) -> Result<()>;

    async fn list_companies(&self) -> Result<Vec<Company>>;
    async fn get_company(&self, id: i64) -> Result<Company>;
    async fn create_company(&self, payload: &CompanyPayload) -> Result<Company>;
    async fn update_company(&self, id: i64, payload: &CompanyPayload) -> Result<Company>;
    async fn delete_company(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl DirectoryApi for RegistryClient {
    async fn list_members(&self) -> Result<Vec<Member>> {
        self.get_json("/member").await
    }

    async fn get_member(&self, id: i64) -> Result<Member> {
        self.get_json(&format!("/member/{}", id)).await
    }

    async fn create_member(&self, payload: &MemberPayload) -> Result<Member> {
        self.post("/member", payload.to_body()?).await
    }

    async fn update_member(&self, id: i64, payload: &MemberPayload) -> Result<Member> {
        self.put(&format!("/member/{}", id), payload.to_body()?).await
    }

    async fn delete_member(&self, id: i64) -> Result<()> {
        self.delete(&format!("/member/{}", id)).await
    }

    async fn list_cities(&self) -> Result<Vec<City>> {
        self.get_json("/cities").await
    }

    async fn list_licenses(&self) -> Result<Vec<License>> {
        self.get_json("/licenses").await
    }

    async fn get_license(&self, id: i64) -> Result<License> {
        self.get_json(&format!("/licenses/{}", id)).await
    }

    async fn create_license(&self, payload: &LicensePayload) -> Result<License> {
        self.post("/licenses", payload.to_body()?).await
    }

    async fn update_license(&self, id: i64, payload: &LicensePayload) -> Result<License> {
        self.put(&format!("/licenses/{}", id), payload.to_body()?).await
    }

    async fn delete_license(&self, id: i64) -> Result<()> {
        self.delete(&format!("/licenses/{}", id)).await
    }

    async fn list_companies(&self) -> Result<Vec<Company>> {
        self.get_json("/companies").await
    }

    async fn get_company(&self, id: i64) -> Result<Company> {
        self.get_json(&format!("/companies/{}", id)).await
    }

    async fn create_company(&self, payload: &CompanyPayload) -> Result<Company> {
        self.post("/companies", payload.to_body()?).await
    }

    async fn update_company(&self, id: i64, payload: &CompanyPayload) -> Result<Company> {
        self.put(&format!("/companies/{}", id), payload.to_body()?).await
    }

    async fn delete_company(&self, id: i64) -> Result<()> {
        self.delete(&format!("/companies/{}", id)).await
    }
}
