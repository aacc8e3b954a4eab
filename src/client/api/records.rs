//! Record resources: certificates and membership-fee ledgers

use async_trait::async_trait;

use crate::client::body::Payload;
use crate::client::http::RegistryClient;
use crate::client::models::{
    Certificate, CertificateFilePayload, CertificatePayload, Disposition, FinancePayload,
    FinanceRecord,
};
use crate::error::Result;

#[async_trait]
pub trait RecordsApi {
    async fn list_certificates(&self) -> Result<Vec<Certificate>>;
    async fn get_certificate(&self, id: i64) -> Result<Certificate>;
    /// Certificates are created together with their scans; there is no
    /// update operation, files are added and removed individually.
    async fn create_certificate(&self, payload: &CertificatePayload) -> Result<Certificate>;
    async fn add_certificate_file(
        &self,
        id: i64,
        payload: &CertificateFilePayload,
    ) -> Result<Certificate>;
    async fn remove_certificate_file(&self, id: i64, file_id: i64) -> Result<()>;
    async fn fetch_certificate_file(
        &self,
        id: i64,
        file_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>>;
    async fn delete_certificate(&self, id: i64) -> Result<()>;

    async fn list_finances(&self) -> Result<Vec<FinanceRecord>>;
    async fn get_finance(&self, id: i64) -> Result<FinanceRecord>;
    /// All ledger rows for one member
    async fn member_ledger(&self, member_id: i64) -> Result<Vec<FinanceRecord>>;
    async fn create_finance(&self, payload: &FinancePayload) -> Result<FinanceRecord>;
    async fn update_finance(&self, id: i64, payload: &FinancePayload) -> Result<FinanceRecord>;
    async fn delete_finance(&self, id: i64) -> Result<()>;
}

#[async_trait]
impl RecordsApi for RegistryClient {
    async fn list_certificates(&self) -> Result<Vec<Certificate>> {
        self.get_json("/certificates").await
    }

    async fn get_certificate(&self, id: i64) -> Result<Certificate> {
        self.get_json(&format!("/certificates/{}", id)).await
    }

    async fn create_certificate(&self, payload: &CertificatePayload) -> Result<Certificate> {
        self.post("/certificates", payload.to_body()?).await
    }

    async fn add_certificate_file(
        &self,
        id: i64,
        payload: &CertificateFilePayload,
    ) -> Result<Certificate> {
        self.post(&format!("/certificates/{}/files", id), payload.to_body()?)
            .await
    }

    async fn remove_certificate_file(&self, id: i64, file_id: i64) -> Result<()> {
        self.delete(&format!("/certificates/{}/files/{}", id, file_id))
            .await
    }

    async fn fetch_certificate_file(
        &self,
        id: i64,
        file_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.get_blob(
            &format!("/certificates/{}/files/{}/file", id, file_id),
            disposition,
        )
        .await
    }

    async fn delete_certificate(&self, id: i64) -> Result<()> {
        self.delete(&format!("/certificates/{}", id)).await
    }

    async fn list_finances(&self) -> Result<Vec<FinanceRecord>> {
        self.get_json("/finances").await
    }

    async fn get_finance(&self, id: i64) -> Result<FinanceRecord> {
        self.get_json(&format!("/finances/{}", id)).await
    }

    async fn member_ledger(&self, member_id: i64) -> Result<Vec<FinanceRecord>> {
        self.get_json(&format!("/finances/member/{}", member_id)).await
    }

    async fn create_finance(&self, payload: &FinancePayload) -> Result<FinanceRecord> {
        self.post("/finances", payload.to_body()?).await
    }

    async fn update_finance(&self, id: i64, payload: &FinancePayload) -> Result<FinanceRecord> {
        self.put(&format!("/finances/{}", id), payload.to_body()?).await
    }

    async fn delete_finance(&self, id: i64) -> Result<()> {
        self.delete(&format!("/finances/{}", id)).await
    }
}
