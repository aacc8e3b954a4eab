//! Staff resources: chamber employees and external consultants

use async_trait::async_trait;

use crate::client::body::Payload;
use crate::client::http::RegistryClient;
use crate::client::models::{
    Consultant, ConsultantPayload, ContractPayload, Disposition, Employee, EmployeeFileField,
    EmployeePayload,
};
use crate::error::Result;

#[async_trait]
pub trait StaffApi {
    async fn list_employees(&self) -> Result<Vec<Employee>>;
    async fn get_employee(&self, id: i64) -> Result<Employee>;
    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee>;
    async fn update_employee(&self, id: i64, payload: &EmployeePayload) -> Result<Employee>;
    async fn delete_employee(&self, id: i64) -> Result<()>;
    /// Fetch one of the employee's file slots as raw bytes
    async fn fetch_employee_file(
        &self,
        id: i64,
        field: EmployeeFileField,
        disposition: Disposition,
    ) -> Result<Vec<u8>>;
    async fn fetch_employee_contract(
        &self,
        id: i64,
        contract_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>>;
    async fn remove_employee_contract(&self, id: i64, contract_id: i64) -> Result<()>;

    async fn list_consultants(&self) -> Result<Vec<Consultant>>;
    async fn get_consultant(&self, id: i64) -> Result<Consultant>;
    async fn create_consultant(&self, payload: &ConsultantPayload) -> Result<Consultant>;
    async fn update_consultant(&self, id: i64, payload: &ConsultantPayload) -> Result<Consultant>;
    async fn delete_consultant(&self, id: i64) -> Result<()>;
    async fn add_consultant_contract(
        &self,
        id: i64,
        payload: &ContractPayload,
    ) -> Result<Consultant>;
    async fn remove_consultant_contract(&self, id: i64, contract_id: i64) -> Result<()>;
    async fn fetch_consultant_personal_id(
        &self,
        id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>>;
    async fn fetch_consultant_contract(
        &self,
        id: i64,
        contract_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>>;
}

#[async_trait]
impl StaffApi for RegistryClient {
    async fn list_employees(&self) -> Result<Vec<Employee>> {
        self.get_json("/employees").await
    }

    async fn get_employee(&self, id: i64) -> Result<Employee> {
        self.get_json(&format!("/employees/{}", id)).await
    }

    async fn create_employee(&self, payload: &EmployeePayload) -> Result<Employee> {
        self.post("/employees", payload.to_body()?).await
    }

    async fn update_employee(&self, id: i64, payload: &EmployeePayload) -> Result<Employee> {
        self.put(&format!("/employees/{}", id), payload.to_body()?).await
    }

    async fn delete_employee(&self, id: i64) -> Result<()> {
        self.delete(&format!("/employees/{}", id)).await
    }

    async fn fetch_employee_file(
        &self,
        id: i64,
        field: EmployeeFileField,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.get_blob(&format!("/employees/{}/file/{}", id, field.as_str()), disposition)
            .await
    }

    async fn fetch_employee_contract(
        &self,
        id: i64,
        contract_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.get_blob(
            &format!("/employees/{}/contracts/{}/file", id, contract_id),
            disposition,
        )
        .await
    }

    async fn remove_employee_contract(&self, id: i64, contract_id: i64) -> Result<()> {
        self.delete(&format!("/employees/{}/contracts/{}", id, contract_id))
            .await
    }

    async fn list_consultants(&self) -> Result<Vec<Consultant>> {
        self.get_json("/external-consultants").await
    }

    async fn get_consultant(&self, id: i64) -> Result<Consultant> {
        self.get_json(&format!("/external-consultants/{}", id)).await
    }

    async fn create_consultant(&self, payload: &ConsultantPayload) -> Result<Consultant> {
        self.post("/external-consultants", payload.to_body()?).await
    }

    async fn update_consultant(&self, id: i64, payload: &ConsultantPayload) -> Result<Consultant> {
        self.put(&format!("/external-consultants/{}", id), payload.to_body()?)
            .await
    }

    async fn delete_consultant(&self, id: i64) -> Result<()> {
        self.delete(&format!("/external-consultants/{}", id)).await
    }

    async fn add_consultant_contract(
        &self,
        id: i64,
        payload: &ContractPayload,
    ) -> Result<Consultant> {
        self.post(&format!("/external-consultants/{}/contracts", id), payload.to_body()?)
            .await
    }

    async fn remove_consultant_contract(&self, id: i64, contract_id: i64) -> Result<()> {
        self.delete(&format!("/external-consultants/{}/contracts/{}", id, contract_id))
            .await
    }

    async fn fetch_consultant_personal_id(
        &self,
        id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.get_blob(
            &format!("/external-consultants/{}/file/personal_id", id),
            disposition,
        )
        .await
    }

    async fn fetch_consultant_contract(
        &self,
        id: i64,
        contract_id: i64,
        disposition: Disposition,
    ) -> Result<Vec<u8>> {
        self.get_blob(
            &format!("/external-consultants/{}/contracts/{}/file", id, contract_id),
            disposition,
        )
        .await
    }
}
