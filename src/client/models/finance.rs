//! Membership-fee bookkeeping models

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::client::body::{Payload, RequestBody};
use crate::client::models::MemberSummary;
use crate::error::Result;

/// One debit/credit row in a member's fee ledger
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinanceRecord {
    pub id: i64,
    pub member_id: i64,
    #[serde(default)]
    pub date: Option<String>,
    /// Amount owed (debit)
    #[serde(default)]
    pub duguje: f64,
    /// Amount paid (credit)
    #[serde(default)]
    pub potrazuje: f64,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub member: Option<MemberSummary>,
}

/// Running totals over a ledger, computed locally
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct LedgerBalance {
    pub duguje: f64,
    pub potrazuje: f64,
    pub saldo: f64,
}

impl LedgerBalance {
    pub fn of(records: &[FinanceRecord]) -> Self {
        let duguje: f64 = records.iter().map(|r| r.duguje).sum();
        let potrazuje: f64 = records.iter().map(|r| r.potrazuje).sum();
        Self {
            duguje,
            potrazuje,
            saldo: potrazuje - duguje,
        }
    }
}

/// Fields submitted when recording a ledger entry
#[derive(Debug, Clone, Serialize)]
pub struct FinancePayload {
    pub member_id: i64,
    pub date: NaiveDate,
    pub duguje: f64,
    pub potrazuje: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Payload for FinancePayload {
    fn to_body(&self) -> Result<RequestBody> {
        Ok(RequestBody::Json(serde_json::to_value(self)?))
    }
}
