//! Finance ledger display models

use serde::Serialize;
use tabled::Tabled;

use super::Searchable;
use crate::client::models::{FinanceRecord, LedgerBalance};
use crate::output::formatters::{format_amount, format_opt};

/// Ledger row display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct FinanceDisplay {
    #[tabled(rename = "ID")]
    pub id: i64,

    #[tabled(rename = "MEMBER")]
    pub member: String,

    #[tabled(rename = "DATE")]
    pub date: String,

    #[tabled(rename = "DEBIT")]
    pub duguje: String,

    #[tabled(rename = "CREDIT")]
    pub potrazuje: String,

    #[tabled(rename = "DESCRIPTION")]
    pub description: String,
}

impl From<&FinanceRecord> for FinanceDisplay {
    fn from(record: &FinanceRecord) -> Self {
        Self {
            id: record.id,
            member: record
                .member
                .as_ref()
                .map(|m| m.full_name())
                .unwrap_or_else(|| format!("member {}", record.member_id)),
            date: format_opt(&record.date),
            duguje: format_amount(record.duguje),
            potrazuje: format_amount(record.potrazuje),
            description: format_opt(&record.description),
        }
    }
}

impl Searchable for FinanceDisplay {
    fn haystack(&self) -> String {
        format!("{} {}", self.member, self.description)
    }
}

/// Ledger totals footer, appended after the row table.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct BalanceDisplay {
    #[tabled(rename = "TOTAL DEBIT")]
    pub duguje: String,

    #[tabled(rename = "TOTAL CREDIT")]
    pub potrazuje: String,

    #[tabled(rename = "BALANCE")]
    pub saldo: String,
}

impl From<LedgerBalance> for BalanceDisplay {
    fn from(balance: LedgerBalance) -> Self {
        Self {
            duguje: format_amount(balance.duguje),
            potrazuje: format_amount(balance.potrazuje),
            saldo: format_amount(balance.saldo),
        }
    }
}
