//! Invoices linked to a payout.

use serde::{Deserialize, Serialize};

/// Settlement state of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InvoiceStatus {
    Open,
    Settled,
}

/// Link row between a payout and one of the invoices it covers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutInvoice {
    pub payout_id: String,
    pub invoice_id: String,
    pub status: InvoiceStatus,
}

/// Invoice projection returned inside a payout detail bundle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRef {
    pub invoice_id: String,
    pub status: InvoiceStatus,
}

impl From<&PayoutInvoice> for InvoiceRef {
    fn from(row: &PayoutInvoice) -> Self {
        InvoiceRef {
            invoice_id: row.invoice_id.clone(),
            status: row.status,
        }
    }
}
