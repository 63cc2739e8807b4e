//! Payout and creator types.

use serde::{Deserialize, Serialize};

/// A creator who receives payouts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Creator {
    /// Opaque creator identifier (e.g. "cr_001").
    pub id: String,
}

/// Lifecycle status of a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutStatus {
    Pending,
    Flagged,
    Held,
    Paid,
    Rejected,
}

/// Settlement currency for a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

/// Payment rail used to deliver the payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoutMethod {
    BankTransfer,
}

/// A scheduled transfer of funds to a creator, subject to review.
///
/// Status transitions are out of scope here: decisions are recorded in a
/// separate append-only log and never written back onto the payout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payout {
    /// Opaque payout identifier (e.g. "po_001"), unique across the dataset.
    pub id: String,
    /// Creator this payout is addressed to.
    pub creator_id: String,
    /// Amount in minor currency units (cents, pence).
    pub amount_minor: u64,
    /// Settlement currency.
    pub currency: Currency,
    /// ISO calendar date (YYYY-MM-DD) the payout is scheduled for.
    pub scheduled_for: String,
    /// Current review status.
    pub status: PayoutStatus,
    /// Risk score in [0, 100].
    pub risk_score: f64,
    /// Payment rail tag.
    pub method: PayoutMethod,
}
