//! Payments and payment attempts.

use serde::{Deserialize, Serialize};

/// Execution state of a payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    Created,
    Settled,
    Failed,
}

/// A payment executing a payout. The sample data carries at most one per
/// payout, but the model supports many.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: String,
    pub payout_id: String,
    pub status: PaymentStatus,
}

/// Outcome of a single payment attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttemptStatus {
    Success,
    Failure,
}

/// One try at executing a payment, timestamped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentAttempt {
    pub id: String,
    pub payment_id: String,
    /// Timestamp string; formats vary across producers, see
    /// [`crate::domain::timestamp`] for how these are compared.
    pub created_at: String,
    pub status: AttemptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_code: Option<String>,
}
