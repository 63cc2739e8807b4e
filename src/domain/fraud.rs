//! Fraud signals with a polymorphic entity association.

use serde::{Deserialize, Serialize};

/// Which identifier space a fraud signal's `entity_id` resolves under.
///
/// This is a tagged association, not a foreign key: resolution happens at
/// query time with one equality check per variant, so a dangling `entity_id`
/// simply never matches any join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalEntityType {
    Payout,
    Creator,
    Payment,
}

/// Kind of risk observation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalType {
    ChargebackSpike,
    Velocity,
    IpMismatch,
}

/// How severe the observation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SignalSeverity {
    Low,
    Medium,
    High,
}

/// A flagged risk observation attached to a payout, creator, or payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FraudSignal {
    pub id: String,
    pub entity_type: SignalEntityType,
    pub entity_id: String,
    #[serde(rename = "type")]
    pub signal_type: SignalType,
    pub severity: SignalSeverity,
    pub created_at: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}
