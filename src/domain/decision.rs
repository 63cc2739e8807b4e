//! Reviewer decisions on payouts.

use serde::{Deserialize, Serialize};

/// The judgment a reviewer records on a payout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DecisionAction {
    Approve,
    Hold,
    Reject,
}

impl DecisionAction {
    /// Parse a wire value, returning `None` for anything outside the
    /// APPROVE | HOLD | REJECT set.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "APPROVE" => Some(DecisionAction::Approve),
            "HOLD" => Some(DecisionAction::Hold),
            "REJECT" => Some(DecisionAction::Reject),
            _ => None,
        }
    }
}

impl std::fmt::Display for DecisionAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DecisionAction::Approve => write!(f, "APPROVE"),
            DecisionAction::Hold => write!(f, "HOLD"),
            DecisionAction::Reject => write!(f, "REJECT"),
        }
    }
}

/// A recorded reviewer decision. The decisions log is append-only: entries are
/// never edited or removed, and a payout may accumulate several of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutDecision {
    /// Generated identifier with a stable "pd_" prefix.
    pub id: String,
    pub payout_id: String,
    pub action: DecisionAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// RFC 3339 instant the decision was recorded.
    pub decided_at: String,
}
