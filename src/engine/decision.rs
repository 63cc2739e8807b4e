//! Decision recording.
//!
//! Validates a reviewer's input and appends it to the decisions log. Nothing
//! is written on a validation failure, and recorded decisions are never
//! reconciled back into the payout's status.

use crate::domain::{DecisionAction, PayoutDecision};
use crate::store::PayoutStore;
use chrono::{SecondsFormat, Utc};
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecisionError {
    #[error("Payout not found: {payout_id}")]
    NotFound { payout_id: String },
    #[error("Invalid action. Expected APPROVE | HOLD | REJECT.")]
    InvalidAction { received: String },
    #[error("Reject requires a free-text reason.")]
    MissingReason { payout_id: String },
}

/// Raw reviewer input, as received from the wire.
#[derive(Debug, Clone)]
pub struct NewDecision {
    /// Action wire value, validated against APPROVE | HOLD | REJECT.
    pub action: String,
    /// Optional free text; surrounding whitespace is trimmed before use.
    pub reason: Option<String>,
}

/// Validate `input` against the payout and append a fresh decision.
///
/// On success the returned record carries a generated "pd_"-prefixed id and
/// the wall-clock instant of recording.
pub fn record_decision(
    store: &PayoutStore,
    payout_id: &str,
    input: NewDecision,
) -> Result<PayoutDecision, DecisionError> {
    if store.dataset().payout(payout_id).is_none() {
        return Err(DecisionError::NotFound {
            payout_id: payout_id.to_string(),
        });
    }

    let action = DecisionAction::parse(&input.action).ok_or(DecisionError::InvalidAction {
        received: input.action.clone(),
    })?;

    let reason = input
        .reason
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty())
        .map(str::to_string);

    if action == DecisionAction::Reject && reason.is_none() {
        return Err(DecisionError::MissingReason {
            payout_id: payout_id.to_string(),
        });
    }

    let decision = PayoutDecision {
        id: format!("pd_{}", Uuid::new_v4().simple()),
        payout_id: payout_id.to_string(),
        action,
        reason,
        decided_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    };

    tracing::info!(
        target: "audit",
        decision_id = %decision.id,
        payout_id = %decision.payout_id,
        action = %decision.action,
        reason = decision.reason.as_deref().unwrap_or(""),
        decided_at = %decision.decided_at,
        "payout decision recorded"
    );

    store.append_decision(decision.clone());
    Ok(decision)
}
