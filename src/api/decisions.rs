use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

use super::AppState;
use crate::domain::{cmp_created_at_desc, PayoutDecision};
use crate::engine::{record_decision, NewDecision};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct DecisionResponse {
    pub ok: bool,
    pub decision: PayoutDecision,
}

#[derive(Debug, Serialize)]
pub struct DecisionsResponse {
    pub decisions: Vec<PayoutDecision>,
}

/// `POST /v1/payouts/:payout_id/decisions` — record a reviewer decision.
///
/// The body is taken as a raw JSON value so that a malformed `action` flows
/// through the recorder's validation and comes back in the uniform error
/// envelope instead of an extractor rejection.
pub async fn post_decision(
    Path(payout_id): Path<String>,
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<DecisionResponse>, AppError> {
    let input = NewDecision {
        action: body
            .get("action")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        reason: body
            .get("reason")
            .and_then(Value::as_str)
            .map(str::to_string),
    };

    let decision = record_decision(&state.store, &payout_id, input)?;
    Ok(Json(DecisionResponse { ok: true, decision }))
}

/// `GET /v1/payouts/:payout_id/decisions` — decision history, newest first.
pub async fn list_decisions(
    Path(payout_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<DecisionsResponse>, AppError> {
    if state.store.dataset().payout(&payout_id).is_none() {
        return Err(AppError::payout_not_found(&payout_id));
    }

    let mut decisions = state.store.decisions_for(&payout_id);
    decisions.sort_by(|a, b| cmp_created_at_desc(&a.decided_at, &b.decided_at));
    Ok(Json(DecisionsResponse { decisions }))
}
