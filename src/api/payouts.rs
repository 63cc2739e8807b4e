use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use super::AppState;
use crate::domain::Payout;
use crate::engine::{build_payout_detail, PayoutDetail};
use crate::error::AppError;

#[derive(Debug, Serialize)]
pub struct PayoutsResponse {
    pub payouts: Vec<Payout>,
}

/// `GET /v1/payouts` — every payout row, verbatim from the store.
pub async fn list_payouts(State(state): State<AppState>) -> Json<PayoutsResponse> {
    Json(PayoutsResponse {
        payouts: state.store.dataset().payouts.clone(),
    })
}

/// `GET /v1/payouts/:payout_id` — the aggregated detail bundle.
pub async fn get_payout_detail(
    Path(payout_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PayoutDetail>, AppError> {
    let detail = build_payout_detail(state.store.dataset(), &payout_id)?;
    Ok(Json(detail))
}
