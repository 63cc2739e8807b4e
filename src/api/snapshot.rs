use axum::extract::{Query, State};
use axum::Json;
use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::AppState;
use crate::domain::PayoutStatus;
use crate::error::AppError;

#[derive(Debug, Deserialize)]
pub struct SnapshotQuery {
    pub date: Option<String>,
}

/// Daily totals for the funds snapshot header, in minor currency units.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotResponse {
    pub date: String,
    /// Sum over payouts scheduled for the date, any status.
    pub scheduled_today: u64,
    pub held: u64,
    pub flagged: u64,
}

/// `GET /v1/snapshot?date=YYYY-MM-DD` — totals for one calendar date
/// (default: today, UTC).
pub async fn get_snapshot(
    Query(params): Query<SnapshotQuery>,
    State(state): State<AppState>,
) -> Result<Json<SnapshotResponse>, AppError> {
    let date = match params.date {
        Some(raw) => {
            NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|_| AppError::Validation {
                message: "Invalid date. Expected YYYY-MM-DD.".to_string(),
                details: json!({ "received": raw }),
            })?;
            raw
        }
        None => Utc::now().format("%Y-%m-%d").to_string(),
    };

    let mut scheduled_today = 0u64;
    let mut held = 0u64;
    let mut flagged = 0u64;
    for payout in &state.store.dataset().payouts {
        if payout.scheduled_for != date {
            continue;
        }
        scheduled_today += payout.amount_minor;
        match payout.status {
            PayoutStatus::Held => held += payout.amount_minor,
            PayoutStatus::Flagged => flagged += payout.amount_minor,
            _ => {}
        }
    }

    Ok(Json(SnapshotResponse {
        date,
        scheduled_today,
        held,
        flagged,
    }))
}
