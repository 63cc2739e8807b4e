pub mod decisions;
pub mod health;
pub mod payouts;
pub mod snapshot;

use crate::store::PayoutStore;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PayoutStore>,
}

impl AppState {
    pub fn new(store: Arc<PayoutStore>) -> Self {
        Self { store }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/payouts", get(payouts::list_payouts))
        .route("/v1/payouts/:payout_id", get(payouts::get_payout_detail))
        .route(
            "/v1/payouts/:payout_id/decisions",
            post(decisions::post_decision).get(decisions::list_decisions),
        )
        .route("/v1/snapshot", get(snapshot::get_snapshot))
        .layer(cors)
        .with_state(state)
}
