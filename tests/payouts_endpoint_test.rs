use axum::http::StatusCode;
use payout_desk::api;
use payout_desk::store::PayoutStore;
use std::sync::Arc;
use tower::util::ServiceExt;

fn seeded_app() -> axum::Router {
    let store = Arc::new(PayoutStore::seeded());
    api::create_router(api::AppState::new(store))
}

async fn get(app: axum::Router, uri: &str) -> (StatusCode, serde_json::Value) {
    let req = axum::http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(axum::body::Body::empty())
        .unwrap();

    let resp = app.oneshot(req).await.unwrap();
    let status = resp.status();
    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_list_payouts_returns_seeded_rows_verbatim() {
    let (status, json) = get(seeded_app(), "/v1/payouts").await;
    assert_eq!(status, StatusCode::OK);

    let payouts = json["payouts"].as_array().unwrap();
    assert_eq!(payouts.len(), 5);

    let first = &payouts[0];
    assert_eq!(first["id"], "po_001");
    assert_eq!(first["creatorId"], "cr_001");
    assert_eq!(first["amountMinor"], 24550);
    assert_eq!(first["currency"], "USD");
    assert_eq!(first["status"], "PENDING");
    assert_eq!(first["method"], "BANK_TRANSFER");

    let flagged = &payouts[1];
    assert_eq!(flagged["id"], "po_002");
    assert_eq!(flagged["status"], "FLAGGED");
    assert_eq!(flagged["riskScore"], 82.0);
}

#[tokio::test]
async fn test_detail_bundle_shape_for_pending_payout() {
    let (status, json) = get(seeded_app(), "/v1/payouts/po_001").await;
    assert_eq!(status, StatusCode::OK);

    assert_eq!(json["payout"]["id"], "po_001");

    let invoices = json["invoices"].as_array().unwrap();
    assert_eq!(invoices.len(), 2);
    assert_eq!(invoices[0]["invoiceId"], "inv_1001");
    assert_eq!(invoices[0]["status"], "OPEN");
    assert_eq!(invoices[1]["invoiceId"], "inv_1002");
    assert_eq!(invoices[1]["status"], "SETTLED");

    // pay_001's retry succeeded 15 minutes ago, after the failure an hour ago.
    assert_eq!(json["latestPaymentAttempt"]["id"], "pa_002");
    assert_eq!(json["latestPaymentAttempt"]["status"], "SUCCESS");
}

#[tokio::test]
async fn test_detail_of_flagged_payout_surfaces_latest_failure_and_signals() {
    let (status, json) = get(seeded_app(), "/v1/payouts/po_002").await;
    assert_eq!(status, StatusCode::OK);

    // Two failures on pay_002; pa_004 is the more recent.
    assert_eq!(json["latestPaymentAttempt"]["id"], "pa_004");
    assert_eq!(json["latestPaymentAttempt"]["status"], "FAILURE");
    assert_eq!(json["latestPaymentAttempt"]["failureCode"], "RISK_BLOCKED");

    let ids: Vec<&str> = json["fraudSignals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    // Payout-level fs_001 and creator-level fs_002 (cr_002), nothing else.
    assert!(ids.contains(&"fs_001"));
    assert!(ids.contains(&"fs_002"));
    assert_eq!(ids.len(), 2);
}

#[tokio::test]
async fn test_detail_joins_payment_level_signals() {
    let (status, json) = get(seeded_app(), "/v1/payouts/po_005").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&str> = json["fraudSignals"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_str().unwrap())
        .collect();
    // fs_004 targets the payout, fs_003 targets linked payment pay_004.
    assert!(ids.contains(&"fs_003"));
    assert!(ids.contains(&"fs_004"));
    assert_eq!(ids.len(), 2);
}

#[tokio::test]
async fn test_detail_without_payments_has_null_attempt() {
    // po_003 has an invoice but no payment yet.
    let (status, json) = get(seeded_app(), "/v1/payouts/po_003").await;
    assert_eq!(status, StatusCode::OK);
    assert!(json["latestPaymentAttempt"].is_null());
    assert_eq!(json["fraudSignals"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn test_unknown_payout_returns_not_found_envelope() {
    let (status, json) = get(seeded_app(), "/v1/payouts/po_999").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"]["code"], "NOT_FOUND");
    assert_eq!(json["error"]["details"]["payoutId"], "po_999");
    assert!(json["error"]["message"].as_str().unwrap().contains("po_999"));
    // Never a partial bundle alongside the error.
    assert!(json.get("payout").is_none());
}

#[tokio::test]
async fn test_detail_is_deterministic_across_calls() {
    let app = seeded_app();
    let (_, first) = get(app.clone(), "/v1/payouts/po_002").await;
    let (_, second) = get(app, "/v1/payouts/po_002").await;
    assert_eq!(first, second);
}
