//! Payout detail aggregation.
//!
//! Pure join over the dataset: payout -> invoices -> payments -> attempts ->
//! fraud signals. Repeated calls over an unchanged dataset return identical
//! bundles.

use crate::domain::{
    cmp_created_at_desc, FraudSignal, InvoiceRef, PaymentAttempt, Payout, SignalEntityType,
};
use crate::store::Dataset;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DetailError {
    #[error("Payout not found: {payout_id}")]
    NotFound { payout_id: String },
}

/// Detail bundle for one payout.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoutDetail {
    pub payout: Payout,
    pub invoices: Vec<InvoiceRef>,
    /// Newest attempt across every payment linked to the payout, or `null`
    /// when none exist.
    pub latest_payment_attempt: Option<PaymentAttempt>,
    pub fraud_signals: Vec<FraudSignal>,
}

/// Build the detail bundle for `payout_id`, or fail with `NotFound` carrying
/// the requested id. No partial bundle is ever produced.
pub fn build_payout_detail(dataset: &Dataset, payout_id: &str) -> Result<PayoutDetail, DetailError> {
    let payout = dataset
        .payout(payout_id)
        .cloned()
        .ok_or_else(|| DetailError::NotFound {
            payout_id: payout_id.to_string(),
        })?;

    // Insertion order of the source table, no re-sort.
    let invoices: Vec<InvoiceRef> = dataset
        .payout_invoices
        .iter()
        .filter(|pi| pi.payout_id == payout_id)
        .map(InvoiceRef::from)
        .collect();

    // A payout may have zero, one, or many payments; the id set feeds both
    // the attempt and the fraud-signal joins.
    let payment_ids: Vec<&str> = dataset
        .payments
        .iter()
        .filter(|pay| pay.payout_id == payout_id)
        .map(|pay| pay.id.as_str())
        .collect();

    let mut attempts: Vec<&PaymentAttempt> = dataset
        .payment_attempts
        .iter()
        .filter(|a| payment_ids.contains(&a.payment_id.as_str()))
        .collect();
    // Stable sort: equal timestamps keep source order.
    attempts.sort_by(|a, b| cmp_created_at_desc(&a.created_at, &b.created_at));
    let latest_payment_attempt = attempts.first().map(|a| (*a).clone());

    let mut fraud_signals: Vec<FraudSignal> = dataset
        .fraud_signals
        .iter()
        .filter(|s| match s.entity_type {
            SignalEntityType::Payout => s.entity_id == payout_id,
            SignalEntityType::Creator => s.entity_id == payout.creator_id,
            SignalEntityType::Payment => payment_ids.contains(&s.entity_id.as_str()),
        })
        .cloned()
        .collect();
    fraud_signals.sort_by(|a, b| cmp_created_at_desc(&a.created_at, &b.created_at));

    Ok(PayoutDetail {
        payout,
        invoices,
        latest_payment_attempt,
        fraud_signals,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        AttemptStatus, Creator, Currency, InvoiceStatus, Payment, PaymentStatus, PayoutInvoice,
        PayoutMethod, PayoutStatus, SignalSeverity, SignalType,
    };

    fn payout(id: &str, creator_id: &str) -> Payout {
        Payout {
            id: id.to_string(),
            creator_id: creator_id.to_string(),
            amount_minor: 12345,
            currency: Currency::Gbp,
            scheduled_for: "2026-08-29".to_string(),
            status: PayoutStatus::Pending,
            risk_score: 42.0,
            method: PayoutMethod::BankTransfer,
        }
    }

    fn attempt(id: &str, payment_id: &str, created_at: &str) -> PaymentAttempt {
        PaymentAttempt {
            id: id.to_string(),
            payment_id: payment_id.to_string(),
            created_at: created_at.to_string(),
            status: AttemptStatus::Failure,
            failure_code: None,
        }
    }

    fn signal(id: &str, entity_type: SignalEntityType, entity_id: &str, created_at: &str) -> FraudSignal {
        FraudSignal {
            id: id.to_string(),
            entity_type,
            entity_id: entity_id.to_string(),
            signal_type: SignalType::Velocity,
            severity: SignalSeverity::Medium,
            created_at: created_at.to_string(),
            note: None,
        }
    }

    fn dataset() -> Dataset {
        Dataset {
            creators: vec![Creator { id: "cr_1".to_string() }],
            payouts: vec![payout("po_1", "cr_1"), payout("po_other", "cr_x")],
            payout_invoices: vec![
                PayoutInvoice {
                    payout_id: "po_1".to_string(),
                    invoice_id: "inv_1".to_string(),
                    status: InvoiceStatus::Open,
                },
                PayoutInvoice {
                    payout_id: "po_1".to_string(),
                    invoice_id: "inv_2".to_string(),
                    status: InvoiceStatus::Settled,
                },
                PayoutInvoice {
                    payout_id: "po_other".to_string(),
                    invoice_id: "inv_x".to_string(),
                    status: InvoiceStatus::Open,
                },
            ],
            payments: vec![
                Payment {
                    id: "pay_1".to_string(),
                    payout_id: "po_1".to_string(),
                    status: PaymentStatus::Created,
                },
                Payment {
                    id: "pay_2".to_string(),
                    payout_id: "po_1".to_string(),
                    status: PaymentStatus::Created,
                },
                Payment {
                    id: "pay_other".to_string(),
                    payout_id: "po_other".to_string(),
                    status: PaymentStatus::Created,
                },
            ],
            payment_attempts: vec![
                attempt("pa_old", "pay_1", "2026-08-28T10:00:00Z"),
                attempt("pa_newest", "pay_2", "2026-08-29T09:30:00Z"),
                attempt("pa_other", "pay_other", "2026-08-29T09:40:00Z"),
            ],
            fraud_signals: vec![
                signal("fs_payout", SignalEntityType::Payout, "po_1", "2026-08-29T09:00:00Z"),
                signal("fs_creator", SignalEntityType::Creator, "cr_1", "2026-08-29T09:10:00Z"),
                signal("fs_payment", SignalEntityType::Payment, "pay_2", "2026-08-29T09:20:00Z"),
                signal("fs_unrelated", SignalEntityType::Payout, "po_other", "2026-08-29T09:30:00Z"),
            ],
        }
    }

    #[test]
    fn bundle_matches_source_rows() {
        let data = dataset();
        let detail = build_payout_detail(&data, "po_1").unwrap();

        assert_eq!(detail.payout, data.payouts[0]);
        let invoice_ids: Vec<&str> = detail.invoices.iter().map(|i| i.invoice_id.as_str()).collect();
        assert_eq!(invoice_ids, vec!["inv_1", "inv_2"]);
    }

    #[test]
    fn unknown_payout_is_not_found() {
        let err = build_payout_detail(&dataset(), "po_999").unwrap_err();
        assert_eq!(
            err,
            DetailError::NotFound { payout_id: "po_999".to_string() }
        );
    }

    #[test]
    fn latest_attempt_spans_all_linked_payments() {
        // pa_newest is on pay_2, newer than pa_old on pay_1; pa_other is
        // newer still but belongs to an unrelated payout.
        let detail = build_payout_detail(&dataset(), "po_1").unwrap();
        assert_eq!(detail.latest_payment_attempt.unwrap().id, "pa_newest");
    }

    #[test]
    fn latest_attempt_is_null_without_linked_attempts() {
        let mut data = dataset();
        data.payment_attempts.retain(|a| a.payment_id == "pay_other");
        let detail = build_payout_detail(&data, "po_1").unwrap();
        assert!(detail.latest_payment_attempt.is_none());
    }

    #[test]
    fn fraud_fan_in_covers_payout_creator_and_payment_levels() {
        let detail = build_payout_detail(&dataset(), "po_1").unwrap();
        let ids: Vec<&str> = detail.fraud_signals.iter().map(|s| s.id.as_str()).collect();
        // Descending by createdAt, unrelated signal excluded.
        assert_eq!(ids, vec!["fs_payment", "fs_creator", "fs_payout"]);
    }

    #[test]
    fn equal_timestamps_keep_source_order() {
        let mut data = dataset();
        let t = "2026-08-29T09:00:00Z";
        for s in &mut data.fraud_signals {
            s.created_at = t.to_string();
        }
        let detail = build_payout_detail(&data, "po_1").unwrap();
        let ids: Vec<&str> = detail.fraud_signals.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, vec!["fs_payout", "fs_creator", "fs_payment"]);
    }

    #[test]
    fn repeated_calls_are_identical() {
        let data = dataset();
        let a = serde_json::to_value(build_payout_detail(&data, "po_1").unwrap()).unwrap();
        let b = serde_json::to_value(build_payout_detail(&data, "po_1").unwrap()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn null_attempt_serializes_as_null() {
        let mut data = dataset();
        data.payment_attempts.clear();
        let detail = build_payout_detail(&data, "po_1").unwrap();
        let json = serde_json::to_value(&detail).unwrap();
        assert!(json["latestPaymentAttempt"].is_null());
    }
}
