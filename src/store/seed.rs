//! Seed fixtures for the review desk.
//!
//! Timestamps are generated relative to process start so the sample payouts
//! always look current: "today" payouts stay scheduled for today and the
//! latest payment attempts stay the most recent ones.

use super::Dataset;
use crate::domain::{
    AttemptStatus, Creator, Currency, DecisionAction, FraudSignal, InvoiceStatus, Payment,
    PaymentAttempt, PaymentStatus, Payout, PayoutDecision, PayoutInvoice, PayoutMethod,
    PayoutStatus, SignalEntityType, SignalSeverity, SignalType,
};
use chrono::{Duration, Utc};

fn iso_date(delta_days: i64) -> String {
    (Utc::now() + Duration::days(delta_days))
        .format("%Y-%m-%d")
        .to_string()
}

fn minutes_ago(minutes: i64) -> String {
    (Utc::now() - Duration::minutes(minutes)).to_rfc3339()
}

/// Build the fixed dataset plus the initial decisions log.
pub fn seed_data() -> (Dataset, Vec<PayoutDecision>) {
    let today = iso_date(0);
    let tomorrow = iso_date(1);
    let yesterday = iso_date(-1);

    let creators = vec![
        Creator { id: "cr_001".to_string() },
        Creator { id: "cr_002".to_string() },
        Creator { id: "cr_003".to_string() },
        Creator { id: "cr_004".to_string() },
    ];

    let payouts = vec![
        Payout {
            id: "po_001".to_string(),
            creator_id: "cr_001".to_string(),
            amount_minor: 24550,
            currency: Currency::Usd,
            scheduled_for: today.clone(),
            status: PayoutStatus::Pending,
            risk_score: 18.0,
            method: PayoutMethod::BankTransfer,
        },
        Payout {
            id: "po_002".to_string(),
            creator_id: "cr_002".to_string(),
            amount_minor: 98000,
            currency: Currency::Eur,
            scheduled_for: today.clone(),
            status: PayoutStatus::Flagged,
            risk_score: 82.0,
            method: PayoutMethod::BankTransfer,
        },
        Payout {
            id: "po_003".to_string(),
            creator_id: "cr_003".to_string(),
            amount_minor: 12025,
            currency: Currency::Gbp,
            scheduled_for: tomorrow,
            status: PayoutStatus::Pending,
            risk_score: 35.0,
            method: PayoutMethod::BankTransfer,
        },
        Payout {
            id: "po_004".to_string(),
            creator_id: "cr_004".to_string(),
            amount_minor: 5500,
            currency: Currency::Usd,
            scheduled_for: yesterday,
            status: PayoutStatus::Paid,
            risk_score: 12.0,
            method: PayoutMethod::BankTransfer,
        },
        Payout {
            id: "po_005".to_string(),
            creator_id: "cr_001".to_string(),
            amount_minor: 41075,
            currency: Currency::Eur,
            scheduled_for: today,
            status: PayoutStatus::Held,
            risk_score: 67.0,
            method: PayoutMethod::BankTransfer,
        },
    ];

    let payout_invoices = vec![
        invoice("po_001", "inv_1001", InvoiceStatus::Open),
        invoice("po_001", "inv_1002", InvoiceStatus::Settled),
        invoice("po_002", "inv_2002", InvoiceStatus::Open),
        invoice("po_003", "inv_3001", InvoiceStatus::Open),
        invoice("po_004", "inv_4001", InvoiceStatus::Settled),
        invoice("po_004", "inv_4002", InvoiceStatus::Settled),
        invoice("po_005", "inv_5001", InvoiceStatus::Open),
    ];

    let payments = vec![
        payment("pay_001", "po_001", PaymentStatus::Created),
        payment("pay_002", "po_002", PaymentStatus::Failed),
        payment("pay_003", "po_004", PaymentStatus::Settled),
        payment("pay_004", "po_005", PaymentStatus::Created),
    ];

    // Attempts stay coherent: per payment, the latest attempt has the
    // highest createdAt.
    let payment_attempts = vec![
        PaymentAttempt {
            id: "pa_001".to_string(),
            payment_id: "pay_001".to_string(),
            created_at: minutes_ago(60),
            status: AttemptStatus::Failure,
            failure_code: Some("BANK_ACCOUNT_UNVERIFIED".to_string()),
        },
        PaymentAttempt {
            id: "pa_002".to_string(),
            payment_id: "pay_001".to_string(),
            created_at: minutes_ago(15),
            status: AttemptStatus::Success,
            failure_code: None,
        },
        PaymentAttempt {
            id: "pa_003".to_string(),
            payment_id: "pay_002".to_string(),
            created_at: minutes_ago(50),
            status: AttemptStatus::Failure,
            failure_code: Some("INSUFFICIENT_FUNDS".to_string()),
        },
        PaymentAttempt {
            id: "pa_004".to_string(),
            payment_id: "pay_002".to_string(),
            created_at: minutes_ago(10),
            status: AttemptStatus::Failure,
            failure_code: Some("RISK_BLOCKED".to_string()),
        },
        PaymentAttempt {
            id: "pa_005".to_string(),
            payment_id: "pay_003".to_string(),
            created_at: minutes_ago(60 * 24),
            status: AttemptStatus::Success,
            failure_code: None,
        },
        PaymentAttempt {
            id: "pa_006".to_string(),
            payment_id: "pay_004".to_string(),
            created_at: minutes_ago(30),
            status: AttemptStatus::Failure,
            failure_code: Some("BENEFICIARY_NAME_MISMATCH".to_string()),
        },
    ];

    let fraud_signals = vec![
        FraudSignal {
            id: "fs_001".to_string(),
            entity_type: SignalEntityType::Payout,
            entity_id: "po_002".to_string(),
            signal_type: SignalType::Velocity,
            severity: SignalSeverity::High,
            created_at: minutes_ago(0),
            note: Some("Unusual payout frequency compared to 30d baseline.".to_string()),
        },
        FraudSignal {
            id: "fs_002".to_string(),
            entity_type: SignalEntityType::Creator,
            entity_id: "cr_002".to_string(),
            signal_type: SignalType::ChargebackSpike,
            severity: SignalSeverity::High,
            created_at: minutes_ago(0),
            note: Some("Chargebacks spiked 3x in the last 48h.".to_string()),
        },
        FraudSignal {
            id: "fs_003".to_string(),
            entity_type: SignalEntityType::Payment,
            entity_id: "pay_004".to_string(),
            signal_type: SignalType::IpMismatch,
            severity: SignalSeverity::Medium,
            created_at: minutes_ago(0),
            note: Some("IP country differs from payout bank country.".to_string()),
        },
        FraudSignal {
            id: "fs_004".to_string(),
            entity_type: SignalEntityType::Payout,
            entity_id: "po_005".to_string(),
            signal_type: SignalType::Velocity,
            severity: SignalSeverity::Medium,
            created_at: minutes_ago(0),
            note: Some("Multiple payout method changes observed.".to_string()),
        },
    ];

    let decisions = vec![PayoutDecision {
        id: "pd_001".to_string(),
        payout_id: "po_005".to_string(),
        action: DecisionAction::Hold,
        reason: Some("Pending manual review due to medium risk signals.".to_string()),
        decided_at: minutes_ago(90),
    }];

    let dataset = Dataset {
        creators,
        payouts,
        payout_invoices,
        payments,
        payment_attempts,
        fraud_signals,
    };

    (dataset, decisions)
}

fn invoice(payout_id: &str, invoice_id: &str, status: InvoiceStatus) -> PayoutInvoice {
    PayoutInvoice {
        payout_id: payout_id.to_string(),
        invoice_id: invoice_id.to_string(),
        status,
    }
}

fn payment(id: &str, payout_id: &str, status: PaymentStatus) -> Payment {
    Payment {
        id: id.to_string(),
        payout_id: payout_id.to_string(),
        status,
    }
}
