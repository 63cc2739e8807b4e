//! In-memory data source.
//!
//! All review data lives in a [`Dataset`] built once at startup. The seed
//! tables are immutable for the life of the process; the only mutable state
//! is the append-only decisions log, kept behind a lock so the store is safe
//! to share across request tasks.

pub mod seed;

use crate::domain::{
    Creator, FraudSignal, Payment, PaymentAttempt, Payout, PayoutDecision, PayoutInvoice,
};
use std::sync::RwLock;

/// The six seeded entity tables, read-only after construction.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    pub creators: Vec<Creator>,
    pub payouts: Vec<Payout>,
    pub payout_invoices: Vec<PayoutInvoice>,
    pub payments: Vec<Payment>,
    pub payment_attempts: Vec<PaymentAttempt>,
    pub fraud_signals: Vec<FraudSignal>,
}

impl Dataset {
    /// Look up a payout by id.
    pub fn payout(&self, payout_id: &str) -> Option<&Payout> {
        self.payouts.iter().find(|p| p.id == payout_id)
    }
}

/// Shared handle over the dataset plus the append-only decisions log.
///
/// Constructed explicitly and passed by `Arc` into the handlers; there is no
/// ambient static state, so tests build isolated stores.
#[derive(Debug)]
pub struct PayoutStore {
    dataset: Dataset,
    decisions: RwLock<Vec<PayoutDecision>>,
}

impl PayoutStore {
    /// Create a store over a dataset with an initial decisions log.
    pub fn new(dataset: Dataset, decisions: Vec<PayoutDecision>) -> Self {
        PayoutStore {
            dataset,
            decisions: RwLock::new(decisions),
        }
    }

    /// Create a store over the production seed fixtures.
    pub fn seeded() -> Self {
        let (dataset, decisions) = seed::seed_data();
        Self::new(dataset, decisions)
    }

    /// The immutable entity tables.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Snapshot of the decisions log in append order.
    pub fn decisions(&self) -> Vec<PayoutDecision> {
        self.decisions.read().expect("decisions lock poisoned").clone()
    }

    /// Decisions recorded for one payout, in append order.
    pub fn decisions_for(&self, payout_id: &str) -> Vec<PayoutDecision> {
        self.decisions
            .read()
            .expect("decisions lock poisoned")
            .iter()
            .filter(|d| d.payout_id == payout_id)
            .cloned()
            .collect()
    }

    /// Append a decision. The log is append-only: nothing is ever edited or
    /// removed through this store.
    pub fn append_decision(&self, decision: PayoutDecision) {
        self.decisions
            .write()
            .expect("decisions lock poisoned")
            .push(decision);
    }
}
