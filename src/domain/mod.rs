//! Domain types for the payout review desk.
//!
//! This module provides:
//! - Entity types mirroring the seeded dataset, with camelCase wire shapes
//! - The polymorphic fraud-signal association as a tagged enum
//! - Tolerant timestamp parsing and descending ordering

pub mod decision;
pub mod fraud;
pub mod invoice;
pub mod payment;
pub mod payout;
pub mod timestamp;

pub use decision::{DecisionAction, PayoutDecision};
pub use fraud::{FraudSignal, SignalEntityType, SignalSeverity, SignalType};
pub use invoice::{InvoiceRef, InvoiceStatus, PayoutInvoice};
pub use payment::{AttemptStatus, Payment, PaymentAttempt, PaymentStatus};
pub use payout::{Creator, Currency, Payout, PayoutMethod, PayoutStatus};
pub use timestamp::{cmp_created_at_desc, parse_timestamp};
