//! Pure review logic: detail aggregation and decision recording.

pub mod decision;
pub mod detail;

pub use decision::{record_decision, DecisionError, NewDecision};
pub use detail::{build_payout_detail, DetailError, PayoutDetail};
