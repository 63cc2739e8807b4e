pub mod api;
pub mod config;
pub mod domain;
pub mod engine;
pub mod error;
pub mod store;

pub use config::Config;
pub use domain::{
    DecisionAction, FraudSignal, Payment, PaymentAttempt, Payout, PayoutDecision, PayoutInvoice,
};
pub use engine::{build_payout_detail, record_decision, NewDecision, PayoutDetail};
pub use error::AppError;
pub use store::{Dataset, PayoutStore};
