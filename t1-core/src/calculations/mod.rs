//! Calculation stages of the tax pipeline.
//!
//! Each module is one stage: income aggregation, progressive bracket tax,
//! non-refundable credits, alternative minimum tax, payroll contributions,
//! benefit clawbacks, and refundable credits. [`engine`] sequences them in
//! statutory order.

pub mod amt;
pub mod brackets;
pub mod clawbacks;
pub mod common;
pub mod credits;
pub mod engine;
pub mod income;
pub mod payroll;
pub mod refundable;

pub use amt::AmtResult;
pub use clawbacks::Clawbacks;
pub use credits::{CreditsCalculator, NonRefundableCredits};
pub use engine::{EngineError, TaxEngine};
pub use income::IncomeSummary;
pub use payroll::PayrollContributions;
pub use refundable::RefundableCredits;
