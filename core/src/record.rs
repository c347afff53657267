//! Source and derived row types for the delinquency pipeline.
//!
//! The three source types mirror the warehouse tables one-to-one.
//! `RepaymentDetail` exists only between the join stage and report
//! assembly; it is never persisted.

use crate::types::{CustomerId, LoanId, RepaymentId};
use serde::{Deserialize, Serialize};

/// Application status value that admits a loan into the pipeline.
/// Anything else ("Rejected", "Pending", ...) is filtered out.
pub const STATUS_APPROVED: &str = "Approved";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoanApplication {
    pub application_id: LoanId,
    pub customer_id: CustomerId,
    pub product_type: String,
    pub application_status: String,
    pub loan_amount: f64,
}

impl LoanApplication {
    pub fn is_approved(&self) -> bool {
        self.application_status == STATUS_APPROVED
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repayment {
    pub repayment_id: RepaymentId,
    pub loan_id: LoanId,
    pub days_past_due: i64,
    pub amount_due: f64,
    pub amount_paid: f64,
    pub payment_date: String,
}

/// A repayment joined with its approved application and customer.
/// Carries every repayment field unchanged plus the join columns.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepaymentDetail {
    pub repayment: Repayment,
    pub product_type: String,
    pub customer_id: CustomerId,
    pub first_name: String,
    pub last_name: String,
}

impl RepaymentDetail {
    pub fn days_past_due(&self) -> i64 {
        self.repayment.days_past_due
    }

    /// "first_name last_name", the form the report shows.
    pub fn customer_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
