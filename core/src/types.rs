//! Shared primitive types used across the pipeline.

/// A customer's stable warehouse key.
pub type CustomerId = i64;

/// A loan application's stable warehouse key. Repayments reference it
/// through their `loan_id` column.
pub type LoanId = i64;

/// A repayment row's stable warehouse key.
pub type RepaymentId = i64;
