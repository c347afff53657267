//! Join stage: repayments ⨝ approved applications ⨝ customers.
//!
//! Inner-join semantics throughout: a repayment whose loan has no
//! approved application, or whose application points at a missing
//! customer, is dropped silently. That is expected filtering, not an
//! error.

use crate::record::{Customer, LoanApplication, Repayment, RepaymentDetail};
use crate::types::{CustomerId, LoanId};
use std::collections::HashMap;

/// Denormalize repayments against approved applications and customers.
/// Output preserves the input order of `repayments`, so the result is
/// deterministic for a fixed load order.
pub fn join_repayment_details(
    repayments: &[Repayment],
    applications: &[LoanApplication],
    customers: &[Customer],
) -> Vec<RepaymentDetail> {
    let approved: HashMap<LoanId, &LoanApplication> = applications
        .iter()
        .filter(|app| app.is_approved())
        .map(|app| (app.application_id, app))
        .collect();

    let by_customer: HashMap<CustomerId, &Customer> = customers
        .iter()
        .map(|c| (c.customer_id, c))
        .collect();

    let mut details = Vec::with_capacity(repayments.len());
    let mut dropped = 0usize;

    for repayment in repayments {
        let Some(app) = approved.get(&repayment.loan_id) else {
            dropped += 1;
            continue;
        };
        let Some(customer) = by_customer.get(&app.customer_id) else {
            dropped += 1;
            continue;
        };
        details.push(RepaymentDetail {
            repayment: repayment.clone(),
            product_type: app.product_type.clone(),
            customer_id: customer.customer_id,
            first_name: customer.first_name.clone(),
            last_name: customer.last_name.clone(),
        });
    }

    if dropped > 0 {
        log::debug!("join dropped {dropped} repayments with no approved application or customer");
    }
    details
}
