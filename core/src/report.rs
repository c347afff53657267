//! Report assembly and console rendering.
//!
//! One ReportRow per observed (product, bucket) pair: the rate plus up
//! to three fixed customer slots. Current rows never carry customers.

use crate::aggregate::RateRecord;
use crate::bucket::DelinquencyBucket;
use crate::rank::{PartitionKey, TopCustomer};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub product_type: String,
    pub delinquency_bucket: DelinquencyBucket,
    pub delinquency_rate: f64,
    pub customer_1: Option<TopCustomer>,
    pub customer_2: Option<TopCustomer>,
    pub customer_3: Option<TopCustomer>,
}

impl ReportRow {
    /// Occupied customer slots, rank ascending.
    pub fn top_customers(&self) -> impl Iterator<Item = &TopCustomer> {
        [&self.customer_1, &self.customer_2, &self.customer_3]
            .into_iter()
            .filter_map(|slot| slot.as_ref())
    }
}

/// Merge rate records with their ranked customers. Order follows the
/// rate records (product ascending, bucket severity ascending).
pub fn assemble_report(
    rates: Vec<RateRecord>,
    mut tops: BTreeMap<PartitionKey, Vec<TopCustomer>>,
) -> Vec<ReportRow> {
    rates
        .into_iter()
        .map(|rate| {
            let mut slots = [None, None, None];
            if rate.bucket.is_delinquent() {
                let key = (rate.product_type.clone(), rate.bucket);
                if let Some(customers) = tops.remove(&key) {
                    for (slot, customer) in slots.iter_mut().zip(customers) {
                        *slot = Some(customer);
                    }
                }
            }
            let [customer_1, customer_2, customer_3] = slots;
            ReportRow {
                product_type: rate.product_type,
                delinquency_bucket: rate.bucket,
                delinquency_rate: rate.delinquency_rate,
                customer_1,
                customer_2,
                customer_3,
            }
        })
        .collect()
}

/// Human-readable report: per product, each bucket's rate, and the top
/// delinquent customers for every non-Current bucket.
pub fn render_report(rows: &[ReportRow]) -> String {
    let mut out = String::new();
    out.push_str("Delinquency Rates by Product Type:\n");
    out.push_str("===================================\n");

    let mut current_product: Option<&str> = None;
    for row in rows {
        if current_product != Some(row.product_type.as_str()) {
            let _ = writeln!(out, "\n{}", row.product_type);
            let _ = writeln!(out, "{}", "-".repeat(row.product_type.len()));
            current_product = Some(row.product_type.as_str());
        }

        let _ = writeln!(out, "{}: {:.2}%", row.delinquency_bucket, row.delinquency_rate);

        if row.delinquency_bucket.is_delinquent() {
            out.push_str("  Top 3 delinquent customers:\n");
            for customer in row.top_customers() {
                let _ = writeln!(
                    out,
                    "    {}. {} (Customer ID: {}, {} days past due)",
                    customer.rank,
                    customer.customer_name,
                    customer.customer_id,
                    customer.days_past_due,
                );
            }
        }
    }
    out
}
