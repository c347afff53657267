//! Rate aggregation: per-product totals and per-(product, bucket) rates.

use crate::bucket::{ClassifiedDetail, DelinquencyBucket};
use serde::Serialize;
use std::collections::BTreeMap;

/// One observed (product_type, bucket) pair with its share of that
/// product's repayments. No customer details yet; the assembler adds
/// those.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RateRecord {
    pub product_type: String,
    pub bucket: DelinquencyBucket,
    pub count: i64,
    pub total_payments: i64,
    /// Percentage of the product's repayments in this bucket,
    /// rounded to 2 decimals.
    pub delinquency_rate: f64,
}

/// Round to 2 decimal places, half away from zero.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute one RateRecord per observed (product_type, bucket) pair,
/// ordered by product_type ascending then bucket severity ascending.
///
/// total_payments counts every repayment of the product, Current
/// included, so total >= count >= 1 for every emitted record and the
/// division can never see a zero denominator.
pub fn delinquency_rates(rows: &[ClassifiedDetail]) -> Vec<RateRecord> {
    let mut totals: BTreeMap<&str, i64> = BTreeMap::new();
    let mut counts: BTreeMap<(&str, DelinquencyBucket), i64> = BTreeMap::new();

    for row in rows {
        let product = row.detail.product_type.as_str();
        *totals.entry(product).or_insert(0) += 1;
        *counts.entry((product, row.bucket)).or_insert(0) += 1;
    }

    counts
        .into_iter()
        .map(|((product, bucket), count)| {
            let total = totals[product];
            RateRecord {
                product_type: product.to_string(),
                bucket,
                count,
                total_payments: total,
                delinquency_rate: round2(count as f64 / total as f64 * 100.0),
            }
        })
        .collect()
}
