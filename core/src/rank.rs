//! Top-N ranking of delinquent customers per (product, bucket) partition.
//!
//! RULE: the sort is fully deterministic. days_past_due descending,
//! then customer_id ascending, then repayment_id ascending — the last
//! key makes ties impossible, so the report is reproducible no matter
//! how the rows were partitioned upstream.

use crate::bucket::{ClassifiedDetail, DelinquencyBucket};
use crate::types::CustomerId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// How many customers each partition keeps.
pub const TOP_N: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopCustomer {
    /// 1-based position within the partition.
    pub rank: u32,
    pub customer_name: String,
    pub customer_id: CustomerId,
    pub days_past_due: i64,
}

/// Partition key: (product_type, bucket).
pub type PartitionKey = (String, DelinquencyBucket);

/// Rank the most delinquent customers within each (product, bucket)
/// partition. Current repayments (days_past_due == 0) never enter a
/// partition, so the Current bucket has no key in the result.
pub fn top_delinquents(rows: &[ClassifiedDetail]) -> BTreeMap<PartitionKey, Vec<TopCustomer>> {
    let mut partitions: BTreeMap<PartitionKey, Vec<&ClassifiedDetail>> = BTreeMap::new();

    for row in rows.iter().filter(|r| r.detail.days_past_due() > 0) {
        partitions
            .entry((row.detail.product_type.clone(), row.bucket))
            .or_default()
            .push(row);
    }

    partitions
        .into_iter()
        .map(|(key, mut members)| {
            members.sort_by(|a, b| {
                b.detail
                    .days_past_due()
                    .cmp(&a.detail.days_past_due())
                    .then(a.detail.customer_id.cmp(&b.detail.customer_id))
                    .then(a.detail.repayment.repayment_id.cmp(&b.detail.repayment.repayment_id))
            });

            let top = members
                .iter()
                .take(TOP_N)
                .enumerate()
                .map(|(i, member)| TopCustomer {
                    rank: (i + 1) as u32,
                    customer_name: member.detail.customer_name(),
                    customer_id: member.detail.customer_id,
                    days_past_due: member.detail.days_past_due(),
                })
                .collect();

            (key, top)
        })
        .collect()
}
