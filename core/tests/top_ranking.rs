use delinq_core::bucket::{classify_all, DelinquencyBucket};
use delinq_core::rank::{top_delinquents, TOP_N};
use delinq_core::record::{Repayment, RepaymentDetail};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn detail(
    repayment_id: i64,
    customer_id: i64,
    name: (&str, &str),
    product: &str,
    days_past_due: i64,
) -> RepaymentDetail {
    RepaymentDetail {
        repayment: Repayment {
            repayment_id,
            loan_id: repayment_id,
            days_past_due,
            amount_due: 100.0,
            amount_paid: 0.0,
            payment_date: "2025-01-01".into(),
        },
        product_type: product.into(),
        customer_id,
        first_name: name.0.into(),
        last_name: name.1.into(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// Current repayments never enter a partition: the Current bucket has
/// no key in the ranking output.
#[test]
fn current_bucket_never_contributes_customers() {
    let rows = classify_all(vec![
        detail(1, 1, ("Ana", "Silva"), "Auto", 0),
        detail(2, 2, ("Ben", "Cole"), "Auto", 0),
    ]);
    let tops = top_delinquents(&rows);
    assert!(tops.is_empty());
}

/// Each partition keeps at most 3 customers, ranked 1..k, sorted by
/// days_past_due descending.
#[test]
fn partitions_keep_top_three_by_days_past_due() {
    let rows = classify_all(vec![
        detail(1, 1, ("Ana", "Silva"), "Auto", 11),
        detail(2, 2, ("Ben", "Cole"), "Auto", 25),
        detail(3, 3, ("Cam", "Diaz"), "Auto", 3),
        detail(4, 4, ("Dee", "Epps"), "Auto", 19),
        detail(5, 5, ("Eli", "Ford"), "Auto", 7),
    ]);
    let tops = top_delinquents(&rows);

    let partition = &tops[&("Auto".to_string(), DelinquencyBucket::Days1To29)];
    assert_eq!(partition.len(), TOP_N);

    let ranks: Vec<u32> = partition.iter().map(|c| c.rank).collect();
    assert_eq!(ranks, vec![1, 2, 3]);

    let days: Vec<i64> = partition.iter().map(|c| c.days_past_due).collect();
    assert_eq!(days, vec![25, 19, 11]);

    assert_eq!(partition[0].customer_name, "Ben Cole");
}

/// A partition with fewer than 3 delinquents keeps them all, ranked
/// 1..k with k < 3.
#[test]
fn small_partitions_rank_one_to_k() {
    let rows = classify_all(vec![
        detail(1, 1, ("Ana", "Silva"), "Personal", 61),
        detail(2, 2, ("Ben", "Cole"), "Personal", 88),
    ]);
    let tops = top_delinquents(&rows);

    let partition = &tops[&("Personal".to_string(), DelinquencyBucket::Days60To89)];
    assert_eq!(partition.len(), 2);
    assert_eq!(partition[0].rank, 1);
    assert_eq!(partition[0].customer_id, 2);
    assert_eq!(partition[1].rank, 2);
    assert_eq!(partition[1].customer_id, 1);
}

/// Equal days_past_due ties break by customer_id ascending — the
/// canonical tie-break, independent of input order.
#[test]
fn ties_break_by_customer_id_ascending() {
    let rows = classify_all(vec![
        detail(1, 30, ("Cam", "Diaz"), "Auto", 45),
        detail(2, 10, ("Ana", "Silva"), "Auto", 45),
        detail(3, 20, ("Ben", "Cole"), "Auto", 45),
    ]);
    let tops = top_delinquents(&rows);

    let partition = &tops[&("Auto".to_string(), DelinquencyBucket::Days30To59)];
    let ids: Vec<i64> = partition.iter().map(|c| c.customer_id).collect();
    assert_eq!(ids, vec![10, 20, 30]);
}

/// Ranking is reproducible regardless of input order: shuffled input
/// yields the same partitions.
#[test]
fn ranking_is_order_independent() {
    let base = vec![
        detail(1, 1, ("Ana", "Silva"), "Auto", 95),
        detail(2, 2, ("Ben", "Cole"), "Auto", 120),
        detail(3, 3, ("Cam", "Diaz"), "Personal", 12),
        detail(4, 4, ("Dee", "Epps"), "Auto", 95),
    ];
    let mut reversed = base.clone();
    reversed.reverse();

    let tops_a = top_delinquents(&classify_all(base));
    let tops_b = top_delinquents(&classify_all(reversed));
    assert_eq!(tops_a, tops_b);
}

/// Partitions are keyed by (product, bucket): the same bucket across
/// products ranks independently.
#[test]
fn partitions_are_per_product_and_bucket() {
    let rows = classify_all(vec![
        detail(1, 1, ("Ana", "Silva"), "Auto", 15),
        detail(2, 2, ("Ben", "Cole"), "Personal", 15),
        detail(3, 3, ("Cam", "Diaz"), "Auto", 75),
    ]);
    let tops = top_delinquents(&rows);

    assert_eq!(tops.len(), 3);
    assert_eq!(
        tops[&("Auto".to_string(), DelinquencyBucket::Days1To29)].len(),
        1
    );
    assert_eq!(
        tops[&("Personal".to_string(), DelinquencyBucket::Days1To29)].len(),
        1
    );
    assert_eq!(
        tops[&("Auto".to_string(), DelinquencyBucket::Days60To89)].len(),
        1
    );
}
