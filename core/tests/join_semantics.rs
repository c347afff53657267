use delinq_core::join::join_repayment_details;
use delinq_core::record::{Customer, LoanApplication, Repayment};

// ── Helpers ──────────────────────────────────────────────────────────────────

fn customer(customer_id: i64, first: &str, last: &str) -> Customer {
    Customer {
        customer_id,
        first_name: first.into(),
        last_name: last.into(),
    }
}

fn application(application_id: i64, customer_id: i64, product: &str, status: &str) -> LoanApplication {
    LoanApplication {
        application_id,
        customer_id,
        product_type: product.into(),
        application_status: status.into(),
        loan_amount: 10_000.0,
    }
}

fn repayment(repayment_id: i64, loan_id: i64, days_past_due: i64) -> Repayment {
    Repayment {
        repayment_id,
        loan_id,
        days_past_due,
        amount_due: 250.0,
        amount_paid: 0.0,
        payment_date: "2025-03-01".into(),
    }
}

// ── Tests ────────────────────────────────────────────────────────────────────

/// A repayment with an approved application and a known customer
/// produces one detail row carrying the join columns.
#[test]
fn matching_repayment_is_denormalized() {
    let customers = vec![customer(7, "Ana", "Silva")];
    let applications = vec![application(100, 7, "Personal", "Approved")];
    let repayments = vec![repayment(1, 100, 45)];

    let details = join_repayment_details(&repayments, &applications, &customers);

    assert_eq!(details.len(), 1);
    let d = &details[0];
    assert_eq!(d.product_type, "Personal");
    assert_eq!(d.customer_id, 7);
    assert_eq!(d.customer_name(), "Ana Silva");
    assert_eq!(d.days_past_due(), 45);
    // Repayment attributes pass through unchanged.
    assert_eq!(d.repayment, repayments[0]);
}

/// Repayments against non-approved applications are dropped silently.
#[test]
fn non_approved_applications_are_filtered() {
    let customers = vec![customer(1, "Ana", "Silva"), customer(2, "Ben", "Cole")];
    let applications = vec![
        application(10, 1, "Auto", "Rejected"),
        application(11, 2, "Auto", "Pending"),
    ];
    let repayments = vec![repayment(1, 10, 5), repayment(2, 11, 5)];

    let details = join_repayment_details(&repayments, &applications, &customers);
    assert!(details.is_empty());
}

/// A repayment whose loan_id matches no application at all is dropped.
#[test]
fn missing_application_drops_repayment() {
    let customers = vec![customer(1, "Ana", "Silva")];
    let applications = vec![application(10, 1, "Auto", "Approved")];
    let repayments = vec![repayment(1, 999, 5)];

    let details = join_repayment_details(&repayments, &applications, &customers);
    assert!(details.is_empty());
}

/// An approved application pointing at a missing customer drops the
/// repayment on the second join.
#[test]
fn missing_customer_drops_repayment() {
    let customers = vec![customer(1, "Ana", "Silva")];
    let applications = vec![application(10, 404, "Auto", "Approved")];
    let repayments = vec![repayment(1, 10, 5)];

    let details = join_repayment_details(&repayments, &applications, &customers);
    assert!(details.is_empty());
}

/// Output preserves repayment input order, and only the orphan row is
/// excluded.
#[test]
fn output_order_follows_repayments() {
    let customers = vec![customer(1, "Ana", "Silva"), customer(2, "Ben", "Cole")];
    let applications = vec![
        application(10, 1, "Auto", "Approved"),
        application(11, 2, "Personal", "Approved"),
    ];
    let repayments = vec![
        repayment(1, 11, 3),
        repayment(2, 999, 60), // orphan
        repayment(3, 10, 0),
    ];

    let details = join_repayment_details(&repayments, &applications, &customers);

    let ids: Vec<i64> = details.iter().map(|d| d.repayment.repayment_id).collect();
    assert_eq!(ids, vec![1, 3]);
}
