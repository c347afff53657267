//! Deterministic sample warehouse generation.
//!
//! Produces a plausible loan book for demos and tests: customers with
//! curated names, applications across the product catalog with
//! weighted statuses, and repayments whose days_past_due distribution
//! is mostly current with a long delinquent tail. Same seed, same book.

use crate::record::{Customer, LoanApplication, Repayment, STATUS_APPROVED};
use crate::rng::SeedRng;

pub const PRODUCT_TYPES: [&str; 4] = ["Auto", "Credit Card", "Mortgage", "Personal"];

#[derive(Debug, Clone)]
pub struct SampleBook {
    pub customers: Vec<Customer>,
    pub applications: Vec<LoanApplication>,
    pub repayments: Vec<Repayment>,
}

/// Generate a sample book with `customer_count` customers.
pub fn generate(seed: u64, customer_count: usize) -> SampleBook {
    let mut rng = SeedRng::new(seed);

    let mut customers = Vec::with_capacity(customer_count);
    let mut applications = Vec::new();
    let mut repayments = Vec::new();

    let mut next_application_id: i64 = 1;
    let mut next_repayment_id: i64 = 1;

    for customer_id in 1..=customer_count as i64 {
        customers.push(Customer {
            customer_id,
            first_name: rng.pick(&FIRST_NAMES).to_string(),
            last_name: rng.pick(&LAST_NAMES).to_string(),
        });

        // 1 or 2 applications per customer.
        let application_count = 1 + rng.next_u64_below(2);
        for _ in 0..application_count {
            let status = application_status(&mut rng);
            let application = LoanApplication {
                application_id: next_application_id,
                customer_id,
                product_type: rng.pick(&PRODUCT_TYPES).to_string(),
                application_status: status.to_string(),
                loan_amount: 500.0 + rng.next_f64() * 49_500.0,
            };
            next_application_id += 1;

            if application.is_approved() {
                // 1..=6 repayments per approved loan.
                let repayment_count = 1 + rng.next_u64_below(6);
                for month in 0..repayment_count {
                    let amount_due = application.loan_amount / 48.0;
                    let days_past_due = days_past_due(&mut rng);
                    repayments.push(Repayment {
                        repayment_id: next_repayment_id,
                        loan_id: application.application_id,
                        days_past_due,
                        amount_due,
                        amount_paid: if days_past_due == 0 { amount_due } else { 0.0 },
                        payment_date: format!("2025-{:02}-01", 1 + month),
                    });
                    next_repayment_id += 1;
                }
            }

            applications.push(application);
        }
    }

    SampleBook {
        customers,
        applications,
        repayments,
    }
}

/// 70% Approved, 20% Rejected, 10% Pending.
fn application_status(rng: &mut SeedRng) -> &'static str {
    let roll = rng.next_f64();
    if roll < 0.70 {
        STATUS_APPROVED
    } else if roll < 0.90 {
        "Rejected"
    } else {
        "Pending"
    }
}

/// 70% current; the rest spread across the delinquency ranges with a
/// thinning tail out to ~120 days.
fn days_past_due(rng: &mut SeedRng) -> i64 {
    if rng.chance(0.70) {
        return 0;
    }
    let roll = rng.next_f64();
    if roll < 0.50 {
        1 + rng.next_u64_below(29) as i64
    } else if roll < 0.75 {
        30 + rng.next_u64_below(30) as i64
    } else if roll < 0.90 {
        60 + rng.next_u64_below(30) as i64
    } else {
        90 + rng.next_u64_below(31) as i64
    }
}

const FIRST_NAMES: [&str; 40] = [
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Daniel", "Karen", "Matthew", "Lisa", "Anthony", "Nancy", "Mark", "Sandra", "Steven", "Ashley",
    "Andrew", "Emily", "Joshua", "Michelle", "Kevin", "Amanda", "Brian", "Melissa", "George",
    "Stephanie", "Eric", "Rebecca",
];

const LAST_NAMES: [&str; 40] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores",
];
