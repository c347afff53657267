//! delinq-core — loan delinquency analytics over a relational warehouse.
//!
//! PIPELINE ORDER (fixed, documented, never reordered):
//!   1. Load     (customers, loan_applications, loan_repayments)
//!   2. Join     (repayments ⨝ approved applications ⨝ customers)
//!   3. Classify (days_past_due → delinquency bucket)
//!   4. Aggregate + Rank (independent branches over the classified rows)
//!   5. Assemble (rate rows + top-3 customer slots)
//!   6. Write    (delinquency_report, replaced whole on every run)
//!
//! RULES:
//!   - Only store.rs talks to the database.
//!   - Every stage between load and write is a pure function over
//!     in-memory rows; the same input always yields the same report.
//!   - Ordering is explicit everywhere: no stage depends on hash order.

pub mod aggregate;
pub mod bucket;
pub mod error;
pub mod join;
pub mod pipeline;
pub mod rank;
pub mod record;
pub mod report;
pub mod rng;
pub mod sample;
pub mod store;
pub mod types;
