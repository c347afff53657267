//! SQLite warehouse adapter.
//!
//! RULE: Only store.rs talks to the database.
//! Pipeline stages work on in-memory rows — they never execute SQL.
//! The warehouse plays the role of the columnar dataset store: three
//! source tables read in full, one report table replaced in full.

use crate::bucket::DelinquencyBucket;
use crate::error::{PipelineError, PipelineResult};
use crate::rank::TopCustomer;
use crate::record::{Customer, LoanApplication, Repayment};
use crate::report::ReportRow;
use crate::sample::SampleBook;
use rusqlite::{params, Connection};

pub struct WarehouseStore {
    conn: Connection,
}

impl WarehouseStore {
    /// Open (or create) the warehouse database at `path`.
    pub fn open(path: &str) -> PipelineResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only matters for real files; :memory: ignores it.
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Open an in-memory warehouse (used in tests).
    pub fn in_memory() -> PipelineResult<Self> {
        let conn = Connection::open_in_memory()?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn })
    }

    /// Apply the warehouse schema.
    pub fn migrate(&self) -> PipelineResult<()> {
        self.conn
            .execute_batch(include_str!("../../migrations/001_warehouse.sql"))?;
        Ok(())
    }

    // ── Source tables: load ────────────────────────────────────

    pub fn load_customers(&self) -> PipelineResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(
            "SELECT customer_id, first_name, last_name
             FROM customers ORDER BY customer_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Customer {
                customer_id: row.get(0)?,
                first_name: row.get(1)?,
                last_name: row.get(2)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn load_loan_applications(&self) -> PipelineResult<Vec<LoanApplication>> {
        let mut stmt = self.conn.prepare(
            "SELECT application_id, customer_id, product_type, application_status, loan_amount
             FROM loan_applications ORDER BY application_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(LoanApplication {
                application_id: row.get(0)?,
                customer_id: row.get(1)?,
                product_type: row.get(2)?,
                application_status: row.get(3)?,
                loan_amount: row.get(4)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn load_repayments(&self) -> PipelineResult<Vec<Repayment>> {
        let mut stmt = self.conn.prepare(
            "SELECT repayment_id, loan_id, days_past_due, amount_due, amount_paid, payment_date
             FROM loan_repayments ORDER BY repayment_id ASC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(Repayment {
                repayment_id: row.get(0)?,
                loan_id: row.get(1)?,
                days_past_due: row.get(2)?,
                amount_due: row.get(3)?,
                amount_paid: row.get(4)?,
                payment_date: row.get(5)?,
            })
        })?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    // ── Source tables: insert ──────────────────────────────────

    pub fn insert_customer(&self, c: &Customer) -> PipelineResult<()> {
        self.conn.execute(
            "INSERT INTO customers (customer_id, first_name, last_name)
             VALUES (?1, ?2, ?3)",
            params![c.customer_id, &c.first_name, &c.last_name],
        )?;
        Ok(())
    }

    pub fn insert_loan_application(&self, app: &LoanApplication) -> PipelineResult<()> {
        self.conn.execute(
            "INSERT INTO loan_applications
                (application_id, customer_id, product_type, application_status, loan_amount)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                app.application_id,
                app.customer_id,
                &app.product_type,
                &app.application_status,
                app.loan_amount,
            ],
        )?;
        Ok(())
    }

    pub fn insert_repayment(&self, r: &Repayment) -> PipelineResult<()> {
        self.conn.execute(
            "INSERT INTO loan_repayments
                (repayment_id, loan_id, days_past_due, amount_due, amount_paid, payment_date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                r.repayment_id,
                r.loan_id,
                r.days_past_due,
                r.amount_due,
                r.amount_paid,
                &r.payment_date,
            ],
        )?;
        Ok(())
    }

    /// Bulk-load a generated sample book into an empty warehouse.
    pub fn import_book(&self, book: &SampleBook) -> PipelineResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        for customer in &book.customers {
            self.insert_customer(customer)?;
        }
        for application in &book.applications {
            self.insert_loan_application(application)?;
        }
        for repayment in &book.repayments {
            self.insert_repayment(repayment)?;
        }
        tx.commit()?;
        Ok(())
    }

    // ── Report table ───────────────────────────────────────────

    /// Replace the delinquency_report table with `rows`. Delete and
    /// inserts share one transaction: a failed write leaves the prior
    /// report intact.
    pub fn write_report(&self, rows: &[ReportRow]) -> PipelineResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        self.conn.execute("DELETE FROM delinquency_report", [])?;
        for row in rows {
            self.conn.execute(
                "INSERT INTO delinquency_report (
                    product_type, delinquency_bucket, delinquency_rate,
                    customer_1_name, customer_1_id, customer_1_days_past_due,
                    customer_2_name, customer_2_id, customer_2_days_past_due,
                    customer_3_name, customer_3_id, customer_3_days_past_due
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12)",
                params![
                    &row.product_type,
                    row.delinquency_bucket.label(),
                    row.delinquency_rate,
                    row.customer_1.as_ref().map(|c| c.customer_name.as_str()),
                    row.customer_1.as_ref().map(|c| c.customer_id),
                    row.customer_1.as_ref().map(|c| c.days_past_due),
                    row.customer_2.as_ref().map(|c| c.customer_name.as_str()),
                    row.customer_2.as_ref().map(|c| c.customer_id),
                    row.customer_2.as_ref().map(|c| c.days_past_due),
                    row.customer_3.as_ref().map(|c| c.customer_name.as_str()),
                    row.customer_3.as_ref().map(|c| c.customer_id),
                    row.customer_3.as_ref().map(|c| c.days_past_due),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Read the persisted report back, in the pipeline's presentation
    /// order. Used by tests and tooling.
    pub fn load_report(&self) -> PipelineResult<Vec<ReportRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT product_type, delinquency_bucket, delinquency_rate,
                    customer_1_name, customer_1_id, customer_1_days_past_due,
                    customer_2_name, customer_2_id, customer_2_days_past_due,
                    customer_3_name, customer_3_id, customer_3_days_past_due
             FROM delinquency_report",
        )?;

        type RawSlot = (Option<String>, Option<i64>, Option<i64>);
        let raw = stmt
            .query_map([], |row| {
                Ok((
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, f64>(2)?,
                    (row.get(3)?, row.get(4)?, row.get(5)?),
                    (row.get(6)?, row.get(7)?, row.get(8)?),
                    (row.get(9)?, row.get(10)?, row.get(11)?),
                ))
            })?
            .collect::<Result<Vec<(String, String, f64, RawSlot, RawSlot, RawSlot)>, _>>()?;

        let mut rows = Vec::with_capacity(raw.len());
        for (product_type, label, rate, slot_1, slot_2, slot_3) in raw {
            let bucket = DelinquencyBucket::from_label(&label)
                .ok_or(PipelineError::UnknownBucket { label })?;
            rows.push(ReportRow {
                product_type,
                delinquency_bucket: bucket,
                delinquency_rate: rate,
                customer_1: slot_to_customer(1, slot_1),
                customer_2: slot_to_customer(2, slot_2),
                customer_3: slot_to_customer(3, slot_3),
            });
        }
        rows.sort_by(|a, b| {
            a.product_type
                .cmp(&b.product_type)
                .then(a.delinquency_bucket.cmp(&b.delinquency_bucket))
        });
        Ok(rows)
    }

    pub fn report_row_count(&self) -> PipelineResult<i64> {
        self.conn
            .query_row("SELECT COUNT(*) FROM delinquency_report", [], |row| {
                row.get(0)
            })
            .map_err(Into::into)
    }
}

fn slot_to_customer(
    rank: u32,
    (name, id, days): (Option<String>, Option<i64>, Option<i64>),
) -> Option<TopCustomer> {
    match (name, id, days) {
        (Some(customer_name), Some(customer_id), Some(days_past_due)) => Some(TopCustomer {
            rank,
            customer_name,
            customer_id,
            days_past_due,
        }),
        _ => None,
    }
}
