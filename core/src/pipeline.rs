//! Pipeline entry point: load → join → classify → aggregate/rank →
//! assemble → write.
//!
//! The store is the injected execution context; there is no global
//! state and nothing survives between runs. A failed load or write
//! aborts the run with no partial output.

use crate::aggregate::delinquency_rates;
use crate::bucket::classify_all;
use crate::error::PipelineResult;
use crate::join::join_repayment_details;
use crate::rank::top_delinquents;
use crate::record::RepaymentDetail;
use crate::report::{assemble_report, ReportRow};
use crate::store::WarehouseStore;
use serde::Serialize;

/// Row counts observed during a run, for logging and summaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceCounts {
    pub customers: usize,
    pub loan_applications: usize,
    pub repayments: usize,
    /// Repayments that survived both inner joins.
    pub joined: usize,
}

/// Outcome of one pipeline run.
#[derive(Debug, Clone, Serialize)]
pub struct PipelineRun {
    pub counts: SourceCounts,
    pub rows: Vec<ReportRow>,
}

/// The pure core of the pipeline: joined rows in, report rows out.
pub fn build_report(details: Vec<RepaymentDetail>) -> Vec<ReportRow> {
    let classified = classify_all(details);
    let rates = delinquency_rates(&classified);
    let tops = top_delinquents(&classified);
    assemble_report(rates, tops)
}

/// Run the full pipeline against a warehouse: load the three source
/// tables, compute the report, and replace the delinquency_report
/// table with the result.
pub fn run(store: &WarehouseStore) -> PipelineResult<PipelineRun> {
    let customers = store.load_customers()?;
    let applications = store.load_loan_applications()?;
    let repayments = store.load_repayments()?;

    log::info!(
        "loaded {} customers, {} loan applications, {} repayments",
        customers.len(),
        applications.len(),
        repayments.len(),
    );

    let details = join_repayment_details(&repayments, &applications, &customers);
    let joined = details.len();
    log::info!("{joined} repayment records after joins");

    let counts = SourceCounts {
        customers: customers.len(),
        loan_applications: applications.len(),
        repayments: repayments.len(),
        joined,
    };

    let rows = build_report(details);
    store.write_report(&rows)?;
    log::info!("wrote {} report rows", rows.len());

    Ok(PipelineRun { counts, rows })
}
