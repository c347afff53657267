//! delinq-runner: headless delinquency report runner.
//!
//! Usage:
//!   delinq-runner --db warehouse.db
//!   delinq-runner --db warehouse.db --seed-sample --seed 42 --customers 250
//!   delinq-runner --db warehouse.db --json

use anyhow::Result;
use delinq_core::{pipeline, report, sample, store::WarehouseStore};
use std::env;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let db = args
        .windows(2)
        .find(|w| w[0] == "--db")
        .map(|w| w[1].as_str())
        .unwrap_or(":memory:");
    let seed_sample = args.iter().any(|a| a == "--seed-sample");
    let json = args.iter().any(|a| a == "--json");
    let seed = parse_arg(&args, "--seed", 42u64);
    let customers = parse_arg(&args, "--customers", 250usize);

    let store = WarehouseStore::open(db)?;
    store.migrate()?;

    if seed_sample {
        let book = sample::generate(seed, customers);
        store.import_book(&book)?;
        log::info!(
            "seeded sample warehouse: seed={seed} customers={} applications={} repayments={}",
            book.customers.len(),
            book.applications.len(),
            book.repayments.len(),
        );
    }

    let run = pipeline::run(&store)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&run.rows)?);
        return Ok(());
    }

    println!("Number of customers: {}", run.counts.customers);
    println!("Number of loan applications: {}", run.counts.loan_applications);
    println!("Number of repayments: {}", run.counts.repayments);
    println!();
    println!("Number of records after joins: {}", run.counts.joined);
    println!();
    print!("{}", report::render_report(&run.rows));
    println!();
    println!(
        "Report generated at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    println!("Results saved to {db} (delinquency_report)");

    Ok(())
}

fn parse_arg<T: std::str::FromStr + Copy>(args: &[String], flag: &str, default: T) -> T {
    args.windows(2)
        .find(|w| w[0] == flag)
        .and_then(|w| w[1].parse().ok())
        .unwrap_or(default)
}
