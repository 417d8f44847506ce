//! End-to-end batch run
//!
//! One strictly forward pass: both tables are read to completion before any
//! aggregation starts, and aggregation finishes before the writer opens the
//! output file. A failure anywhere aborts the run with no report written.

use std::fs;

use anyhow::{Context, Result};
use tracing::info;

use crate::aggregate::{build_dept_freq_table, build_product_freq_table, FreqKind};
use crate::config::JobPaths;
use crate::index::build_product_index;
use crate::loader::{load_order_lines, load_products};
use crate::report::{build_department_records, write_report};

/// Row counts of a completed run, for the final summary line.
#[derive(Debug, Clone, Copy)]
pub struct RunSummary {
    pub order_lines: usize,
    pub products: usize,
    pub departments: usize,
}

/// Run the whole pipeline against the given file locations.
pub fn run(paths: &JobPaths) -> Result<RunSummary> {
    let orders = load_order_lines(&paths.order_products)?;
    info!(
        "loaded {} order lines from {}",
        orders.len(),
        paths.order_products.display()
    );

    let products = load_products(&paths.products)?;
    info!(
        "loaded {} products from {}",
        products.len(),
        paths.products.display()
    );

    let index = build_product_index(&products);

    let purchase_totals = build_product_freq_table(&orders, FreqKind::Total);
    let first_orders = build_product_freq_table(&orders, FreqKind::FirstOrders);

    let totals_by_dept = build_dept_freq_table(&index, &purchase_totals);
    let first_by_dept = build_dept_freq_table(&index, &first_orders);

    let records = build_department_records(&totals_by_dept, &first_by_dept)?;

    if let Some(parent) = paths.report.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory {}", parent.display()))?;
    }
    write_report(&paths.report, &records)?;
    info!(
        "wrote {} department rows to {}",
        records.len(),
        paths.report.display()
    );

    Ok(RunSummary {
        order_lines: orders.len(),
        products: products.len(),
        departments: records.len(),
    })
}
