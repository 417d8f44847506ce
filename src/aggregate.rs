//! Frequency tables by product and by department
//!
//! Two aggregation passes run over the loaded order lines: one counting
//! every line-item, one counting only first orders. Each pass is then
//! re-keyed from product to department through the product index. All
//! accumulation is plain key-value counting; nothing depends on row order.

use std::collections::HashMap;

use crate::index::ProductIndex;
use crate::loader::OrderLine;

/// Which counter a product frequency pass accumulates.
///
/// An unsupported kind cannot be constructed, so the builder never has to
/// guard against one at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FreqKind {
    /// Count every line-item.
    Total,
    /// Count only line-items with an unset reorder flag.
    FirstOrders,
}

/// Count of line-items per product id.
pub type ProductFreqTable = HashMap<String, u64>;

/// Count of line-items per department id.
pub type DeptFreqTable = HashMap<String, u64>;

/// Accumulate one counter per product id over the order lines.
///
/// Keys are the decimal rendering of the line's product id, so they join
/// token-for-token against the product index.
pub fn build_product_freq_table(orders: &[OrderLine], kind: FreqKind) -> ProductFreqTable {
    let mut table = ProductFreqTable::new();
    for line in orders {
        if kind == FreqKind::FirstOrders && !line.is_first_order() {
            continue;
        }
        *table.entry(line.product_id.to_string()).or_insert(0) += 1;
    }
    table
}

/// Re-key a product frequency table into per-department sums.
///
/// Every index entry whose product id has a count contributes that count to
/// its department. Products without a count are skipped, never
/// zero-inserted, so a department appears only if at least one order line
/// reached it.
pub fn build_dept_freq_table(
    index: &ProductIndex,
    product_freq: &ProductFreqTable,
) -> DeptFreqTable {
    let mut table = DeptFreqTable::new();
    for (product_id, department_id) in index {
        if let Some(count) = product_freq.get(product_id) {
            *table.entry(department_id.clone()).or_insert(0) += count;
        }
    }
    table
}
