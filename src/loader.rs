//! Readers for the two source tables
//!
//! Both tables are comma-separated with a mandatory header row that is
//! validated to exist and then discarded. Order lines are fully numeric;
//! product rows are narrowed to the two identifier columns the pipeline
//! uses, kept as opaque tokens.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;

use crate::error::ReportError;

/// One purchase line-item from the order/product table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct OrderLine {
    pub order_id: i64,
    pub product_id: i64,
    pub add_to_cart_order: i64,
    pub reordered: i64,
}

impl OrderLine {
    /// Whether this line-item was the customer's first recorded order of
    /// the product, i.e. the reorder flag is unset.
    pub fn is_first_order(&self) -> bool {
        self.reordered == 0
    }
}

/// One row of the product table, narrowed to the columns the pipeline uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRow {
    pub product_id: String,
    pub department_id: String,
}

const PRODUCT_ID_COL: usize = 0;
const DEPARTMENT_ID_COL: usize = 3;

/// Load the order/product table, coercing every field of every data row to
/// an integer. Any non-numeric field aborts the load.
///
/// The returned rows are sorted ascending by `order_id`. Nothing downstream
/// depends on that order (aggregation is keyed by product), the sort only
/// pins down the observable output order of the loader.
pub fn load_order_lines(path: &Path) -> Result<Vec<OrderLine>, ReportError> {
    let mut reader = open_reader(path, false)?;
    require_header(&mut reader, path)?;

    let mut lines = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ReportError::csv(path, e))?;
        let line: OrderLine = record
            .deserialize(None)
            .map_err(|e| ReportError::csv(path, e))?;
        lines.push(line);
    }

    lines.sort_by_key(|line| line.order_id);
    Ok(lines)
}

/// Load the product table, retaining the first column (product id) and the
/// fourth column (department id) of each row. The columns in between are
/// discarded without inspection. Row order is preserved.
pub fn load_products(path: &Path) -> Result<Vec<ProductRow>, ReportError> {
    let mut reader = open_reader(path, true)?;
    require_header(&mut reader, path)?;

    let mut products = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| ReportError::csv(path, e))?;
        let product_id = field(&record, path, PRODUCT_ID_COL)?;
        let department_id = field(&record, path, DEPARTMENT_ID_COL)?;
        products.push(ProductRow {
            product_id: product_id.to_string(),
            department_id: department_id.to_string(),
        });
    }

    Ok(products)
}

fn open_reader(path: &Path, flexible: bool) -> Result<csv::Reader<File>, ReportError> {
    let file = File::open(path).map_err(|e| ReportError::open(path, e))?;
    Ok(csv::ReaderBuilder::new().flexible(flexible).from_reader(file))
}

fn require_header(reader: &mut csv::Reader<File>, path: &Path) -> Result<(), ReportError> {
    let headers = reader.headers().map_err(|e| ReportError::csv(path, e))?;
    if headers.is_empty() {
        return Err(ReportError::MissingHeader {
            path: path.to_path_buf(),
        });
    }
    Ok(())
}

fn field<'r>(
    record: &'r csv::StringRecord,
    path: &Path,
    column: usize,
) -> Result<&'r str, ReportError> {
    record.get(column).ok_or_else(|| ReportError::MissingColumn {
        path: path.to_path_buf(),
        row: record.position().map_or(0, |pos| pos.line()),
        column,
    })
}
