//! Common test utilities and helpers

use std::fs;

use purchase_analytics::config::JobPaths;
use tempfile::TempDir;

/// Header row of the order/product table.
pub const ORDERS_HEADER: &str = "order_id,product_id,add_to_cart_order,reordered";

/// Header row of the product table.
pub const PRODUCTS_HEADER: &str = "product_id,product_name,aisle_id,department_id";

/// Create a temp directory holding the fixed `input/` layout with the given
/// table contents, and the job paths resolved against it.
pub fn setup_inputs(orders: &str, products: &str) -> (TempDir, JobPaths) {
    let dir = TempDir::new().expect("create temp dir");
    let paths = JobPaths::rooted_at(dir.path());

    fs::create_dir_all(paths.order_products.parent().unwrap()).expect("create input dir");
    fs::write(&paths.order_products, orders).expect("write order table");
    fs::write(&paths.products, products).expect("write product table");

    (dir, paths)
}

/// Join header and data rows into file contents with trailing newline.
pub fn table(header: &str, rows: &[&str]) -> String {
    let mut contents = String::from(header);
    contents.push('\n');
    for row in rows {
        contents.push_str(row);
        contents.push('\n');
    }
    contents
}
