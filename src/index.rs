//! Product to department mapping

use std::collections::HashMap;

use crate::loader::ProductRow;

/// Mapping from product id to department id. Built once per run and
/// read-only afterward.
pub type ProductIndex = HashMap<String, String>;

/// Build the product index from the product table rows.
///
/// One entry per distinct product id. Duplicate product ids are not
/// expected in the input; if they occur, the last row wins.
pub fn build_product_index(products: &[ProductRow]) -> ProductIndex {
    let mut index = ProductIndex::with_capacity(products.len());
    for row in products {
        index.insert(row.product_id.clone(), row.department_id.clone());
    }
    index
}
