//! Fixed file locations for a batch run
//!
//! The pipeline reads from and writes to fixed relative locations; there
//! are no command-line flags, environment variables, or config files. The
//! constants below are the only place the layout is defined.

use std::path::{Path, PathBuf};

/// Directory the two source tables are read from.
pub const INPUT_DIR: &str = "input";

/// Directory the report is written to.
pub const OUTPUT_DIR: &str = "output";

/// Order/product association table.
pub const ORDER_PRODUCTS_FILE: &str = "order_products.csv";

/// Product-to-department mapping table.
pub const PRODUCTS_FILE: &str = "products.csv";

/// Name of the generated report.
pub const REPORT_FILE: &str = "report.csv";

/// Resolved locations of the two inputs and the output for one run.
#[derive(Debug, Clone)]
pub struct JobPaths {
    pub order_products: PathBuf,
    pub products: PathBuf,
    pub report: PathBuf,
}

impl JobPaths {
    /// Resolve the fixed layout relative to the process working directory.
    pub fn from_working_dir() -> Self {
        Self::rooted_at(Path::new("."))
    }

    /// Resolve the fixed layout under an arbitrary root directory.
    pub fn rooted_at(root: &Path) -> Self {
        Self {
            order_products: root.join(INPUT_DIR).join(ORDER_PRODUCTS_FILE),
            products: root.join(INPUT_DIR).join(PRODUCTS_FILE),
            report: root.join(OUTPUT_DIR).join(REPORT_FILE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_rooted_at_directory() {
        let paths = JobPaths::rooted_at(Path::new("/data/run"));

        assert_eq!(
            paths.order_products,
            PathBuf::from("/data/run/input/order_products.csv")
        );
        assert_eq!(paths.products, PathBuf::from("/data/run/input/products.csv"));
        assert_eq!(paths.report, PathBuf::from("/data/run/output/report.csv"));
    }

    #[test]
    fn test_working_dir_layout_is_relative() {
        let paths = JobPaths::from_working_dir();

        assert!(paths.order_products.is_relative());
        assert!(paths.report.ends_with("output/report.csv"));
    }
}
