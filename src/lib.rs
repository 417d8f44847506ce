//! # Purchase Analytics
//!
//! Derives a per-department purchase report from two delimited input
//! tables: an order/product association table and a product-to-department
//! mapping table. For every department the report carries the total number
//! of purchase line-items, how many of those were a customer's first order
//! of the product, and the ratio between the two.
//!
//! The whole run is one linear batch pass: both tables are read to
//! completion, counts are accumulated per product, re-keyed per department,
//! merged into one record per department and written out sorted.
//!
//! ## Modules
//!
//! - `config` - Fixed input/output file locations
//! - `error` - Typed errors for the whole run
//! - `loader` - Reads the two input tables into row collections
//! - `index` - Product to department mapping
//! - `aggregate` - Per-product and per-department frequency tables
//! - `report` - Merged department records and the CSV writer
//! - `pipeline` - End-to-end orchestration
pub mod aggregate;
pub mod config;
pub mod error;
pub mod index;
pub mod loader;
pub mod pipeline;
pub mod report;
