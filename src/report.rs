//! Department records and the report writer
//!
//! Merges the two department frequency tables into one record per
//! department with a derived first-order ratio, then serializes the sorted
//! records as CSV.

use std::path::Path;

use serde::Serialize;

use crate::aggregate::DeptFreqTable;
use crate::error::ReportError;

/// Column headers of the report, in output order.
const REPORT_HEADER: [&str; 4] = [
    "department_id",
    "number_of_orders",
    "number_of_first_orders",
    "percentage",
];

/// One output row of the report.
///
/// `percentage` is pre-formatted to exactly two fraction digits so the
/// writer emits it verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentRecord {
    pub department_id: i64,
    pub number_of_orders: u64,
    pub number_of_first_orders: u64,
    pub percentage: String,
}

/// Merge the totals and first-orders tables into sorted department records.
///
/// Every key of the totals table yields exactly one record. A department
/// absent from the first-orders table gets a zero count and a `0.00` ratio.
/// Departments present only in the first-orders table are ignored; they
/// cannot occur when both tables come from the same index, but a stray key
/// must not crash the run.
pub fn build_department_records(
    totals: &DeptFreqTable,
    first_orders: &DeptFreqTable,
) -> Result<Vec<DepartmentRecord>, ReportError> {
    let mut records = Vec::with_capacity(totals.len());

    for (department, &total) in totals {
        // Every key here came from a non-empty aggregation, so a zero
        // total is an internal invariant breach, not a data condition.
        if total == 0 {
            return Err(ReportError::EmptyDepartmentTotal {
                department_id: department.clone(),
            });
        }

        let department_id =
            department
                .parse::<i64>()
                .map_err(|_| ReportError::InvalidDepartmentId {
                    value: department.clone(),
                })?;
        let first = first_orders.get(department).copied().unwrap_or(0);

        records.push(DepartmentRecord {
            department_id,
            number_of_orders: total,
            number_of_first_orders: first,
            percentage: format_ratio(first, total),
        });
    }

    records.sort_by_key(|record| record.department_id);
    Ok(records)
}

/// Write the report to `path`, overwriting any existing file.
///
/// The header row is written unconditionally, so a run with zero
/// departments still produces a valid header-only report.
pub fn write_report(path: &Path, records: &[DepartmentRecord]) -> Result<(), ReportError> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .map_err(|e| ReportError::write(path, e))?;

    writer
        .write_record(REPORT_HEADER)
        .map_err(|e| ReportError::write(path, e))?;
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| ReportError::write(path, e))?;
    }

    writer
        .flush()
        .map_err(|e| ReportError::write(path, csv::Error::from(e)))?;
    Ok(())
}

fn format_ratio(first: u64, total: u64) -> String {
    format!("{:.2}", first as f64 / total as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn table(entries: &[(&str, u64)]) -> DeptFreqTable {
        entries
            .iter()
            .map(|(id, count)| (id.to_string(), *count))
            .collect()
    }

    #[test]
    fn test_merge_produces_one_record_per_department() {
        let totals = table(&[("1", 2), ("2", 1)]);
        let first = table(&[("1", 1), ("2", 1)]);

        let records = build_department_records(&totals, &first).unwrap();

        assert_eq!(
            records,
            vec![
                DepartmentRecord {
                    department_id: 1,
                    number_of_orders: 2,
                    number_of_first_orders: 1,
                    percentage: "0.50".to_string(),
                },
                DepartmentRecord {
                    department_id: 2,
                    number_of_orders: 1,
                    number_of_first_orders: 1,
                    percentage: "1.00".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_department_without_first_orders_gets_zero_ratio() {
        let totals = table(&[("4", 5)]);
        let first = table(&[]);

        let records = build_department_records(&totals, &first).unwrap();

        assert_eq!(records[0].number_of_first_orders, 0);
        assert_eq!(records[0].percentage, "0.00");
    }

    #[test]
    fn test_stray_first_order_department_is_ignored() {
        let totals = table(&[("1", 2)]);
        let first = table(&[("1", 1), ("9", 3)]);

        let records = build_department_records(&totals, &first).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].department_id, 1);
    }

    #[test]
    fn test_sort_is_numeric_not_lexical() {
        let totals = table(&[("10", 1), ("2", 1), ("1", 1)]);
        let first = table(&[]);

        let records = build_department_records(&totals, &first).unwrap();
        let ids: Vec<i64> = records.iter().map(|r| r.department_id).collect();

        assert_eq!(ids, vec![1, 2, 10]);
    }

    #[test]
    fn test_ratio_keeps_two_fraction_digits() {
        let totals = table(&[("1", 10)]);
        let first = table(&[("1", 1)]);

        let records = build_department_records(&totals, &first).unwrap();

        assert_eq!(records[0].percentage, "0.10");
    }

    #[test]
    fn test_non_numeric_department_is_an_error() {
        let totals = table(&[("frozen", 3)]);
        let first = table(&[]);

        let err = build_department_records(&totals, &first).unwrap_err();
        assert!(matches!(err, ReportError::InvalidDepartmentId { .. }));
    }

    #[test]
    fn test_zero_total_is_an_invariant_breach() {
        let totals = table(&[("1", 0)]);
        let first = table(&[]);

        let err = build_department_records(&totals, &first).unwrap_err();
        assert!(matches!(err, ReportError::EmptyDepartmentTotal { .. }));
    }

    #[test]
    fn test_written_report_matches_expected_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        let records = vec![
            DepartmentRecord {
                department_id: 1,
                number_of_orders: 2,
                number_of_first_orders: 1,
                percentage: "0.50".to_string(),
            },
            DepartmentRecord {
                department_id: 2,
                number_of_orders: 1,
                number_of_first_orders: 1,
                percentage: "1.00".to_string(),
            },
        ];

        write_report(&path, &records).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "department_id,number_of_orders,number_of_first_orders,percentage\n\
             1,2,1,0.50\n\
             2,1,1,1.00\n"
        );
    }

    #[test]
    fn test_empty_report_still_has_header() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");

        write_report(&path, &[]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "department_id,number_of_orders,number_of_first_orders,percentage\n"
        );
    }

    #[test]
    fn test_existing_report_is_overwritten() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, "stale contents that are longer than the new report\n").unwrap();

        write_report(&path, &[]).unwrap();

        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "department_id,number_of_orders,number_of_first_orders,percentage\n"
        );
    }
}
