//! Error types for the report pipeline
//!
//! Every failure is fatal: the run either produces a complete report or
//! aborts before the writer opens the output file.

use std::path::PathBuf;
use thiserror::Error;

/// The unified error type for the whole pipeline.
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("failed to open {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{} is empty, expected a header row", .path.display())]
    MissingHeader { path: PathBuf },

    #[error("malformed row in {}: {source}", .path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("row {row} in {} has no column {column}", .path.display())]
    MissingColumn {
        path: PathBuf,
        row: u64,
        column: usize,
    },

    #[error("department id {value:?} is not an integer")]
    InvalidDepartmentId { value: String },

    #[error("department {department_id} has a zero order total")]
    EmptyDepartmentTotal { department_id: String },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

impl ReportError {
    /// Open failure for an input file.
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    /// Malformed row or failed field coercion while reading `path`.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Serialization failure while writing `path`.
    pub fn write(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
