// src/error.rs
//! Error taxonomy for ingest and snapshot I/O.
//!
//! Lookup misses and unresolved cross-references are *not* errors; they show
//! up as `None` or empty iterators in `resolve` and `catalog`.

use thiserror::Error;

use crate::specs::TableKind;

#[derive(Error, Debug)]
pub enum Error {
    /// A `rowspan`/`colspan` attribute that is not a non-negative integer.
    #[error("row {row}, cell {cell}: {attr}={value:?} is not a non-negative integer")]
    MalformedSpan {
        row: usize,
        cell: usize,
        attr: &'static str,
        value: String,
    },

    /// A resolved grid row narrower than its table kind requires.
    #[error("{table} table, row {row}: expected {expected} columns, found {found}")]
    ColumnShape {
        table: TableKind,
        row: usize,
        expected: usize,
        found: usize,
    },

    /// Any of the above, tagged with the page it came from.
    #[error("{url} ({table} table): {source}")]
    Table {
        url: String,
        table: TableKind,
        #[source]
        source: Box<Error>,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Snapshot error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn in_table(self, url: &str, table: TableKind) -> Self {
        Error::Table { url: s!(url), table, source: Box::new(self) }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
